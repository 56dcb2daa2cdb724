// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # solar-descriptors
//!
//! Scalar texture and intensity descriptors for grayscale solar imagery: a
//! moment-based statistical profile of the intensity histogram and a
//! box-counting estimate of the fractal dimension of image structure.
//!
//! ## Quick Start
//!
//! ```rust
//! use solar_descriptors::estimators::descriptors::Descriptors;
//! use solar_descriptors::IntensityImage;
//! use ndarray::Array2;
//!
//! // Left half dark, right half bright
//! let pixels = Array2::from_shape_fn((64, 64), |(_, c)| if c < 32 { 0u8 } else { 255u8 });
//! let image = IntensityImage::new(pixels);
//!
//! let entropy = Descriptors::entropy(&image).unwrap();
//! assert!((entropy - 1.0).abs() < 1e-12);
//!
//! let profile = Descriptors::statistical_profile(&image).unwrap();
//! assert_eq!(profile.mean_intensity, 127.5);
//! ```
//!
//! ## Descriptors
//!
//! | Descriptor | Source | Fails when |
//! |------------|--------|------------|
//! | Entropy (bits) | histogram | image is empty |
//! | Mean intensity | histogram | image is empty |
//! | Standard deviation | histogram | image is empty |
//! | Skewness | histogram | σ = 0 |
//! | Excess kurtosis | histogram | σ = 0 |
//! | Uniformity | histogram | image is empty |
//! | Relative smoothness | histogram | image is empty |
//! | Fractal dimension | binary mask | fewer than two scales, or a scale without boundary boxes |
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: the [`Descriptors`](estimators::descriptors::Descriptors) facade
//! 2. **Approaches**: image reduction, histogram model, moment statistics, box counting
//! 3. **Core Infrastructure**: shared traits and the [`DescriptorError`] taxonomy
//! 4. **Performance Layer**: optional GPU histogramming
//!
//! ## Feature Flags
//!
//! - `gpu_support`: count the 256-bin intensity histogram in a WGSL compute shader,
//!   falling back to the CPU when no adapter is available
//!
//! Every function is pure over its arguments. Nothing is cached between calls,
//! so images can be processed on independent threads without coordination.

pub mod error;
pub mod estimators;

pub use error::{DescriptorError, Result};
pub use estimators::approaches::image::IntensityImage;
pub use estimators::approaches::histogram::{IntensityDistribution, build_distribution};
pub use estimators::approaches::fractal::{FractalConfig, estimate_fractal_dimension};
