// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Probability model: the normalized 256-bin intensity histogram.

pub mod distribution;
#[cfg(feature = "gpu_support")]
pub mod histogram_gpu;

pub use distribution::{
    INTENSITY_LEVELS, IntensityDistribution, build_distribution, count_intensities,
    intensity_levels,
};
