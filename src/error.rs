// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors raised while reducing an image or computing a descriptor.
///
/// Every error is local to the descriptor being computed: a
/// [`DegenerateDistribution`](DescriptorError::DegenerateDistribution) from
/// skewness leaves entropy or mean intensity on the same image unaffected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptorError {
    /// Input does not reduce to a two-dimensional grid.
    #[error("input of shape {shape:?} does not reduce to a 2D intensity grid: {reason}")]
    Shape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// The image contains zero pixels.
    #[error("image contains no pixels")]
    EmptyImage,

    /// Standard deviation is exactly zero, so a standardized moment is undefined.
    #[error("{descriptor} is undefined for a distribution with zero standard deviation")]
    DegenerateDistribution { descriptor: &'static str },

    /// The box-count series cannot support a log-log fit.
    #[error("insufficient scale for box counting: {0}")]
    InsufficientScale(String),

    /// A normalized sample was NaN or infinite.
    #[error("non-finite sample at ({row}, {col})")]
    NonFiniteSample { row: usize, col: usize },

    /// Binarization threshold outside the normalized [0, 1] range.
    #[error("binarization threshold {0} must be finite and within [0, 1]")]
    InvalidThreshold(f64),

    /// Rendering a diagnostic plot failed.
    #[error("plot rendering failed: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, DescriptorError>;
