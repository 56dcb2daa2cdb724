// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Box-counting fractal dimension of a binarized image.
//!
//! The grayscale image is thresholded into a boolean mask, tiles that straddle
//! the on/off boundary are counted at box sizes 2^n, and the dimension is the
//! negated slope of `ln count` against `ln size`. The histogram is never
//! consulted, so this branch shares nothing with the moment statistics.

pub mod box_count;
pub mod plot;
pub mod regression;

pub use box_count::{BoxCount, BoxCountSeries, box_count, box_count_series, box_sizes};
pub use plot::plot_box_count_series;
pub use regression::{LinearFit, fit_power_law, least_squares};

use crate::error::{DescriptorError, Result};
use crate::estimators::approaches::image::IntensityImage;
use ndarray::Array2;
use tracing::debug;

/// Default binarization threshold on the normalized [0, 1] scale.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Settings for the box-counting estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalConfig {
    /// A pixel is "on" when `value / 255 < threshold`.
    pub threshold: f64,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl FractalConfig {
    pub fn new(threshold: f64) -> Result<Self> {
        let config = Self { threshold };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(DescriptorError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

/// Outcome of one box-counting run.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalProfile {
    /// Box-counting dimension, `-fit.slope`.
    pub dimension: f64,
    pub series: BoxCountSeries,
    pub fit: LinearFit,
}

/// Mark pixels whose normalized intensity lies strictly below `threshold`.
///
/// The comparison uses the stored 8-bit level, so colour input is compared
/// after luma has been rounded to the nearest level. A threshold between two
/// adjacent levels `l / 255` and `(l + 1) / 255` therefore splits pixels by
/// their rounded level, not by their unrounded luma.
pub fn binarize(image: &IntensityImage, threshold: f64) -> Result<Array2<bool>> {
    FractalConfig::new(threshold)?;
    Ok(image.pixels().mapv(|v| f64::from(v) / 255.0 < threshold))
}

/// Run the full box-counting pipeline and keep the intermediate series and fit.
pub fn fractal_profile(image: &IntensityImage, config: &FractalConfig) -> Result<FractalProfile> {
    config.validate()?;
    if image.is_empty() {
        return Err(DescriptorError::EmptyImage);
    }
    let mask = binarize(image, config.threshold)?;
    let series = box_count_series(mask.view());
    let fit = fit_power_law(&series)?;
    let dimension = -fit.slope;
    debug!(
        dimension,
        r_squared = fit.r_squared,
        scales = series.len(),
        "estimated box-counting dimension"
    );
    Ok(FractalProfile {
        dimension,
        series,
        fit,
    })
}

/// Box-counting fractal dimension of `image` binarized at `threshold`.
///
/// Fails with [`DescriptorError::InsufficientScale`] when the shorter side is
/// below 8 pixels (fewer than two box sizes) or when some box size sees no
/// boundary tile, e.g. on a blank image.
pub fn estimate_fractal_dimension(image: &IntensityImage, threshold: f64) -> Result<f64> {
    let config = FractalConfig::new(threshold)?;
    Ok(fractal_profile(image, &config)?.dimension)
}
