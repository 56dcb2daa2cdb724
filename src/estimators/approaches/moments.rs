// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Moment statistics over an [`IntensityDistribution`].
//!
//! Every function is a pure function of the distribution, with intensity
//! levels `x[i] = i`. Nothing is cached: skewness recomputes the mean and
//! standard deviation it depends on.

use crate::error::{DescriptorError, Result};
use crate::estimators::approaches::histogram::{IntensityDistribution, intensity_levels};

/// Shannon entropy in bits, H = -Σ p_i log2 p_i.
///
/// Bins with p_i = 0 contribute nothing and are skipped rather than passed
/// to the logarithm.
pub fn entropy(dist: &IntensityDistribution) -> f64 {
    let mut h = 0.0_f64;
    for (_, p) in dist.nonzero() {
        h -= p * p.log2();
    }
    h
}

/// Probability-weighted mean intensity, Σ x_i p_i.
///
/// Equal to the arithmetic mean of the raw pixel values.
pub fn mean_intensity(dist: &IntensityDistribution) -> f64 {
    intensity_levels().dot(&dist.probabilities())
}

/// Central moment of the given order about `mean`, Σ p_i (x_i - mean)^order.
pub fn central_moment(dist: &IntensityDistribution, mean: f64, order: i32) -> f64 {
    let deviations = intensity_levels().mapv(|x| (x - mean).powi(order));
    deviations.dot(&dist.probabilities())
}

/// Population standard deviation of the intensity distribution.
pub fn standard_deviation(dist: &IntensityDistribution) -> f64 {
    let mean = mean_intensity(dist);
    central_moment(dist, mean, 2).sqrt()
}

/// Third standardized moment, (1/σ³) Σ p_i (x_i - mean)³.
///
/// Undefined for a single-valued image; returns
/// [`DescriptorError::DegenerateDistribution`] when σ = 0.
pub fn skewness(dist: &IntensityDistribution) -> Result<f64> {
    let (mean, sigma) = nondegenerate_spread(dist, "skewness")?;
    Ok(central_moment(dist, mean, 3) / sigma.powi(3))
}

/// Excess kurtosis, (1/σ⁴) Σ p_i (x_i - mean)⁴ - 3. A normal distribution scores 0.
///
/// Returns [`DescriptorError::DegenerateDistribution`] when σ = 0.
pub fn kurtosis(dist: &IntensityDistribution) -> Result<f64> {
    let (mean, sigma) = nondegenerate_spread(dist, "kurtosis")?;
    Ok(central_moment(dist, mean, 4) / sigma.powi(4) - 3.0)
}

/// Σ p_i², within (0, 1]; exactly 1 only for a single-valued image.
pub fn uniformity(dist: &IntensityDistribution) -> f64 {
    let p = dist.probabilities();
    p.dot(&p)
}

/// 1 - 1/(1 + σ²), within [0, 1) and non-decreasing in σ.
pub fn relative_smoothness(dist: &IntensityDistribution) -> f64 {
    let sigma = standard_deviation(dist);
    1.0 - 1.0 / (1.0 + sigma * sigma)
}

fn nondegenerate_spread(
    dist: &IntensityDistribution,
    descriptor: &'static str,
) -> Result<(f64, f64)> {
    let mean = mean_intensity(dist);
    let sigma = central_moment(dist, mean, 2).sqrt();
    if sigma == 0.0 {
        return Err(DescriptorError::DegenerateDistribution { descriptor });
    }
    Ok((mean, sigma))
}
