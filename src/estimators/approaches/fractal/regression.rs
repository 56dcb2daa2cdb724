// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{DescriptorError, Result};
use crate::estimators::approaches::fractal::box_count::BoxCountSeries;
use ndarray::ArrayView1;

/// Ordinary least-squares line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination; 1 when the points are collinear.
    pub r_squared: f64,
}

impl LinearFit {
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a line to paired samples by least squares.
///
/// Needs at least two points with distinct `x`; otherwise the slope is
/// undefined and [`DescriptorError::InsufficientScale`] is returned.
pub fn least_squares(xs: ArrayView1<'_, f64>, ys: ArrayView1<'_, f64>) -> Result<LinearFit> {
    assert_eq!(xs.len(), ys.len(), "x and y must have the same length");
    let n = xs.len();
    if n < 2 {
        return Err(DescriptorError::InsufficientScale(format!(
            "a line needs at least two points, got {n}"
        )));
    }
    let n_f = n as f64;
    let mean_x = xs.sum() / n_f;
    let mean_y = ys.sum() / n_f;

    let dx = xs.mapv(|x| x - mean_x);
    let dy = ys.mapv(|y| y - mean_y);
    let sxx = dx.dot(&dx);
    let sxy = dx.dot(&dy);
    let syy = dy.dot(&dy);
    if sxx == 0.0 {
        return Err(DescriptorError::InsufficientScale(
            "all box sizes are identical".to_string(),
        ));
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    // ss_res = syy - slope * sxy for the least-squares line
    let r_squared = if syy == 0.0 {
        1.0
    } else {
        (1.0 - (syy - slope * sxy) / syy).clamp(0.0, 1.0)
    };
    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Fit `ln count = slope · ln size + intercept` over a box-count series.
///
/// The box-counting dimension is `-slope`.
pub fn fit_power_law(series: &BoxCountSeries) -> Result<LinearFit> {
    if series.len() < 2 {
        return Err(DescriptorError::InsufficientScale(format!(
            "{} box size(s) available, at least two are required",
            series.len()
        )));
    }
    let (xs, ys) = series.log_points()?;
    least_squares(xs.view(), ys.view())
}
