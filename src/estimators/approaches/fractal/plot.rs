// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Diagnostic log-log plot of a box-count series and its fitted line.
// Rendering draws shapes only (no captions or tick labels), so it needs no font backend.

use crate::error::{DescriptorError, Result};
use crate::estimators::approaches::fractal::box_count::BoxCountSeries;
use crate::estimators::approaches::fractal::regression::LinearFit;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

pub const PLOT_SIZE: (u32, u32) = (640, 480);

fn plot_err<E: std::fmt::Display>(e: E) -> DescriptorError {
    DescriptorError::Plot(e.to_string())
}

/// Padded `[min, max]` of the samples; never zero-width.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let pad = ((hi - lo) * 0.1).max(0.5);
    (lo - pad, hi + pad)
}

/// Render `(ln size, ln count)` samples as points and `fit` as a line into a
/// bitmap at `path` (format chosen from the extension, e.g. `.png`).
pub fn plot_box_count_series(
    series: &BoxCountSeries,
    fit: &LinearFit,
    path: impl AsRef<Path>,
) -> Result<()> {
    let (xs, ys) = series.log_points()?;
    if xs.is_empty() {
        return Err(DescriptorError::InsufficientScale(
            "nothing to plot in an empty series".to_string(),
        ));
    }
    let (x_min, x_max) = padded_range(xs.iter().copied());
    let (y_min, y_max) = padded_range(
        ys.iter()
            .copied()
            .chain([fit.predict(x_min), fit.predict(x_max)]),
    );

    let root = BitMapBackend::new(path.as_ref(), PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            [(x_min, fit.predict(x_min)), (x_max, fit.predict(x_max))],
            &RED,
        ))
        .map_err(plot_err)?;
    chart
        .draw_series(
            xs.iter()
                .zip(ys.iter())
                .map(|(&x, &y)| Circle::new((x, y), 4, BLUE.filled())),
        )
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    debug!(path = %path.as_ref().display(), samples = series.len(), "wrote box-count plot");
    Ok(())
}
