// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{DescriptorError, Result};
use ndarray::{Array1, ArrayView2, Axis};
use tracing::trace;

/// Smallest box exponent: boxes of side 2^2 = 4.
pub const MIN_BOX_EXPONENT: u32 = 2;

/// Number of boundary-crossing boxes at one box size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxCount {
    pub size: usize,
    pub count: usize,
}

/// Ordered `(box size, count)` samples, largest box first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxCountSeries {
    samples: Vec<BoxCount>,
}

impl BoxCountSeries {
    pub fn new(samples: Vec<BoxCount>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[BoxCount] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoxCount> {
        self.samples.iter()
    }

    /// `(ln size, ln count)` for every sample.
    ///
    /// A zero count has no logarithm and fails with
    /// [`DescriptorError::InsufficientScale`] naming the offending box size.
    pub fn log_points(&self) -> Result<(Array1<f64>, Array1<f64>)> {
        if let Some(empty) = self.samples.iter().find(|s| s.count == 0) {
            return Err(DescriptorError::InsufficientScale(format!(
                "no boundary boxes at box size {}",
                empty.size
            )));
        }
        let xs = self.samples.iter().map(|s| (s.size as f64).ln()).collect();
        let ys = self.samples.iter().map(|s| (s.count as f64).ln()).collect();
        Ok((xs, ys))
    }
}

/// Box sizes `2^n` for `n` from `floor(log2(min_side))` down to
/// [`MIN_BOX_EXPONENT`]. Empty when `min_side < 4`.
pub fn box_sizes(min_side: usize) -> Vec<usize> {
    if min_side < 1 << MIN_BOX_EXPONENT {
        return Vec::new();
    }
    let top = min_side.ilog2();
    (MIN_BOX_EXPONENT..=top).rev().map(|n| 1usize << n).collect()
}

/// Count `size × size` tiles whose on-pixel sum `S` satisfies `0 < S < size²`.
///
/// Tiles are laid out from the top-left corner without overlap. A partial
/// tile on the bottom or right edge is summed like any other, so it counts
/// whenever it holds at least one on-pixel (it can never reach `size²`).
pub fn box_count(mask: ArrayView2<'_, bool>, size: usize) -> usize {
    assert!(size > 0, "box size must be positive");
    let full = size * size;
    let mut count = 0usize;
    for band in mask.axis_chunks_iter(Axis(0), size) {
        for tile in band.axis_chunks_iter(Axis(1), size) {
            let on = tile.iter().filter(|&&b| b).count();
            if on > 0 && on < full {
                count += 1;
            }
        }
    }
    count
}

/// Box counts for every size from [`box_sizes`] applied to the shorter side of `mask`.
pub fn box_count_series(mask: ArrayView2<'_, bool>) -> BoxCountSeries {
    let (h, w) = mask.dim();
    let samples = box_sizes(h.min(w))
        .into_iter()
        .map(|size| {
            let count = box_count(mask, size);
            trace!(size, count, "box count");
            BoxCount { size, count }
        })
        .collect();
    BoxCountSeries::new(samples)
}
