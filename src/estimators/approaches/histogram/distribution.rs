// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{DescriptorError, Result};
use crate::estimators::approaches::image::IntensityImage;
use ndarray::{Array1, ArrayView1, ArrayView2};
use tracing::debug;

/// Number of 8-bit intensity levels.
pub const INTENSITY_LEVELS: usize = 256;

/// Normalized 256-bin intensity histogram of one image.
///
/// Entry `i` of [`probabilities`](Self::probabilities) is the fraction of
/// pixels with intensity `i`. The bins are non-negative and sum to one within
/// floating tolerance. Built once per image and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityDistribution {
    counts: [u64; INTENSITY_LEVELS],
    n: u64,
    probs: Array1<f64>,
}

impl IntensityDistribution {
    /// Normalize raw bin counts.
    ///
    /// Fails with [`DescriptorError::EmptyImage`] when all counts are zero.
    pub fn from_counts(counts: [u64; INTENSITY_LEVELS]) -> Result<Self> {
        let n: u64 = counts.iter().sum();
        if n == 0 {
            return Err(DescriptorError::EmptyImage);
        }
        let n_f = n as f64;
        let probs = counts.iter().map(|&c| c as f64 / n_f).collect::<Array1<f64>>();
        Ok(Self { counts, n, probs })
    }

    /// Probability per intensity level, length 256.
    pub fn probabilities(&self) -> ArrayView1<'_, f64> {
        self.probs.view()
    }

    #[inline]
    pub fn probability(&self, level: u8) -> f64 {
        self.probs[level as usize]
    }

    /// Raw pixel count per intensity level.
    pub fn counts(&self) -> &[u64; INTENSITY_LEVELS] {
        &self.counts
    }

    /// Total number of pixels the histogram was built from.
    pub fn pixel_count(&self) -> u64 {
        self.n
    }

    /// Number of intensity levels that occur at least once.
    pub fn support_size(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }

    /// `(level, p)` for every bin with non-zero probability, in level order.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.probs
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p != 0.0)
            .map(|(i, &p)| (i, p))
    }
}

/// Intensity levels `x[i] = i` as floats, aligned with the histogram bins.
pub fn intensity_levels() -> Array1<f64> {
    Array1::from_iter((0..INTENSITY_LEVELS).map(|i| i as f64))
}

/// Count how many pixels fall on each of the 256 intensity levels.
pub fn count_intensities(pixels: ArrayView2<'_, u8>) -> [u64; INTENSITY_LEVELS] {
    let mut counts = [0u64; INTENSITY_LEVELS];
    for &v in pixels.iter() {
        counts[v as usize] += 1;
    }
    counts
}

/// Build the normalized intensity histogram of an image.
///
/// An image without pixels has no defined distribution and yields
/// [`DescriptorError::EmptyImage`].
///
/// GPU acceleration (optional): When compiled with the `gpu_support` feature,
/// large images are counted by a WGSL compute shader. If no adapter is
/// available the CPU path is used transparently.
pub fn build_distribution(image: &IntensityImage) -> Result<IntensityDistribution> {
    if image.is_empty() {
        return Err(DescriptorError::EmptyImage);
    }

    #[cfg(feature = "gpu_support")]
    {
        use crate::estimators::approaches::histogram::histogram_gpu;
        if image.len() >= histogram_gpu::GPU_MIN_PIXELS {
            if let Some(counts) = histogram_gpu::gpu_intensity_histogram(image.pixels()) {
                debug!(pixels = image.len(), "intensity histogram counted on GPU");
                return IntensityDistribution::from_counts(counts);
            }
        }
    }

    let counts = count_intensities(image.pixels());
    let dist = IntensityDistribution::from_counts(counts)?;
    debug!(
        height = image.height(),
        width = image.width(),
        support = dist.support_size(),
        "built intensity distribution"
    );
    Ok(dist)
}
