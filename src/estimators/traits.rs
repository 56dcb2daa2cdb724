// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::Result;
use crate::estimators::approaches::image::IntensityImage;

/// Reduction of an input grid to a single-channel [`IntensityImage`].
///
/// This is the only boundary through which pixel data enters the descriptor
/// pipeline. Implementations must either produce a 2D grid or fail with
/// [`DescriptorError::Shape`](crate::DescriptorError::Shape); they never
/// reshape silently.
pub trait ToIntensityImage {
    /// Reduce `self` to a grayscale intensity grid.
    fn to_intensity_image(&self) -> Result<IntensityImage>;
}

impl ToIntensityImage for IntensityImage {
    fn to_intensity_image(&self) -> Result<IntensityImage> {
        Ok(self.clone())
    }
}
