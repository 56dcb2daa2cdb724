// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Typed intensity grid and the grayscale reduction rules that feed it.

pub mod luma;

use crate::error::{DescriptorError, Result};
use ndarray::{Array2, ArrayView2, ArrayView3, ArrayViewD, Axis, Ix2, Ix3};

/// A single-channel 2D grid of 8-bit intensity samples (rows × columns).
///
/// All descriptors consume this type. Colour and floating-point inputs are
/// reduced to it once, at construction, so that malformed inputs fail here
/// rather than inside a formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityImage {
    pixels: Array2<u8>,
}

impl IntensityImage {
    /// Wrap an existing grayscale grid.
    pub fn new(pixels: Array2<u8>) -> Self {
        Self { pixels }
    }

    /// Build from samples on a normalized [0, 1] scale.
    ///
    /// Values are scaled by 255, rounded and clamped. NaN or infinite samples
    /// are rejected with [`DescriptorError::NonFiniteSample`].
    pub fn from_normalized(values: ArrayView2<'_, f64>) -> Result<Self> {
        if let Some(((row, col), _)) = values.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(DescriptorError::NonFiniteSample { row, col });
        }
        let pixels = values.mapv(|v| (v * 255.0).round().clamp(0.0, 255.0) as u8);
        Ok(Self { pixels })
    }

    /// Build from a channel-last `(rows, cols, channels)` array.
    ///
    /// One channel is squeezed, three (RGB) or four (RGBA, alpha ignored) are
    /// reduced with [`luma::LUMA_WEIGHTS`]. Any other channel count is a
    /// [`DescriptorError::Shape`].
    pub fn from_channels(data: ArrayView3<'_, u8>) -> Result<Self> {
        let (rows, cols, channels) = data.dim();
        let pixels = match channels {
            1 => data.index_axis(Axis(2), 0).to_owned(),
            3 | 4 => Array2::from_shape_fn((rows, cols), |(r, c)| {
                luma::luma(data[[r, c, 0]], data[[r, c, 1]], data[[r, c, 2]])
            }),
            _ => {
                return Err(DescriptorError::Shape {
                    shape: vec![rows, cols, channels],
                    reason: "expected 1, 3 or 4 channels",
                });
            }
        };
        Ok(Self { pixels })
    }

    /// Build from an array of arbitrary dimensionality.
    ///
    /// Two dimensions are taken as-is; three are treated as channel-last colour.
    pub fn from_dyn(data: ArrayViewD<'_, u8>) -> Result<Self> {
        let shape = data.shape().to_vec();
        match data.ndim() {
            2 => {
                let grid = data
                    .into_dimensionality::<Ix2>()
                    .map_err(|_| DescriptorError::Shape {
                        shape,
                        reason: "not a 2D grid",
                    })?;
                Ok(Self::new(grid.to_owned()))
            }
            3 => {
                let channels = data
                    .into_dimensionality::<Ix3>()
                    .map_err(|_| DescriptorError::Shape {
                        shape,
                        reason: "not a channel-last 3D array",
                    })?;
                Self::from_channels(channels)
            }
            _ => Err(DescriptorError::Shape {
                shape,
                reason: "expected 2 dimensions, or 3 with a trailing channel axis",
            }),
        }
    }

    /// Borrow the underlying grid.
    pub fn pixels(&self) -> ArrayView2<'_, u8> {
        self.pixels.view()
    }

    pub fn into_inner(self) -> Array2<u8> {
        self.pixels
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// `(height, width)`
    pub fn dim(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel values mapped onto [0, 1].
    pub fn normalized(&self) -> Array2<f64> {
        self.pixels.mapv(|v| f64::from(v) / 255.0)
    }
}

impl From<Array2<u8>> for IntensityImage {
    fn from(pixels: Array2<u8>) -> Self {
        Self::new(pixels)
    }
}
