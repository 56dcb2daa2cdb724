// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::Result;
use crate::estimators::approaches::image::IntensityImage;
use crate::estimators::traits::ToIntensityImage;
use ndarray::{Array2, Array3, ArrayD, ArrayView2};

/// ITU-R BT.709 luma coefficients for (R, G, B). They sum to 1.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2125, 0.7154, 0.0721];

/// Weighted grayscale value of one RGB sample, rounded to the nearest level.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_WEIGHTS[0] * f64::from(r)
        + LUMA_WEIGHTS[1] * f64::from(g)
        + LUMA_WEIGHTS[2] * f64::from(b);
    y.round().clamp(0.0, 255.0) as u8
}

impl ToIntensityImage for Array2<u8> {
    fn to_intensity_image(&self) -> Result<IntensityImage> {
        Ok(IntensityImage::new(self.clone()))
    }
}

impl ToIntensityImage for ArrayView2<'_, u8> {
    fn to_intensity_image(&self) -> Result<IntensityImage> {
        Ok(IntensityImage::new(self.to_owned()))
    }
}

impl ToIntensityImage for Array3<u8> {
    fn to_intensity_image(&self) -> Result<IntensityImage> {
        IntensityImage::from_channels(self.view())
    }
}

impl ToIntensityImage for ArrayD<u8> {
    fn to_intensity_image(&self) -> Result<IntensityImage> {
        IntensityImage::from_dyn(self.view())
    }
}

// Pixel buffers from the `image` crate. Decoding stays with the caller.

impl ToIntensityImage for image::GrayImage {
    fn to_intensity_image(&self) -> Result<IntensityImage> {
        let (w, h) = self.dimensions();
        let pixels = Array2::from_shape_fn((h as usize, w as usize), |(r, c)| {
            self.get_pixel(c as u32, r as u32).0[0]
        });
        Ok(IntensityImage::new(pixels))
    }
}

impl ToIntensityImage for image::RgbImage {
    fn to_intensity_image(&self) -> Result<IntensityImage> {
        let (w, h) = self.dimensions();
        let pixels = Array2::from_shape_fn((h as usize, w as usize), |(r, c)| {
            let [red, green, blue] = self.get_pixel(c as u32, r as u32).0;
            luma(red, green, blue)
        });
        Ok(IntensityImage::new(pixels))
    }
}

impl ToIntensityImage for image::RgbaImage {
    fn to_intensity_image(&self) -> Result<IntensityImage> {
        let (w, h) = self.dimensions();
        let pixels = Array2::from_shape_fn((h as usize, w as usize), |(r, c)| {
            let [red, green, blue, _alpha] = self.get_pixel(c as u32, r as u32).0;
            luma(red, green, blue)
        });
        Ok(IntensityImage::new(pixels))
    }
}

impl ToIntensityImage for image::DynamicImage {
    fn to_intensity_image(&self) -> Result<IntensityImage> {
        match self {
            image::DynamicImage::ImageLuma8(gray) => gray.to_intensity_image(),
            image::DynamicImage::ImageRgb8(rgb) => rgb.to_intensity_image(),
            image::DynamicImage::ImageRgba8(rgba) => rgba.to_intensity_image(),
            // Luma+alpha and every 16-bit/float layout go through 8-bit RGB.
            other => other.to_rgb8().to_intensity_image(),
        }
    }
}
