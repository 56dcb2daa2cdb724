use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use ndarray::{Array2, Array3, ArrayD, IxDyn};
use solar_descriptors::estimators::ToIntensityImage;
use solar_descriptors::estimators::approaches::image::luma::luma;
use solar_descriptors::{DescriptorError, IntensityImage};

#[test]
fn gray_buffer_keeps_row_major_layout() {
    // 3 wide, 2 tall; value encodes the position
    let buf = GrayImage::from_fn(3, 2, |x, y| Luma([(10 * y + x) as u8]));
    let img = buf.to_intensity_image().unwrap();
    assert_eq!(img.dim(), (2, 3));
    assert_eq!(img.pixels()[[0, 2]], 2);
    assert_eq!(img.pixels()[[1, 0]], 10);
}

#[test]
fn rgb_buffer_and_channel_array_agree() {
    let buf = RgbImage::from_fn(4, 4, |x, y| Rgb([(x * 60) as u8, (y * 60) as u8, 200]));
    let from_buffer = buf.to_intensity_image().unwrap();

    let channels = Array3::from_shape_fn((4, 4, 3), |(r, c, ch)| match ch {
        0 => (c * 60) as u8,
        1 => (r * 60) as u8,
        _ => 200,
    });
    let from_array = channels.to_intensity_image().unwrap();
    assert_eq!(from_buffer, from_array);
    assert_eq!(from_buffer.pixels()[[2, 1]], luma(60, 120, 200));
}

#[test]
fn alpha_channel_is_ignored() {
    let opaque = RgbaImage::from_pixel(2, 2, Rgba([90, 30, 10, 255]));
    let clear = RgbaImage::from_pixel(2, 2, Rgba([90, 30, 10, 0]));
    assert_eq!(
        opaque.to_intensity_image().unwrap(),
        clear.to_intensity_image().unwrap()
    );
}

#[test]
fn dynamic_image_dispatches_on_layout() {
    let gray = GrayImage::from_pixel(5, 5, Luma([42]));
    let dynamic = DynamicImage::ImageLuma8(gray);
    let img = dynamic.to_intensity_image().unwrap();
    assert!(img.pixels().iter().all(|&v| v == 42));

    let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 5, Rgb([42, 42, 42])));
    assert_eq!(rgb.to_intensity_image().unwrap(), img);
}

#[test]
fn dyn_array_with_two_dims_is_taken_as_is() {
    let data = ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![1u8, 2, 3, 4]).unwrap();
    let img = data.to_intensity_image().unwrap();
    assert_eq!(img.into_inner(), Array2::from_shape_vec((2, 2), vec![1u8, 2, 3, 4]).unwrap());
}

#[test]
fn one_dimensional_input_is_a_shape_error() {
    let data = ArrayD::<u8>::zeros(IxDyn(&[16]));
    match data.to_intensity_image() {
        Err(DescriptorError::Shape { shape, .. }) => assert_eq!(shape, vec![16]),
        other => panic!("expected a shape error, got {other:?}"),
    }
}

#[test]
fn empty_grid_is_representable() {
    let img = IntensityImage::new(Array2::zeros((0, 5)));
    assert!(img.is_empty());
    assert_eq!(img.len(), 0);
}
