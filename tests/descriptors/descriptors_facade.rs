use crate::test_helpers::*;
use image::{DynamicImage, Rgb, RgbImage};
use ndarray::{Array3, ArrayD, IxDyn};
use solar_descriptors::estimators::approaches::fractal::FractalConfig;
use solar_descriptors::estimators::descriptors::{Descriptors, StatisticalProfile};
use solar_descriptors::{DescriptorError, IntensityImage};

#[test]
fn all_white_8x8_through_facade() {
    let pixels = Array2::from_elem((8, 8), 255u8);
    assert_eq!(Descriptors::entropy(&pixels).unwrap(), 0.0);
    assert_eq!(Descriptors::mean_intensity(&pixels).unwrap(), 255.0);
    assert_eq!(Descriptors::standard_deviation(&pixels).unwrap(), 0.0);
    assert_eq!(Descriptors::uniformity(&pixels).unwrap(), 1.0);
    assert_eq!(Descriptors::relative_smoothness(&pixels).unwrap(), 0.0);
}

#[test]
fn degenerate_moments_do_not_block_other_descriptors() {
    let img = constant_image(16, 16, 77);
    assert!(matches!(
        Descriptors::skewness(&img),
        Err(DescriptorError::DegenerateDistribution { .. })
    ));
    assert!(matches!(
        Descriptors::kurtosis(&img),
        Err(DescriptorError::DegenerateDistribution { .. })
    ));
    assert_eq!(Descriptors::mean_intensity(&img).unwrap(), 77.0);
    assert_eq!(Descriptors::entropy(&img).unwrap(), 0.0);
}

#[test]
fn profile_reports_undefined_moments_as_none() {
    let profile = Descriptors::statistical_profile(&constant_image(4, 4, 200)).unwrap();
    assert_eq!(
        profile,
        StatisticalProfile {
            entropy: 0.0,
            mean_intensity: 200.0,
            standard_deviation: 0.0,
            skewness: None,
            kurtosis: None,
            uniformity: 1.0,
            relative_smoothness: 0.0,
        }
    );
}

#[test]
fn profile_matches_individual_descriptors() {
    let img = gaussian_image(48, 48, 90.0, 20.0, 21);
    let profile = Descriptors::statistical_profile(&img).unwrap();
    assert_eq!(profile.entropy, Descriptors::entropy(&img).unwrap());
    assert_eq!(profile.mean_intensity, Descriptors::mean_intensity(&img).unwrap());
    assert_eq!(profile.standard_deviation, Descriptors::standard_deviation(&img).unwrap());
    assert_eq!(profile.skewness, Some(Descriptors::skewness(&img).unwrap()));
    assert_eq!(profile.kurtosis, Some(Descriptors::kurtosis(&img).unwrap()));
    assert_eq!(profile.uniformity, Descriptors::uniformity(&img).unwrap());
    assert_eq!(profile.relative_smoothness, Descriptors::relative_smoothness(&img).unwrap());
}

#[test]
fn checkerboard_profile() {
    let profile = Descriptors::statistical_profile(&checkerboard(8, 8, 0, 255)).unwrap();
    assert_abs_diff_eq!(profile.entropy, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(profile.mean_intensity, 127.5, epsilon = 1e-12);
    assert_abs_diff_eq!(profile.uniformity, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(profile.standard_deviation, 127.5, epsilon = 1e-9);
}

#[test]
fn colour_input_is_reduced_before_any_statistic() {
    let rgb = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
    let dynamic = DynamicImage::ImageRgb8(rgb.clone());
    assert_eq!(Descriptors::mean_intensity(&rgb).unwrap(), 255.0);
    assert_eq!(Descriptors::mean_intensity(&dynamic).unwrap(), 255.0);

    let channels = Array3::<u8>::from_elem((10, 10, 3), 255);
    assert_eq!(Descriptors::uniformity(&channels).unwrap(), 1.0);
}

#[test]
fn shape_errors_surface_from_every_descriptor() {
    let data = ArrayD::<u8>::zeros(IxDyn(&[2, 2, 2, 2]));
    assert!(matches!(Descriptors::entropy(&data), Err(DescriptorError::Shape { .. })));
    assert!(matches!(
        Descriptors::fractal_dimension(&data, 0.5),
        Err(DescriptorError::Shape { .. })
    ));
}

#[test]
fn empty_input_fails_instead_of_producing_nan() {
    let empty = Array2::<u8>::zeros((0, 3));
    assert_eq!(Descriptors::entropy(&empty), Err(DescriptorError::EmptyImage));
    assert_eq!(Descriptors::mean_intensity(&empty), Err(DescriptorError::EmptyImage));
    assert_eq!(Descriptors::statistical_profile(&empty), Err(DescriptorError::EmptyImage));
}

#[test]
fn fractal_failure_leaves_moments_intact() {
    let img = constant_image(64, 64, 10);
    assert!(Descriptors::fractal_dimension(&img, 0.5).is_err());
    assert_eq!(Descriptors::mean_intensity(&img).unwrap(), 10.0);
}

#[test]
fn fractal_profile_through_facade() {
    let img = filled_square(128, 29, 98);
    let profile = Descriptors::fractal_profile(&img, &FractalConfig::default()).unwrap();
    assert_eq!(
        profile.dimension,
        Descriptors::fractal_dimension(&img, 0.5).unwrap()
    );
    assert_eq!(profile.series.len(), 6);
}

#[test]
fn images_can_be_processed_on_independent_threads() {
    let images: Vec<IntensityImage> = (0..4).map(|seed| random_image(32, 32, seed)).collect();
    let serial: Vec<StatisticalProfile> = images
        .iter()
        .map(|img| Descriptors::statistical_profile(img).unwrap())
        .collect();
    let parallel: Vec<StatisticalProfile> = std::thread::scope(|scope| {
        let handles: Vec<_> = images
            .iter()
            .map(|img| scope.spawn(move || Descriptors::statistical_profile(img).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(serial, parallel);
}
