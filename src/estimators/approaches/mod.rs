pub mod fractal;
pub mod histogram;
pub mod image;
pub mod moments;

// Unified re-exports so callers can import from
// solar_descriptors::estimators::approaches::* directly.
pub use fractal::{
    BoxCount, BoxCountSeries, FractalConfig, FractalProfile, LinearFit, box_count,
    box_count_series, estimate_fractal_dimension, fractal_profile,
};
pub use histogram::{IntensityDistribution, build_distribution};
pub use self::image::IntensityImage;
pub use moments::{
    central_moment, entropy, kurtosis, mean_intensity, relative_smoothness, skewness,
    standard_deviation, uniformity,
};
