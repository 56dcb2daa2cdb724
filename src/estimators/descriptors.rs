use crate::error::{DescriptorError, Result};
use crate::estimators::approaches::fractal::{self, FractalConfig, FractalProfile};
use crate::estimators::approaches::histogram::{self, IntensityDistribution};
use crate::estimators::approaches::moments;
use crate::estimators::traits::ToIntensityImage;

/// All histogram-derived descriptors of one image.
///
/// Skewness and kurtosis are `None` when the image has a single intensity
/// value (σ = 0); the other descriptors are always defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticalProfile {
    pub entropy: f64,
    pub mean_intensity: f64,
    pub standard_deviation: f64,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub uniformity: f64,
    pub relative_smoothness: f64,
}

impl StatisticalProfile {
    /// Evaluate every moment descriptor on an already-built distribution.
    pub fn from_distribution(dist: &IntensityDistribution) -> Result<Self> {
        Ok(Self {
            entropy: moments::entropy(dist),
            mean_intensity: moments::mean_intensity(dist),
            standard_deviation: moments::standard_deviation(dist),
            skewness: defined(moments::skewness(dist))?,
            kurtosis: defined(moments::kurtosis(dist))?,
            uniformity: moments::uniformity(dist),
            relative_smoothness: moments::relative_smoothness(dist),
        })
    }
}

// Degenerate moments become `None`; any other failure still propagates.
fn defined(value: Result<f64>) -> Result<Option<f64>> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(DescriptorError::DegenerateDistribution { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Descriptor extraction entry points
///
/// This struct provides static methods that reduce any supported input to an
/// intensity image and evaluate one descriptor on it. Each call starts from
/// the image alone; nothing is shared or cached between calls.
pub struct Descriptors;

impl Descriptors {
    /// Builds the normalized 256-bin intensity histogram
    ///
    /// # Arguments
    ///
    /// * `image` - Any input that reduces to a 2D grayscale grid
    ///
    /// # Errors
    ///
    /// `Shape` if the input does not reduce to 2D, `EmptyImage` if it has no pixels
    pub fn distribution<I: ToIntensityImage + ?Sized>(image: &I) -> Result<IntensityDistribution> {
        histogram::build_distribution(&image.to_intensity_image()?)
    }

    /// Shannon entropy of the intensity histogram in bits
    pub fn entropy<I: ToIntensityImage + ?Sized>(image: &I) -> Result<f64> {
        Ok(moments::entropy(&Self::distribution(image)?))
    }

    pub fn mean_intensity<I: ToIntensityImage + ?Sized>(image: &I) -> Result<f64> {
        Ok(moments::mean_intensity(&Self::distribution(image)?))
    }

    /// Population standard deviation of pixel intensity
    pub fn standard_deviation<I: ToIntensityImage + ?Sized>(image: &I) -> Result<f64> {
        Ok(moments::standard_deviation(&Self::distribution(image)?))
    }

    /// Third standardized moment
    ///
    /// # Errors
    ///
    /// `DegenerateDistribution` for a single-valued image, in addition to the
    /// input errors of [`Descriptors::distribution`]
    pub fn skewness<I: ToIntensityImage + ?Sized>(image: &I) -> Result<f64> {
        moments::skewness(&Self::distribution(image)?)
    }

    /// Excess kurtosis (normal distribution → 0)
    ///
    /// # Errors
    ///
    /// `DegenerateDistribution` for a single-valued image
    pub fn kurtosis<I: ToIntensityImage + ?Sized>(image: &I) -> Result<f64> {
        moments::kurtosis(&Self::distribution(image)?)
    }

    pub fn uniformity<I: ToIntensityImage + ?Sized>(image: &I) -> Result<f64> {
        Ok(moments::uniformity(&Self::distribution(image)?))
    }

    pub fn relative_smoothness<I: ToIntensityImage + ?Sized>(image: &I) -> Result<f64> {
        Ok(moments::relative_smoothness(&Self::distribution(image)?))
    }

    /// Every histogram descriptor from a single histogram pass
    pub fn statistical_profile<I: ToIntensityImage + ?Sized>(
        image: &I,
    ) -> Result<StatisticalProfile> {
        StatisticalProfile::from_distribution(&Self::distribution(image)?)
    }

    /// Box-counting fractal dimension
    ///
    /// # Arguments
    ///
    /// * `image` - Any input that reduces to a 2D grayscale grid
    /// * `threshold` - Binarization threshold on the normalized [0, 1] scale
    ///   (see [`fractal::DEFAULT_THRESHOLD`])
    pub fn fractal_dimension<I: ToIntensityImage + ?Sized>(
        image: &I,
        threshold: f64,
    ) -> Result<f64> {
        fractal::estimate_fractal_dimension(&image.to_intensity_image()?, threshold)
    }

    /// Fractal dimension together with its box-count series and line fit
    pub fn fractal_profile<I: ToIntensityImage + ?Sized>(
        image: &I,
        config: &FractalConfig,
    ) -> Result<FractalProfile> {
        fractal::fractal_profile(&image.to_intensity_image()?, config)
    }
}
