pub mod approaches;
pub mod descriptors;
pub mod traits;

pub use traits::ToIntensityImage;
