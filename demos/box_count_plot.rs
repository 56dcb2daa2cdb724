use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solar_descriptors::IntensityImage;
use solar_descriptors::estimators::approaches::fractal::{
    FractalConfig, fractal_profile, plot_box_count_series,
};
use tracing_subscriber::EnvFilter;

/// Granulation-like texture: a coarse random grid of bright and dark cells
fn granulation(side: usize, cell: usize, seed: u64) -> IntensityImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let cells = side.div_ceil(cell);
    let levels = Array2::from_shape_fn((cells, cells), |_| rng.gen_range(60..=200u8));
    IntensityImage::new(Array2::from_shape_fn((side, side), |(r, c)| {
        levels[[r / cell, c / cell]]
    }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "box_counts.png".to_string());
    let image = granulation(256, 5, 2024);
    let profile = fractal_profile(&image, &FractalConfig::default())?;

    println!("Box-counting dimension: {:.4}", profile.dimension);
    println!(
        "Fit: ln N = {:.4} ln k + {:.4} (r² = {:.4})",
        profile.fit.slope, profile.fit.intercept, profile.fit.r_squared
    );

    plot_box_count_series(&profile.series, &profile.fit, &output)?;
    println!("Plot written to {output}");
    Ok(())
}
