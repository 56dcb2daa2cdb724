use ndarray::Array2;
use solar_descriptors::estimators::approaches::fractal::FractalConfig;
use solar_descriptors::estimators::descriptors::Descriptors;
use solar_descriptors::IntensityImage;
use tracing_subscriber::EnvFilter;

/// Limb-darkened solar disk with a few dark spots, on a black sky
fn synthetic_sun(side: usize) -> IntensityImage {
    let centre = side as f64 / 2.0;
    let radius = side as f64 * 0.42;
    let spots = [(0.35, 0.45, 0.04), (0.6, 0.55, 0.025), (0.52, 0.3, 0.015)];
    IntensityImage::new(Array2::from_shape_fn((side, side), |(r, c)| {
        let y = r as f64 + 0.5 - centre;
        let x = c as f64 + 0.5 - centre;
        let rho2 = (x * x + y * y) / (radius * radius);
        if rho2 >= 1.0 {
            return 0;
        }
        // linear limb darkening, I(mu) = 1 - 0.6 (1 - mu)
        let mu = (1.0 - rho2).sqrt();
        let mut intensity = 235.0 * (1.0 - 0.6 * (1.0 - mu));
        for &(sy, sx, sr) in &spots {
            let dy = r as f64 / side as f64 - sy;
            let dx = c as f64 / side as f64 - sx;
            if dy * dy + dx * dx < sr * sr {
                intensity *= 0.3;
            }
        }
        intensity.round() as u8
    }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sun = synthetic_sun(512);
    let profile = Descriptors::statistical_profile(&sun)?;

    println!("Synthetic solar disk, {}x{}", sun.height(), sun.width());
    println!("  entropy (bits):      {:.4}", profile.entropy);
    println!("  mean intensity:      {:.4}", profile.mean_intensity);
    println!("  standard deviation:  {:.4}", profile.standard_deviation);
    match profile.skewness {
        Some(v) => println!("  skewness:            {v:.4}"),
        None => println!("  skewness:            undefined"),
    }
    match profile.kurtosis {
        Some(v) => println!("  excess kurtosis:     {v:.4}"),
        None => println!("  excess kurtosis:     undefined"),
    }
    println!("  uniformity:          {:.6}", profile.uniformity);
    println!("  relative smoothness: {:.6}", profile.relative_smoothness);

    // Dark pixels (sky and spots) are "on"
    let fractal = Descriptors::fractal_profile(&sun, &FractalConfig::new(0.2)?)?;
    println!(
        "  fractal dimension:   {:.4} (r² = {:.4})",
        fractal.dimension, fractal.fit.r_squared
    );
    for sample in fractal.series.iter() {
        println!("    box {:>4}: {:>6} boundary boxes", sample.size, sample.count);
    }
    Ok(())
}
