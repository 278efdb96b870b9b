use std::f64::consts::FRAC_PI_2;

use aurora::{AuroraConfig, GradientSynthesizer, NoiseField, PixelGrid};

/// Renders `config` with every noise generator stuck at `value`.
pub fn render_constant(config: AuroraConfig, value: f64) -> PixelGrid {
    GradientSynthesizer::new(config, NoiseField::constant(value))
        .expect("valid config")
        .synthesize()
}

/// Expected color of output row `y0` when all noise is zero, computed
/// directly from the gradient formulas.
pub fn noise_free_pixel(config: &AuroraConfig, y0: u32) -> [u8; 3] {
    let h = config.height as f64;
    let y = (h - y0 as f64).clamp(0.0, h - 1.0);
    let t = y / h;

    let luminance = 255.0 * 1.3 / 2.6;
    let (ratio, a, b) = if t < 0.7 {
        ((FRAC_PI_2 * t / 0.7).cos(), config.base, config.mid)
    } else {
        ((FRAC_PI_2 * ((h - y) / h) / 0.3).sin(), config.mid, config.top)
    };
    let l = ((FRAC_PI_2 * t / 1.3).cos() * luminance).clamp(0.0, 255.0);

    let a = a.channels();
    let b = b.channels();
    std::array::from_fn(|i| (l * (a[i] * ratio + b[i] * (1.0 - ratio))) as u8)
}

/// Column-major grid whose pixels encode their own (x, y) position.
pub fn patterned_columns(width: u32, height: u32) -> aurora::ColumnMajorGrid {
    let mut grid = aurora::ColumnMajorGrid::new(width, height);
    for x in 0..width {
        for y in 0..height {
            let i = 3 * (x * height + y) as usize;
            grid.data[i] = x as u8;
            grid.data[i + 1] = y as u8;
            grid.data[i + 2] = (x * 7 + y * 13) as u8;
        }
    }
    grid
}
