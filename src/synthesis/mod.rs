pub mod gradient;

use log::debug;
use rayon::prelude::*;

use crate::config::{AuroraConfig, DISPLACEMENT_AMPLITUDE, SPARKLE_AMPLITUDE};
use crate::error::Result;
use crate::models::{ColumnMajorGrid, PixelGrid};
use crate::noise_field::{NoiseField, NoiseLayer};

/// Turns a noise field into the aurora pixel grid
pub struct GradientSynthesizer {
    config: AuroraConfig,
    noise: NoiseField,
}

impl GradientSynthesizer {
    pub fn new(config: AuroraConfig, noise: NoiseField) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, noise })
    }

    fn normalized_x(&self, x: u32) -> f64 {
        x as f64 / self.config.noise_scale()
    }

    /// Brightness shared by every pixel of column `x`
    pub fn column_luminance(&self, x: u32) -> f64 {
        let nx = self.normalized_x(x);
        gradient::column_luminance(
            self.noise.sample_1d(NoiseLayer::Medium, nx),
            self.noise.sample_1d(NoiseLayer::Fine, nx),
            self.noise.sample_1d(NoiseLayer::Finer, nx),
        )
    }

    /// Sampling height for output row `y0`: flipped, displaced, clamped to [0, H-1].
    /// Not rounded.
    pub fn effective_height(&self, x: u32, y0: u32) -> f64 {
        let h = self.config.height as f64;
        let displacement =
            self.noise
                .sample_2d(NoiseLayer::Finest, self.normalized_x(x), y0 as f64 / h);

        (h - y0 as f64 + DISPLACEMENT_AMPLITUDE * displacement).clamp(0.0, h - 1.0)
    }

    /// Color of output pixel (x, y0) given its column's luminance
    pub fn pixel(&self, x: u32, y0: u32, column_luminance: f64) -> [u8; 3] {
        let h = self.config.height as f64;
        let y = self.effective_height(x, y0);
        let t = y / h;

        let blend = gradient::blend(y, h, self.config.base, self.config.mid, self.config.top);
        let sparkle =
            SPARKLE_AMPLITUDE * self.noise.sample_2d(NoiseLayer::Medium, self.normalized_x(x), t);
        let luminance = gradient::local_luminance(t, column_luminance, sparkle);

        gradient::compose(luminance, blend.color())
    }

    fn fill_column(&self, x: u32, column: &mut [u8]) {
        let luminance = self.column_luminance(x);
        for (y0, rgb) in column.chunks_exact_mut(3).enumerate() {
            rgb.copy_from_slice(&self.pixel(x, y0 as u32, luminance));
        }
    }

    /// First pass: every column into one preallocated buffer
    pub fn synthesize_columns(&self) -> ColumnMajorGrid {
        let mut grid = ColumnMajorGrid::new(self.config.width(), self.config.height);
        let column_len = grid.column_len();

        grid.data
            .par_chunks_mut(column_len)
            .enumerate()
            .for_each(|(x, column)| self.fill_column(x as u32, column));

        debug!(
            "Synthesized {} columns of {} pixels",
            grid.width, grid.height
        );
        grid
    }

    /// Both passes: synthesize column-major, then transpose to row-major
    pub fn synthesize(&self) -> PixelGrid {
        let columns = self.synthesize_columns();
        let grid = columns.transpose();
        debug!("Transposed to {} rows of {} bytes", grid.height, grid.row_len());
        grid
    }
}
