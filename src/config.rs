use crate::error::{AuroraError, Result};
use crate::models::ColorStop;

pub const DEFAULT_HEIGHT: u32 = 144;
pub const WIDTH_FACTOR: u32 = 4;
pub const OUTPUT_PATH: &str = "gradient.png";

/// Frequencies of the five noise generators, coarsest first
pub const OCTAVES: [u32; 5] = [3, 6, 12, 24, 48];
pub const NOISE_SEED: u32 = 0;

pub const BASE_COLOR: ColorStop = ColorStop::new(0.2, 0.8, 0.7);
pub const MID_COLOR: ColorStop = ColorStop::new(0.9, 0.3, 0.75);
pub const TOP_COLOR: ColorStop = ColorStop::new(0.3, 0.2, 0.8);

/// Normalized height where the lower blend hands over to the upper one.
/// Fixed fractions, independent of the image height.
pub const MID_BREAKPOINT: f64 = 140.0 / 200.0;
pub const UPPER_SPAN: f64 = (200.0 - 140.0) / 200.0;

pub const LUMINANCE_BIAS: f64 = 1.3;
pub const LUMINANCE_WEIGHTS: [f64; 3] = [1.0, 0.3, 0.2];
pub const LUMINANCE_NORMALIZER: f64 = 2.6;
pub const LUMINANCE_FALLOFF: f64 = 1.3;

pub const DISPLACEMENT_AMPLITUDE: f64 = 3.0;
pub const SPARKLE_AMPLITUDE: f64 = 10.0;

/// Parameters of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct AuroraConfig {
    pub height: u32,
    pub base: ColorStop,
    pub mid: ColorStop,
    pub top: ColorStop,
    pub seed: u32,
}

impl AuroraConfig {
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn width(&self) -> u32 {
        self.height.saturating_mul(WIDTH_FACTOR)
    }

    pub fn noise_scale(&self) -> f64 {
        self.width() as f64
    }

    pub fn validate(&self) -> Result<()> {
        if self.height == 0 {
            return Err(AuroraError::InvalidDimensions(
                "height must be greater than zero".to_string(),
            ));
        }
        if self.height.checked_mul(WIDTH_FACTOR).is_none() {
            return Err(AuroraError::InvalidDimensions(format!(
                "width {} x {} overflows",
                self.height, WIDTH_FACTOR
            )));
        }
        Ok(())
    }
}

impl Default for AuroraConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            base: BASE_COLOR,
            mid: MID_COLOR,
            top: TOP_COLOR,
            seed: NOISE_SEED,
        }
    }
}
