use std::time::Instant;

use log::{debug, info};

use crate::config::AuroraConfig;
use crate::error::Result;
use crate::models::PixelGrid;
use crate::noise_field::NoiseField;
use crate::sink::ImageSink;
use crate::synthesis::GradientSynthesizer;

/// One generation run: noise field → synthesis → transpose → sink
pub struct Pipeline {
    config: AuroraConfig,
    noise: Option<NoiseField>,
}

impl Pipeline {
    pub fn new(config: AuroraConfig) -> Self {
        Self {
            config,
            noise: None,
        }
    }

    /// Use these generators instead of the seeded Perlin field
    pub fn with_noise(mut self, noise: NoiseField) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Compute the pixel grid without writing it anywhere
    pub fn render(self) -> Result<PixelGrid> {
        let Pipeline { config, noise } = self;
        config.validate()?;

        let noise = noise.unwrap_or_else(|| NoiseField::new(config.seed));
        info!("Generating {}x{} aurora", config.width(), config.height);

        let start = Instant::now();
        let synthesizer = GradientSynthesizer::new(config, noise)?;
        let grid = synthesizer.synthesize();
        debug!("Synthesis took {:?}", start.elapsed());

        Ok(grid)
    }

    /// Render and hand the row-major grid to `sink`
    pub fn run(self, sink: &dyn ImageSink) -> Result<PixelGrid> {
        let grid = self.render()?;
        sink.write(grid.width, grid.height, grid.as_bytes())?;
        info!("Image written");
        Ok(grid)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(AuroraConfig::default())
    }
}
