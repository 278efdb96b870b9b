pub mod config;
pub mod error;
pub mod models;
pub mod noise_field;
pub mod pipeline;
pub mod sink;
pub mod synthesis;

pub use config::AuroraConfig;
pub use error::{AuroraError, Result};
pub use models::{ColorStop, ColumnMajorGrid, PixelGrid};
pub use noise_field::{ConstantNoise, NoiseField, NoiseLayer, NoiseSource, PerlinGenerator};
pub use pipeline::Pipeline;
pub use sink::{ImageSink, PngSink};
pub use synthesis::GradientSynthesizer;
