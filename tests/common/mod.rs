mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from aurora for tests
pub use aurora::{
    AuroraConfig, AuroraError, ColorStop, ColumnMajorGrid, GradientSynthesizer, ImageSink,
    NoiseField, NoiseLayer, Pipeline, PixelGrid, PngSink,
};
