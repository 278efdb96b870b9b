use noise::{NoiseFn, Perlin};

use crate::config::OCTAVES;

/// A deterministic, spatially coherent scalar function of a 2D coordinate.
/// Output is roughly in [-1, 1] but not strictly bounded.
pub trait NoiseSource: Send + Sync {
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Perlin noise whose octave count sets the sampling frequency
#[derive(Clone)]
pub struct PerlinGenerator {
    perlin: Perlin,
    octaves: u32,
}

impl PerlinGenerator {
    pub fn new(octaves: u32, seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            octaves,
        }
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }
}

impl NoiseSource for PerlinGenerator {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let f = self.octaves as f64;
        self.perlin.get([x * f, y * f])
    }
}

/// Returns the same value everywhere
#[derive(Debug, Clone, Copy)]
pub struct ConstantNoise(pub f64);

impl NoiseSource for ConstantNoise {
    fn sample(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

/// The five generators, named by role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseLayer {
    /// 3 octaves
    Coarse,
    /// 6 octaves: column luminance and 2D sparkle
    Medium,
    /// 12 octaves
    Fine,
    /// 24 octaves
    Finer,
    /// 48 octaves: vertical displacement
    Finest,
}

impl NoiseLayer {
    pub const ALL: [NoiseLayer; 5] = [
        NoiseLayer::Coarse,
        NoiseLayer::Medium,
        NoiseLayer::Fine,
        NoiseLayer::Finer,
        NoiseLayer::Finest,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn octaves(self) -> u32 {
        OCTAVES[self.index()]
    }
}

/// Five independent noise generators, fixed for the lifetime of a run
pub struct NoiseField {
    generators: [Box<dyn NoiseSource>; 5],
}

impl NoiseField {
    /// Seeded Perlin generators; layer `i` uses `seed + i`
    pub fn new(seed: u32) -> Self {
        Self::from_sources(NoiseLayer::ALL.map(|layer| {
            let seed = seed.wrapping_add(layer.index() as u32);
            Box::new(PerlinGenerator::new(layer.octaves(), seed)) as Box<dyn NoiseSource>
        }))
    }

    pub fn from_sources(generators: [Box<dyn NoiseSource>; 5]) -> Self {
        Self { generators }
    }

    /// Every layer returns `value`
    pub fn constant(value: f64) -> Self {
        Self::from_sources(std::array::from_fn(|_| {
            Box::new(ConstantNoise(value)) as Box<dyn NoiseSource>
        }))
    }

    /// Samples along the line `y = 0`, which lies on a Perlin grid row
    pub fn sample_1d(&self, layer: NoiseLayer, x: f64) -> f64 {
        self.generators[layer.index()].sample(x, 0.0)
    }

    pub fn sample_2d(&self, layer: NoiseLayer, x: f64, y: f64) -> f64 {
        self.generators[layer.index()].sample(x, y)
    }
}
