use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};
use verdant_procgen::{GenerationError, Result};

/// Lattice period of the permutation table along each axis
const LATTICE_PERIOD: f64 = 256.0;

/// Octave stacking for [`NoiseField::sample_fractal`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalSettings {
    pub octaves: u32,
    pub lacunarity: f64,
    pub persistence: f64,
}

impl FractalSettings {
    pub const MAX_OCTAVES: u32 = 16;

    pub fn validate(&self) -> Result<()> {
        if self.octaves > Self::MAX_OCTAVES {
            return Err(GenerationError::invalid(
                "octaves",
                format!("must be at most {}, got {}", Self::MAX_OCTAVES, self.octaves),
            ));
        }
        for (name, value) in [("lacunarity", self.lacunarity), ("persistence", self.persistence)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GenerationError::invalid(
                    name,
                    format!("must be finite and positive, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

impl Default for FractalSettings {
    /// A single octave, which is plain [`NoiseField::sample`]
    fn default() -> Self {
        Self {
            octaves: 1,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

/// Coherent 2D Perlin noise in `[0, 1]`.
///
/// The permutation table is fixed. Seeds shift the sample point along both
/// axes instead, so every seed sees a different window onto the same
/// smooth field. Sampling is defined for every input: coordinates wrap onto
/// the lattice period, and non-finite ones read the field's midpoint `0.5`.
#[derive(Debug, Clone)]
pub struct NoiseField {
    perlin: Perlin,
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseField {
    pub const PERMUTATION_SEED: u32 = 0;

    pub fn new() -> Self {
        Self {
            perlin: Perlin::new(Self::PERMUTATION_SEED),
        }
    }

    pub fn sample(&self, x: f64, y: f64, seed: u8) -> f32 {
        let offset = f64::from(seed);
        to_unit(self.raw(x + offset, y + offset))
    }

    /// Fractional Brownian Motion over the same field.
    /// Octave `i` samples at `lacunarity^i` times the frequency with
    /// `persistence^i` of the amplitude; the sum is renormalized to `[0, 1]`.
    pub fn sample_fractal(&self, x: f64, y: f64, seed: u8, settings: &FractalSettings) -> f32 {
        if settings.octaves <= 1 {
            return self.sample(x, y, seed);
        }

        let offset = f64::from(seed);
        let mut value = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for _ in 0..settings.octaves {
            value += self.raw(x * frequency + offset, y * frequency + offset) * amplitude;
            max_value += amplitude;

            amplitude *= settings.persistence;
            frequency *= settings.lacunarity;
        }

        if max_value > 0.0 {
            to_unit(value / max_value)
        } else {
            0.5
        }
    }

    /// Perlin value in `[-1, 1]`; zero off the finite plane
    fn raw(&self, x: f64, y: f64) -> f64 {
        if !x.is_finite() || !y.is_finite() {
            return 0.0;
        }
        self.perlin
            .get([x.rem_euclid(LATTICE_PERIOD), y.rem_euclid(LATTICE_PERIOD)])
    }
}

fn to_unit(raw: f64) -> f32 {
    if raw.is_nan() {
        return 0.5;
    }
    ((raw + 1.0) * 0.5).clamp(0.0, 1.0) as f32
}
