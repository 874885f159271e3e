//! # Noise Source
//!
//! Height-field functions used by terrain generation.
//!
//! Any `Fn(f64, f64) -> f64` closure is a [`NoiseSource`], which keeps fixed height fields
//! cheap to write:
//!
//! ```
//! use voxel_world::engine_state::voxels::noise_source::NoiseSource;
//!
//! let flat = |_x: f64, _z: f64| 0.0;
//! assert_eq!(flat.sample(12.0, -3.0), 0.0);
//! ```

use noise::{NoiseFn, Perlin};

use crate::engine_state::config::TerrainConfig;

/// A deterministic 2D height field.
///
/// Implementations must be pure: the same `(x, z)` always yields the same value. Samples
/// are expected to lie in `[-1, 1]`.
pub trait NoiseSource: Send + Sync {
    /// Height-field value at a world-space column.
    fn sample(&self, world_x: f64, world_z: f64) -> f64;
}

impl<F> NoiseSource for F
where
    F: Fn(f64, f64) -> f64 + Send + Sync,
{
    fn sample(&self, world_x: f64, world_z: f64) -> f64 {
        self(world_x, world_z)
    }
}

/// Seeded 2D Perlin noise scaled by a sampling frequency.
pub struct PerlinNoise {
    perlin: Perlin,
    frequency: f64,
}

impl PerlinNoise {
    /// Creates a Perlin source; inputs are multiplied by `frequency` before sampling.
    pub fn new(seed: u32, frequency: f64) -> Self {
        Self {
            perlin: Perlin::new(seed),
            frequency,
        }
    }

    /// Builds the source described by a terrain configuration.
    pub fn from_config(terrain: &TerrainConfig) -> Self {
        Self::new(terrain.seed, terrain.frequency)
    }
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, world_x: f64, world_z: f64) -> f64 {
        self.perlin
            .get([world_x * self.frequency, world_z * self.frequency])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perlin_is_deterministic_per_seed() {
        let a = PerlinNoise::new(7, 0.05);
        let b = PerlinNoise::new(7, 0.05);
        for i in 0..32 {
            let (x, z) = (i as f64 * 3.7, i as f64 * -1.3);
            assert_eq!(a.sample(x, z), b.sample(x, z));
        }
    }

    #[test]
    fn perlin_varies_across_the_plane() {
        let noise = PerlinNoise::from_config(&TerrainConfig::default());
        let mut rng = fastrand::Rng::with_seed(99);
        let samples: Vec<f64> = (0..200)
            .map(|_| {
                let x = rng.i32(-10_000..10_000) as f64 + 0.5;
                let z = rng.i32(-10_000..10_000) as f64 + 0.5;
                noise.sample(x, z)
            })
            .collect();
        assert!(samples.iter().all(|value| value.is_finite()));
        assert!(samples.iter().any(|value| *value != samples[0]));
    }

    #[test]
    fn closures_are_noise_sources() {
        let ramp = |x: f64, z: f64| (x + z) / 100.0;
        let source: &dyn NoiseSource = &ramp;
        assert_eq!(source.sample(20.0, 30.0), 0.5);
    }
}
