//! # World Configuration
//!
//! Sizing, streaming and terrain constants for a chunk world. A configuration is fixed for
//! the lifetime of the [`ChunkManager`](crate::engine_state::chunk_manager::ChunkManager)
//! built from it; nothing in the crate mutates it afterwards.
//!
//! Every field has a default, so a JSON file only needs to name what it overrides:
//!
//! ```
//! use voxel_world::engine_state::config::WorldConfig;
//!
//! let config = WorldConfig::from_json_str(r#"{ "render_distance": 2 }"#).unwrap();
//! assert_eq!(config.render_distance, 2);
//! assert_eq!(config.chunk_size_x, 16);
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default horizontal chunk size along X, in blocks.
pub const DEFAULT_CHUNK_SIZE_X: usize = 16;
/// Default horizontal chunk size along Z, in blocks.
pub const DEFAULT_CHUNK_SIZE_Z: usize = 16;
/// Default number of vertical block layers.
pub const DEFAULT_WORLD_HEIGHT: usize = 128;
/// Default Chebyshev radius, in chunks, kept loaded around the observer.
pub const DEFAULT_RENDER_DISTANCE: i32 = 8;

/// Errors raised while loading a [`WorldConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The contents are not a valid configuration document
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Terrain shaping parameters.
///
/// A column's surface height is `noise * amplitude + offset + baseline`. Cells strictly
/// below that height are solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Multiplier applied to the noise sample
    pub amplitude: f64,
    /// Fixed height added to every column
    pub offset: f64,
    /// Extra base height added to every column
    pub baseline: f64,
    /// Sampling frequency of the built-in Perlin source.
    pub frequency: f64,
    /// Seed of the built-in Perlin source.
    pub seed: u32,
    /// Number of dirt cells under the grass surface cell.
    pub dirt_depth: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            amplitude: 10.0,
            offset: 10.0,
            baseline: 0.0,
            frequency: 0.01,
            seed: 1337,
            dirt_depth: 3,
        }
    }
}

impl TerrainConfig {
    /// Maps a noise sample to a surface height.
    pub fn surface_height(&self, noise: f64) -> f64 {
        noise * self.amplitude + self.offset + self.baseline
    }
}

/// Chunk sizing and streaming configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Chunk width along X, in blocks
    pub chunk_size_x: usize,
    /// Chunk depth along Z, in blocks
    pub chunk_size_z: usize,
    /// Number of vertical layers; the world spans `0..world_height`
    pub world_height: usize,
    /// Chebyshev radius, in chunks, kept loaded around the observer
    pub render_distance: i32,
    /// Terrain shape
    pub terrain: TerrainConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            chunk_size_x: DEFAULT_CHUNK_SIZE_X,
            chunk_size_z: DEFAULT_CHUNK_SIZE_Z,
            world_height: DEFAULT_WORLD_HEIGHT,
            render_distance: DEFAULT_RENDER_DISTANCE,
            terrain: TerrainConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks that every dimension is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size_x == 0 || self.chunk_size_z == 0 {
            return Err(ConfigError::Invalid(format!(
                "chunk size must be positive, got {}x{}",
                self.chunk_size_x, self.chunk_size_z
            )));
        }
        if self.world_height == 0 {
            return Err(ConfigError::Invalid("world height must be positive".into()));
        }
        // Block coordinates are i32, so every dimension must fit one.
        let limit = i32::MAX as usize;
        if self.chunk_size_x > limit || self.chunk_size_z > limit || self.world_height > limit {
            return Err(ConfigError::Invalid(format!(
                "dimensions must not exceed {}, got {}x{}x{}",
                limit, self.chunk_size_x, self.world_height, self.chunk_size_z
            )));
        }
        let volume = self
            .chunk_size_x
            .checked_mul(self.world_height)
            .and_then(|area| area.checked_mul(self.chunk_size_z));
        if volume.is_none() {
            return Err(ConfigError::Invalid(format!(
                "chunk volume overflows, got {}x{}x{}",
                self.chunk_size_x, self.world_height, self.chunk_size_z
            )));
        }
        if self.render_distance < 0 {
            return Err(ConfigError::Invalid(format!(
                "render distance must not be negative, got {}",
                self.render_distance
            )));
        }
        Ok(())
    }

    /// Number of cells in one chunk.
    pub fn chunk_volume(&self) -> usize {
        self.chunk_size_x * self.world_height * self.chunk_size_z
    }

    /// Whether a world-space Y lies inside the fixed vertical range.
    pub fn contains_height(&self, y: i32) -> bool {
        y >= 0 && (y as i64) < self.world_height as i64
    }
}
