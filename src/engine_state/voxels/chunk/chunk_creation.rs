//! # Chunk Creation Module
//!
//! Terrain generation for chunks.
//!
//! Each column is sampled once from a [`NoiseSource`] and turned into a surface height by
//! [`TerrainConfig::surface_height`](crate::engine_state::config::TerrainConfig::surface_height).
//! Cells strictly below the height are solid: the top solid cell is grass, the next
//! `dirt_depth` cells are dirt and the rest is stone. Everything at or above the height is air.

use std::sync::Arc;

use super::{Chunk, ChunkCoordinate};
use crate::{
    core::WeakResource,
    engine_state::{
        config::WorldConfig,
        voxels::{block::block_type::BlockType, noise_source::NoiseSource, world::World},
    },
};

impl Chunk {
    /// Creates a chunk and fills it with terrain.
    ///
    /// # Arguments
    /// * `coordinate` - Position of the chunk in the chunk grid
    /// * `config` - Shared world dimensions and terrain parameters
    /// * `world` - Handle to the world that will own the chunk
    /// * `noise` - Height field sampled once per column
    pub fn generated(
        coordinate: ChunkCoordinate,
        config: Arc<WorldConfig>,
        world: WeakResource<World>,
        noise: &dyn NoiseSource,
    ) -> Self {
        let mut chunk = Self::new(coordinate, config, world);
        chunk.generate(noise);
        chunk
    }

    /// Creates a terrain chunk that belongs to no world.
    ///
    /// Cross-chunk queries on it resolve to solid.
    pub fn generate_detached(
        coordinate: ChunkCoordinate,
        config: Arc<WorldConfig>,
        noise: &dyn NoiseSource,
    ) -> Self {
        Self::generated(coordinate, config, WeakResource::detached(), noise)
    }

    /// Overwrites every cell with terrain from `noise`.
    ///
    /// Deterministic: the same coordinate and noise source always produce the same grid.
    pub fn generate(&mut self, noise: &dyn NoiseSource) {
        let (origin_x, origin_z) = self.coordinate.block_origin(&self.config);
        let config = self.config.clone();
        let terrain = &config.terrain;

        for z in 0..self.size_z() {
            for x in 0..self.size_x() {
                let world_x = origin_x + x as i32;
                let world_z = origin_z + z as i32;
                let height = terrain.surface_height(noise.sample(world_x as f64, world_z as f64));
                let top = height.ceil() as i64 - 1;

                for y in 0..self.height() {
                    let block = if (y as f64) < height {
                        Self::layer_for_depth(top - y as i64, terrain.dirt_depth)
                    } else {
                        BlockType::AIR
                    };
                    let index = self.index(x, y, z);
                    self.blocks[index] = block;
                }
            }
        }
    }

    fn layer_for_depth(depth: i64, dirt_depth: usize) -> BlockType {
        match depth {
            d if d <= 0 => BlockType::GRASS,
            d if d <= dirt_depth as i64 => BlockType::DIRT,
            _ => BlockType::STONE,
        }
    }
}
