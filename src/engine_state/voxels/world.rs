//! # World Module
//!
//! This module provides the `World` struct, the map of every loaded chunk.
//!
//! ## Architecture
//!
//! The world is sparse: only chunks inside the observer's render distance are present.
//! Chunks are stored behind `Arc` so the mesher and the ready queue can hold on to a chunk
//! without holding the world's lock. The world itself is shared as an
//! [`MtResource`](crate::core::MtResource) and every chunk keeps a non-owning handle back
//! to it.
//!
//! ## Transparency Queries
//!
//! [`World::is_transparent_at`] answers for any integer world position:
//! - outside the fixed vertical range: transparent
//! - inside a loaded chunk: transparent if the cell is air
//! - inside a chunk that is not loaded: solid

use std::{collections::HashMap, sync::Arc};

use crate::engine_state::{
    config::WorldConfig,
    voxels::chunk::{Chunk, ChunkCoordinate},
};

/// The set of loaded chunks, keyed by chunk coordinate.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use voxel_world::engine_state::{
///     config::WorldConfig,
///     voxels::{chunk::{Chunk, ChunkCoordinate}, world::World},
/// };
///
/// let config = Arc::new(WorldConfig::default());
/// let mut world = World::new(config.clone());
///
/// let flat = |_x: f64, _z: f64| 0.0;
/// let chunk = Chunk::generate_detached(ChunkCoordinate::new(0, 0), config, &flat);
/// assert!(world.insert_chunk(chunk).is_some());
///
/// assert!(!world.is_transparent_at(0, 0, 0));
/// assert!(world.is_transparent_at(0, 10, 0));
/// // Unloaded chunks read as solid.
/// assert!(!world.is_transparent_at(-1, 10, 0));
/// ```
pub struct World {
    config: Arc<WorldConfig>,
    chunks: HashMap<ChunkCoordinate, Arc<Chunk>>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new(config: Arc<WorldConfig>) -> Self {
        World {
            config,
            chunks: HashMap::new(),
        }
    }

    /// Dimensions shared with every chunk.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Adds a chunk if its coordinate is not taken yet.
    ///
    /// # Returns
    /// The shared handle of the inserted chunk, or `None` if a chunk was already loaded
    /// there. The existing chunk is left untouched.
    pub fn insert_chunk(&mut self, chunk: Chunk) -> Option<Arc<Chunk>> {
        let coordinate = chunk.coordinate();
        if self.chunks.contains_key(&coordinate) {
            return None;
        }

        let chunk = Arc::new(chunk);
        self.chunks.insert(coordinate, chunk.clone());
        Some(chunk)
    }

    /// Whether a chunk is loaded at `coordinate`.
    pub fn contains(&self, coordinate: ChunkCoordinate) -> bool {
        self.chunks.contains_key(&coordinate)
    }

    /// Retrieves the chunk at the given chunk coordinates.
    pub fn get_chunk_at(&self, coordinate: ChunkCoordinate) -> Option<Arc<Chunk>> {
        self.chunks.get(&coordinate).cloned()
    }

    /// Removes and returns the chunk at the given chunk coordinates.
    pub fn remove_chunk_at(&mut self, coordinate: ChunkCoordinate) -> Option<Arc<Chunk>> {
        self.chunks.remove(&coordinate)
    }

    /// Iterates over the coordinates of every loaded chunk, in no particular order.
    pub fn coordinates(&self) -> impl Iterator<Item = ChunkCoordinate> + '_ {
        self.chunks.keys().copied()
    }

    /// Iterates over every loaded chunk, in no particular order.
    pub fn chunks(&self) -> impl Iterator<Item = &Arc<Chunk>> {
        self.chunks.values()
    }

    /// Number of loaded chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether no chunk is loaded.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Whether the cell at world block coordinates is transparent.
    ///
    /// Negative coordinates are wrapped into their chunk with Euclidean remainder, so
    /// world `x = -1` is local `x = size - 1` of chunk `-1`.
    pub fn is_transparent_at(&self, x: i32, y: i32, z: i32) -> bool {
        if !self.config.contains_height(y) {
            return true;
        }

        let coordinate = ChunkCoordinate::from_block(x, z, &self.config);
        let local_x = x.rem_euclid(self.config.chunk_size_x as i32);
        let local_z = z.rem_euclid(self.config.chunk_size_z as i32);

        match self.chunks.get(&coordinate) {
            Some(chunk) => chunk
                .block_at(local_x as usize, y as usize, local_z as usize)
                .is_transparent(),
            None => false,
        }
    }
}
