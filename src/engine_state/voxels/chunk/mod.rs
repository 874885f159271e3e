//! # Chunk Module
//!
//! This module provides the `Chunk` struct: one fixed-size column of the voxel world and
//! the unit of streaming and meshing.
//!
//! ## Storage
//!
//! Blocks live in a single contiguous arena of `chunk_size_x * world_height * chunk_size_z`
//! entries. The cell at local `(x, y, z)` sits at offset `x + y * size_x + z * size_x *
//! height`, so a vertical run of one column is strided and a row along X is contiguous.
//!
//! ## Neighbor Resolution
//!
//! A chunk keeps a non-owning [`WeakResource`] handle to the [`World`] that holds it. Queries
//! that leave the chunk horizontally are translated to world coordinates and answered by the
//! world; the chunk never keeps its neighbors alive.
//!
//! ## Lifecycle
//!
//! Block data is written once, by [`Chunk::generate`] or [`Chunk::from_blocks`], before the
//! chunk is shared. After that only the mesh slot changes.

use std::sync::Arc;

use cgmath::Point3;

use super::{block::block_type::BlockType, world::World};
use crate::{
    core::WeakResource,
    engine_state::{config::WorldConfig, rendering::meshing::mesh_slot::MeshSlot},
};

mod chunk_creation;
pub mod coordinate;

pub use coordinate::ChunkCoordinate;

/// A fixed-size column of blocks.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use voxel_world::engine_state::{
///     config::WorldConfig,
///     voxels::{block::block_type::BlockType, chunk::{Chunk, ChunkCoordinate}},
/// };
///
/// let config = Arc::new(WorldConfig::default());
/// let flat = |_x: f64, _z: f64| 0.0;
/// let chunk = Chunk::generate_detached(ChunkCoordinate::new(0, 0), config, &flat);
///
/// // Height is 0 * 10 + 10, so cells 0..10 are solid.
/// assert_eq!(chunk.block_at(3, 9, 3), BlockType::GRASS);
/// assert!(chunk.is_transparent(3, 10, 3));
/// ```
pub struct Chunk {
    coordinate: ChunkCoordinate,
    config: Arc<WorldConfig>,
    blocks: Vec<BlockType>,
    /// Back-reference to the owning world, used only for cross-chunk queries.
    world: WeakResource<World>,
    mesh: MeshSlot,
}

impl Chunk {
    /// Creates a chunk filled with air.
    ///
    /// # Arguments
    /// * `coordinate` - Position of the chunk in the chunk grid
    /// * `config` - Shared world dimensions
    /// * `world` - Handle to the world that will own the chunk
    pub fn new(
        coordinate: ChunkCoordinate,
        config: Arc<WorldConfig>,
        world: WeakResource<World>,
    ) -> Self {
        let volume = config.chunk_volume();
        Self {
            coordinate,
            config,
            blocks: vec![BlockType::AIR; volume],
            world,
            mesh: MeshSlot::new(),
        }
    }

    /// Creates a chunk from a pre-built block grid.
    ///
    /// # Returns
    /// `None` if `blocks` does not hold exactly one entry per cell.
    pub fn from_blocks(
        coordinate: ChunkCoordinate,
        config: Arc<WorldConfig>,
        world: WeakResource<World>,
        blocks: Vec<BlockType>,
    ) -> Option<Self> {
        if blocks.len() != config.chunk_volume() {
            return None;
        }
        Some(Self {
            coordinate,
            config,
            blocks,
            world,
            mesh: MeshSlot::new(),
        })
    }

    /// Creates a chunk whose cells are produced by `block` from local coordinates.
    pub fn from_fn<F>(
        coordinate: ChunkCoordinate,
        config: Arc<WorldConfig>,
        world: WeakResource<World>,
        mut block: F,
    ) -> Self
    where
        F: FnMut(usize, usize, usize) -> BlockType,
    {
        let mut chunk = Self::new(coordinate, config, world);
        for z in 0..chunk.size_z() {
            for y in 0..chunk.height() {
                for x in 0..chunk.size_x() {
                    let index = chunk.index(x, y, z);
                    chunk.blocks[index] = block(x, y, z);
                }
            }
        }
        chunk
    }

    /// Position of this chunk in the chunk grid.
    pub fn coordinate(&self) -> ChunkCoordinate {
        self.coordinate
    }

    /// Shared world dimensions and terrain parameters.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Width along X, in blocks.
    pub fn size_x(&self) -> usize {
        self.config.chunk_size_x
    }

    /// Depth along Z, in blocks.
    pub fn size_z(&self) -> usize {
        self.config.chunk_size_z
    }

    /// Number of vertical layers.
    pub fn height(&self) -> usize {
        self.config.world_height
    }

    /// The raw block arena, in storage order.
    pub fn blocks(&self) -> &[BlockType] {
        &self.blocks
    }

    /// The mesh storage of this chunk.
    pub fn mesh(&self) -> &MeshSlot {
        &self.mesh
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size_x() + z * self.size_x() * self.height()
    }

    /// Gets the block at local coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates lie outside the chunk.
    pub fn block_at(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.blocks[self.index(x, y, z)]
    }

    /// Converts local block coordinates to world block coordinates.
    pub fn to_world(&self, x: i32, y: i32, z: i32) -> Point3<i32> {
        let (origin_x, origin_z) = self.coordinate.block_origin(&self.config);
        Point3::new(origin_x + x, y, origin_z + z)
    }

    /// Whether the cell at local coordinates lets light and sight through.
    ///
    /// Coordinates may lie outside the chunk:
    /// - outside the vertical range the answer is always `true`, so the top and bottom of
    ///   the world render
    /// - outside horizontally the query goes to the owning world
    /// - with no world to ask, or no loaded chunk there, the answer is `false`
    pub fn is_transparent(&self, x: i32, y: i32, z: i32) -> bool {
        if !self.config.contains_height(y) {
            return true;
        }

        let inside_x = x >= 0 && (x as usize) < self.size_x();
        let inside_z = z >= 0 && (z as usize) < self.size_z();
        if inside_x && inside_z {
            return self
                .block_at(x as usize, y as usize, z as usize)
                .is_transparent();
        }

        let world_position = self.to_world(x, y, z);
        self.world
            .upgrade()
            .map(|world| {
                world
                    .get()
                    .is_transparent_at(world_position.x, world_position.y, world_position.z)
            })
            .unwrap_or(false)
    }

    /// Number of non-air cells.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| !b.is_transparent()).count()
    }
}
