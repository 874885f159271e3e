//! Mesh construction for voxel rendering.
//!
//! This module turns a chunk's block grid into a face-culled, ambient-occluded triangle
//! mesh.
//!
//! # Architecture
//! - [`MeshBuffers`]: vertex and index storage for one chunk
//! - [`Face`]: one visible quad of a block and its shading
//! - [`ambient_occlusion`]: the per-vertex occlusion rules
//!
//! # Algorithm
//! For every solid block, each of the six neighbors is checked through the chunk's
//! transparency oracle. A quad is emitted only toward a transparent neighbor. Faces are
//! emitted in [`BlockSide::all`] order.
//!
//! # Usage
//! ```
//! use std::sync::Arc;
//! use voxel_world::{
//!     core::WeakResource,
//!     engine_state::{
//!         config::WorldConfig,
//!         rendering::meshing::mesh::build_mesh,
//!         voxels::{block::block_type::BlockType, chunk::{Chunk, ChunkCoordinate}},
//!     },
//! };
//!
//! let config = Arc::new(WorldConfig { world_height: 8, ..WorldConfig::default() });
//! let chunk = Chunk::from_fn(ChunkCoordinate::new(0, 0), config, WeakResource::detached(), |x, y, z| {
//!     if (x, y, z) == (4, 4, 4) { BlockType::STONE } else { BlockType::AIR }
//! });
//!
//! let mesh = build_mesh(&chunk);
//! assert_eq!(mesh.face_count(), 6);
//! ```

use cgmath::Vector3;

use crate::engine_state::voxels::{block::block_side::BlockSide, chunk::Chunk};

pub mod ambient_occlusion;
mod face;
mod mesh;

pub use face::Face;
pub use mesh::*;

/// Builds the mesh of a chunk into fresh buffers.
pub fn build_mesh(chunk: &Chunk) -> MeshBuffers {
    let mut buffers = MeshBuffers::new();
    build_mesh_into(chunk, &mut buffers);
    buffers
}

/// Appends the mesh of a chunk to `buffers`.
pub fn build_mesh_into(chunk: &Chunk, buffers: &mut MeshBuffers) {
    for x in 0..chunk.size_x() {
        for y in 0..chunk.height() {
            for z in 0..chunk.size_z() {
                let block_type = chunk.block_at(x, y, z);
                if block_type.is_transparent() {
                    continue;
                }

                let block = Vector3::new(x as i32, y as i32, z as i32);
                for side in BlockSide::all() {
                    let neighbor = block + side.normal();
                    if chunk.is_transparent(neighbor.x, neighbor.y, neighbor.z) {
                        let face = Face::new(block.x, block.y, block.z, block_type, side);
                        buffers.add_face(face.vertices(chunk));
                    }
                }
            }
        }
    }
}
