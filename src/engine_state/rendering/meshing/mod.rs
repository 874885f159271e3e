//! Mesh generation and hand-off for voxel rendering.
//!
//! This module turns chunks into renderable meshes and passes them to the upload step.
//!
//! # Architecture
//! - `ChunkMesher`: rebuilds a chunk's mesh in place and queues the chunk for upload
//! - `mesh_slot`: the per-chunk lock around the live vertex and index buffers
//! - `mesh/`: face culling, shading and ambient occlusion
//!
//! # Hand-off
//! A rebuild holds the chunk's mesh lock for the whole build and releases it before the
//! chunk is pushed onto the [`ReadyQueue`]. The consumer later copies the buffers out under
//! the same lock. Because the mesher only needs `&Chunk` and a queue handle, it can run on
//! any thread.

use std::sync::Arc;

use log::trace;
use web_time::{Duration, Instant};

use super::ReadyQueue;
use crate::engine_state::voxels::chunk::Chunk;

pub mod mesh;
pub mod mesh_slot;

pub use mesh::{build_mesh, build_mesh_into, MeshBuffers};

/// Rebuilds chunk meshes and publishes them on the ready queue.
///
/// Cloning is cheap; clones publish to the same queue.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use voxel_world::engine_state::{
///     config::WorldConfig,
///     rendering::{meshing::ChunkMesher, ReadyQueue},
///     voxels::chunk::{Chunk, ChunkCoordinate},
/// };
///
/// let config = Arc::new(WorldConfig { world_height: 16, ..WorldConfig::default() });
/// let flat = |_x: f64, _z: f64| -0.5;
/// let chunk = Arc::new(Chunk::generate_detached(ChunkCoordinate::new(0, 0), config, &flat));
///
/// let queue = ReadyQueue::new();
/// let mesher = ChunkMesher::new(queue.clone());
/// mesher.rebuild(&chunk);
///
/// assert_eq!(queue.len(), 1);
/// assert!(chunk.mesh().read(|mesh| mesh.face_count() > 0));
/// ```
#[derive(Clone)]
pub struct ChunkMesher {
    ready_queue: ReadyQueue,
}

impl ChunkMesher {
    /// Creates a mesher publishing to `ready_queue`.
    pub fn new(ready_queue: ReadyQueue) -> Self {
        Self { ready_queue }
    }

    /// Rebuilds the mesh of `chunk` and queues the chunk for upload exactly once.
    ///
    /// # Returns
    /// Time spent building, lock wait excluded.
    pub fn rebuild(&self, chunk: &Arc<Chunk>) -> Duration {
        let mut elapsed = Duration::ZERO;
        chunk.mesh().rebuild(|buffers| {
            let start = Instant::now();
            build_mesh_into(chunk, buffers);
            elapsed = start.elapsed();
            trace!(
                "Meshed chunk {}: {} vertices, {} indices in {:?}",
                chunk.coordinate(),
                buffers.vertices.len(),
                buffers.indices.len(),
                elapsed
            );
        });

        self.ready_queue.push(chunk.clone());
        elapsed
    }

    /// The queue this mesher publishes to.
    pub fn ready_queue(&self) -> &ReadyQueue {
        &self.ready_queue
    }
}
