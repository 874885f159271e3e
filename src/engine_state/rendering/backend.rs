//! The seam between chunk streaming and whatever draws the chunks.

use std::collections::HashMap;

use super::{meshing::mesh::MeshBuffers, Vertex};
use crate::engine_state::voxels::chunk::ChunkCoordinate;

/// Uploads, draws and releases chunk meshes.
///
/// Every call is keyed by the chunk's coordinate. An upload replaces whatever was uploaded
/// before for the same handle. The chunk manager never calls [`upload_mesh`] with empty
/// buffers and never calls any method while holding a chunk's mesh lock.
///
/// [`upload_mesh`]: RenderBackend::upload_mesh
pub trait RenderBackend {
    /// Stores a copy of the mesh for `handle`, replacing any earlier one.
    fn upload_mesh(&mut self, handle: ChunkCoordinate, vertices: &[Vertex], indices: &[u32]);
    /// Draws the mesh stored for `handle`.
    fn draw(&mut self, handle: ChunkCoordinate);
    /// Frees the mesh stored for `handle`.
    fn release(&mut self, handle: ChunkCoordinate);
}

/// A headless backend that keeps a copy of every resident mesh and counts calls.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    resident: HashMap<ChunkCoordinate, MeshBuffers>,
    uploads: usize,
    empty_uploads: usize,
    draws: Vec<ChunkCoordinate>,
    releases: Vec<ChunkCoordinate>,
}

impl RecordingBackend {
    /// Creates a backend with nothing resident.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last mesh uploaded for a chunk, if it has not been released since.
    pub fn mesh_for(&self, handle: ChunkCoordinate) -> Option<&MeshBuffers> {
        self.resident.get(&handle)
    }

    /// Number of chunks with a mesh currently resident.
    pub fn resident_count(&self) -> usize {
        self.resident.len()
    }

    /// Number of upload calls so far.
    pub fn upload_count(&self) -> usize {
        self.uploads
    }

    /// Uploads that arrived with no vertices or no indices.
    pub fn empty_upload_count(&self) -> usize {
        self.empty_uploads
    }

    /// Every handle passed to `draw`, in call order.
    pub fn draws(&self) -> &[ChunkCoordinate] {
        &self.draws
    }

    /// Every handle passed to `release`, in call order.
    pub fn releases(&self) -> &[ChunkCoordinate] {
        &self.releases
    }

    /// Forgets the draw log, typically once per frame.
    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn upload_mesh(&mut self, handle: ChunkCoordinate, vertices: &[Vertex], indices: &[u32]) {
        self.uploads += 1;
        if vertices.is_empty() || indices.is_empty() {
            self.empty_uploads += 1;
        }
        self.resident.insert(
            handle,
            MeshBuffers {
                vertices: vertices.to_vec(),
                indices: indices.to_vec(),
            },
        );
    }

    fn draw(&mut self, handle: ChunkCoordinate) {
        self.draws.push(handle);
    }

    fn release(&mut self, handle: ChunkCoordinate) {
        self.resident.remove(&handle);
        self.releases.push(handle);
    }
}
