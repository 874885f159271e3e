//! Vertex and index storage for one chunk mesh.

use crate::engine_state::rendering::Vertex;

/// Index pattern of one quad: two triangles sharing the `0-2` diagonal.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// A triangulated chunk surface.
///
/// Every face contributes four vertices and six indices, so the buffers always hold whole
/// quads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// The vertex data
    pub vertices: Vec<Vertex>,
    /// Triangle indices into `vertices`
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one quad.
    ///
    /// # Arguments
    /// * `corners` - The four vertices in winding order
    pub fn add_face(&mut self, corners: [Vertex; 4]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&corners);
        self.indices.extend(QUAD_INDICES.iter().map(|i| base + i));
    }

    /// Number of quads in the mesh.
    pub fn face_count(&self) -> usize {
        self.indices.len() / QUAD_INDICES.len()
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Empties both buffers, keeping their allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}
