//! Rendering side of the chunk subsystem.
//!
//! This module contains everything between a chunk's block grid and the GPU: the vertex
//! format, meshing, the ready queue that carries finished meshes to the frame loop and the
//! [`RenderBackend`] seam the frame loop uploads through. The backend itself is not part of
//! this crate; [`RecordingBackend`] stands in for it headlessly.

pub mod backend;
pub mod meshing;
pub mod ready_queue;
mod vertex;

// Re-export commonly used types
pub use backend::{RecordingBackend, RenderBackend};
pub use meshing::ChunkMesher;
pub use ready_queue::ReadyQueue;
pub use vertex::Vertex;
