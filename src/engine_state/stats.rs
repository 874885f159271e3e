//! Timing and throughput counters for chunk streaming.

use web_time::Duration;

/// Counters kept by the chunk manager.
///
/// Durations hold the most recent measurement; counts are running totals since the
/// manager was created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkStats {
    /// Terrain generation time of the last generated chunk
    pub last_generation_time: Duration,
    /// Build time of the last meshed chunk
    pub last_mesh_time: Duration,
    /// Wall time of the last complete update
    pub last_update_time: Duration,
    /// Chunks loaded right now
    pub loaded_chunks: usize,
    /// Chunks generated in total
    pub chunks_generated: u64,
    /// Chunks removed from the map in total
    pub chunks_unloaded: u64,
    /// Mesh rebuilds in total
    pub meshes_built: u64,
    /// Meshes handed to the backend
    pub meshes_uploaded: u64,
    /// Backend meshes released, on unload or after an empty rebuild
    pub meshes_released: u64,
}

impl ChunkStats {
    /// Records one generated chunk and its generation time.
    pub fn record_generation(&mut self, elapsed: Duration) {
        self.last_generation_time = elapsed;
        self.chunks_generated += 1;
    }

    /// Records one mesh rebuild and its build time.
    pub fn record_mesh(&mut self, elapsed: Duration) {
        self.last_mesh_time = elapsed;
        self.meshes_built += 1;
    }

    /// Counts one upload.
    pub fn record_upload(&mut self) {
        self.meshes_uploaded += 1;
    }

    /// Counts one release.
    pub fn record_release(&mut self) {
        self.meshes_released += 1;
    }

    /// Counts one unloaded chunk.
    pub fn record_unload(&mut self) {
        self.chunks_unloaded += 1;
    }
}
