//! # Chunk Manager
//!
//! Streams chunks in and out around a moving observer and feeds finished meshes to the
//! render backend.
//!
//! ## Update Phases
//!
//! Every call to [`ChunkManager::update`] runs four phases in order:
//!
//! 1. **Load**: every coordinate within the render distance that is not loaded yet gets a
//!    freshly generated chunk.
//! 2. **Mesh**: once the whole batch is in the map, each new chunk and each of its loaded
//!    eight neighbors is rebuilt once.
//! 3. **Unload**: chunks farther than the render distance along either axis leave the map
//!    and their backend mesh is released.
//! 4. **Drain**: every chunk on the ready queue that is still loaded has its mesh copied
//!    under its lock and uploaded after the lock is released.
//!
//! ## Locking
//!
//! The world lock is never held while a chunk's mesh lock is taken. Phases collect the
//! chunk handles they need, drop the world lock and only then mesh, release or upload.

use std::{collections::HashSet, sync::Arc};

use cgmath::Point3;
use log::{debug, info};
use web_time::Instant;

use super::{
    config::{ConfigError, WorldConfig},
    rendering::{
        meshing::{mesh_slot::PendingUpload, ChunkMesher},
        ReadyQueue, RenderBackend,
    },
    stats::ChunkStats,
    voxels::{
        chunk::{Chunk, ChunkCoordinate},
        noise_source::{NoiseSource, PerlinNoise},
        world::World,
    },
};
use crate::core::MtResource;

/// What a single [`ChunkManager::update`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// The chunk containing the observer
    pub observer_chunk: ChunkCoordinate,
    /// Newly loaded coordinates, sorted
    pub loaded: Vec<ChunkCoordinate>,
    /// Unloaded coordinates, sorted
    pub unloaded: Vec<ChunkCoordinate>,
    /// Mesh rebuilds performed in the mesh phase
    pub meshes_built: usize,
    /// Meshes handed to the backend in the drain phase
    pub meshes_uploaded: usize,
}

/// Owns the loaded chunks and drives streaming, meshing and upload.
///
/// # Examples
///
/// ```
/// use cgmath::Point3;
/// use voxel_world::engine_state::{
///     chunk_manager::ChunkManager,
///     config::WorldConfig,
///     rendering::RecordingBackend,
/// };
///
/// let config = WorldConfig { render_distance: 1, world_height: 32, ..WorldConfig::default() };
/// let mut manager = ChunkManager::with_perlin(config).unwrap();
/// let mut backend = RecordingBackend::new();
///
/// let report = manager.update(Point3::new(0.0, 20.0, 0.0), &mut backend);
/// assert_eq!(report.loaded.len(), 9);
/// assert_eq!(manager.loaded_count(), 9);
/// ```
pub struct ChunkManager {
    config: Arc<WorldConfig>,
    noise: Arc<dyn NoiseSource>,
    world: MtResource<World>,
    mesher: ChunkMesher,
    ready_queue: ReadyQueue,
    stats: ChunkStats,
}

impl ChunkManager {
    /// Creates a manager with no chunks loaded.
    ///
    /// # Arguments
    /// * `config` - World dimensions, render distance and terrain shape
    /// * `noise` - Height field every chunk is generated from
    ///
    /// # Returns
    /// An error if the configuration does not validate.
    pub fn new(config: WorldConfig, noise: Arc<dyn NoiseSource>) -> Result<Self, ConfigError> {
        config.validate()?;

        info!(
            "Chunk manager: {}x{}x{} chunks, render distance {}",
            config.chunk_size_x, config.world_height, config.chunk_size_z, config.render_distance
        );

        let config = Arc::new(config);
        let ready_queue = ReadyQueue::new();
        Ok(Self {
            world: MtResource::new(World::new(config.clone())),
            mesher: ChunkMesher::new(ready_queue.clone()),
            ready_queue,
            config,
            noise,
            stats: ChunkStats::default(),
        })
    }

    /// Creates a manager using the seeded Perlin source described by `config.terrain`.
    pub fn with_perlin(config: WorldConfig) -> Result<Self, ConfigError> {
        let noise = Arc::new(PerlinNoise::from_config(&config.terrain));
        Self::new(config, noise)
    }

    /// The validated configuration shared by every chunk.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Counters and timings since creation.
    pub fn stats(&self) -> &ChunkStats {
        &self.stats
    }

    /// The mesher feeding this manager's ready queue. Clone it to mesh on another thread.
    pub fn mesher(&self) -> &ChunkMesher {
        &self.mesher
    }

    /// The queue meshes wait on until the next drain.
    pub fn ready_queue(&self) -> &ReadyQueue {
        &self.ready_queue
    }

    /// Shared handle to the loaded-chunk map.
    pub fn world(&self) -> &MtResource<World> {
        &self.world
    }

    /// The loaded chunk at `coordinate`, if any.
    pub fn get_chunk(&self, coordinate: ChunkCoordinate) -> Option<Arc<Chunk>> {
        self.world.get().get_chunk_at(coordinate)
    }

    /// Whether a chunk is loaded at `coordinate`.
    pub fn is_loaded(&self, coordinate: ChunkCoordinate) -> bool {
        self.world.get().contains(coordinate)
    }

    /// Number of loaded chunks.
    pub fn loaded_count(&self) -> usize {
        self.world.get().len()
    }

    /// Coordinates of every loaded chunk, sorted.
    pub fn loaded_coordinates(&self) -> Vec<ChunkCoordinate> {
        let mut coordinates: Vec<_> = self.world.get().coordinates().collect();
        coordinates.sort();
        coordinates
    }

    /// Whether the cell at world block coordinates is transparent.
    ///
    /// Air above and below the world, solid in chunks that are not loaded.
    pub fn resolve_world_transparency(&self, x: i32, y: i32, z: i32) -> bool {
        self.world.get().is_transparent_at(x, y, z)
    }

    /// Runs one streaming tick for an observer at `observer` (world space).
    pub fn update<B>(&mut self, observer: Point3<f32>, backend: &mut B) -> UpdateReport
    where
        B: RenderBackend + ?Sized,
    {
        let start = Instant::now();
        let center = ChunkCoordinate::from_world_position(observer, &self.config);

        let loaded = self.load_chunks_around(center);
        let meshes_built = self.mesh_new_chunks(&loaded);
        let unloaded = self.unload_chunks_outside(center, backend);
        let meshes_uploaded = self.upload_ready_meshes(backend);

        self.stats.loaded_chunks = self.loaded_count();
        self.stats.last_update_time = start.elapsed();

        if !loaded.is_empty() || !unloaded.is_empty() {
            debug!(
                "Observer chunk {}: loaded {}, unloaded {}, meshed {}, uploaded {} in {:?}",
                center,
                loaded.len(),
                unloaded.len(),
                meshes_built,
                meshes_uploaded,
                self.stats.last_update_time
            );
        }

        UpdateReport {
            observer_chunk: center,
            loaded,
            unloaded,
            meshes_built,
            meshes_uploaded,
        }
    }

    /// Load phase. Generates every missing chunk in range and inserts it.
    fn load_chunks_around(&mut self, center: ChunkCoordinate) -> Vec<ChunkCoordinate> {
        let missing: Vec<ChunkCoordinate> = {
            let world = self.world.get();
            center
                .square(self.config.render_distance)
                .filter(|coordinate| !world.contains(*coordinate))
                .collect()
        };
        if missing.is_empty() {
            return missing;
        }

        let phase_start = Instant::now();
        let mut generated = Vec::with_capacity(missing.len());
        for coordinate in missing {
            let start = Instant::now();
            let chunk = Chunk::generated(
                coordinate,
                self.config.clone(),
                self.world.downgrade(),
                self.noise.as_ref(),
            );
            self.stats.record_generation(start.elapsed());
            generated.push(chunk);
        }

        let mut loaded = Vec::with_capacity(generated.len());
        {
            let mut world = self.world.get_mut();
            for chunk in generated {
                let coordinate = chunk.coordinate();
                if world.insert_chunk(chunk).is_some() {
                    loaded.push(coordinate);
                }
            }
        }

        loaded.sort();
        debug!(
            "Generated {} chunks in {:?}",
            loaded.len(),
            phase_start.elapsed()
        );
        loaded
    }

    /// Mesh phase. Rebuilds each new chunk and its loaded neighbors once.
    fn mesh_new_chunks(&mut self, loaded: &[ChunkCoordinate]) -> usize {
        if loaded.is_empty() {
            return 0;
        }

        let mut seen = HashSet::new();
        let affected: Vec<ChunkCoordinate> = loaded
            .iter()
            .flat_map(|coordinate| std::iter::once(*coordinate).chain(coordinate.neighbors()))
            .filter(|coordinate| seen.insert(*coordinate))
            .collect();

        let chunks: Vec<Arc<Chunk>> = {
            let world = self.world.get();
            affected
                .iter()
                .filter_map(|coordinate| world.get_chunk_at(*coordinate))
                .collect()
        };

        let phase_start = Instant::now();
        for chunk in &chunks {
            let elapsed = self.mesher.rebuild(chunk);
            self.stats.record_mesh(elapsed);
        }
        debug!(
            "Meshed {} chunks in {:?}",
            chunks.len(),
            phase_start.elapsed()
        );
        chunks.len()
    }

    /// Unload phase. Removes out-of-range chunks and releases their backend meshes.
    fn unload_chunks_outside<B>(
        &mut self,
        center: ChunkCoordinate,
        backend: &mut B,
    ) -> Vec<ChunkCoordinate>
    where
        B: RenderBackend + ?Sized,
    {
        let distance = self.config.render_distance;
        let removed: Vec<Arc<Chunk>> = {
            let mut world = self.world.get_mut();
            let stale: Vec<ChunkCoordinate> = world
                .coordinates()
                .filter(|coordinate| !coordinate.is_within(&center, distance))
                .collect();
            stale
                .into_iter()
                .filter_map(|coordinate| world.remove_chunk_at(coordinate))
                .collect()
        };

        let mut unloaded = Vec::with_capacity(removed.len());
        for chunk in removed {
            // Waits for any in-flight build on this chunk.
            if chunk.mesh().release() {
                backend.release(chunk.coordinate());
                self.stats.record_release();
            }
            self.stats.record_unload();
            unloaded.push(chunk.coordinate());
        }
        unloaded.sort();
        unloaded
    }

    /// Drain phase. Uploads every queued mesh whose chunk is still loaded.
    ///
    /// Public so a frame loop that meshes on worker threads can drain between updates.
    ///
    /// # Returns
    /// Number of meshes uploaded.
    pub fn upload_ready_meshes<B>(&mut self, backend: &mut B) -> usize
    where
        B: RenderBackend + ?Sized,
    {
        let mut uploaded = 0;
        for chunk in self.ready_queue.drain() {
            let coordinate = chunk.coordinate();
            let still_loaded = self
                .get_chunk(coordinate)
                .is_some_and(|current| Arc::ptr_eq(&current, &chunk));
            if !still_loaded {
                debug!("Skipping upload for unloaded chunk {}", coordinate);
                continue;
            }

            match chunk.mesh().take_pending_upload() {
                Some(PendingUpload::Upload(buffers)) => {
                    backend.upload_mesh(coordinate, &buffers.vertices, &buffers.indices);
                    self.stats.record_upload();
                    uploaded += 1;
                }
                Some(PendingUpload::Release) => {
                    backend.release(coordinate);
                    self.stats.record_release();
                }
                None => {}
            }
        }
        uploaded
    }

    /// Draws every loaded chunk that has a mesh resident in the backend.
    ///
    /// # Returns
    /// Number of draw calls issued.
    pub fn render_chunks<B>(&self, backend: &mut B) -> usize
    where
        B: RenderBackend + ?Sized,
    {
        let chunks: Vec<Arc<Chunk>> = self.world.get().chunks().cloned().collect();

        let mut draws = 0;
        for chunk in chunks {
            if chunk.mesh().is_resident() {
                backend.draw(chunk.coordinate());
                draws += 1;
            }
        }
        draws
    }
}
