#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! The chunk subsystem of a voxel game: terrain generation, neighbor-aware transparency
//! queries, face-culled meshing with ambient occlusion, and streaming of chunks around a
//! moving observer.
//!
//! ## Key Modules
//!
//! * `core` - Shared, lock-guarded resources and their non-owning handles
//! * `engine_state` - Chunk manager, configuration, voxel data and meshing
//!
//! ## Data Flow
//!
//! 1. [`ChunkManager::update`] receives the observer position once per tick
//! 2. Missing chunks in range are generated from the noise source
//! 3. New chunks and their neighbors are meshed; meshes go onto the ready queue
//! 4. Chunks out of range are unloaded and their GPU meshes released
//! 5. The ready queue is drained into the [`RenderBackend`]
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use voxel_world::{ChunkManager, RecordingBackend, WorldConfig};
//!
//! let config = WorldConfig { render_distance: 1, world_height: 32, ..WorldConfig::default() };
//! let mut manager = ChunkManager::with_perlin(config).unwrap();
//! let mut backend = RecordingBackend::new();
//!
//! for step in 0..4 {
//!     manager.update(Point3::new(step as f32 * 16.0, 20.0, 0.0), &mut backend);
//!     manager.render_chunks(&mut backend);
//! }
//! assert_eq!(manager.loaded_count(), 9);
//! ```

use log::info;

pub mod core;
pub mod engine_state;

pub use engine_state::{
    chunk_manager::{ChunkManager, UpdateReport},
    config::{ConfigError, WorldConfig},
    rendering::{RecordingBackend, RenderBackend, Vertex},
    voxels::{
        chunk::{Chunk, ChunkCoordinate},
        noise_source::{NoiseSource, PerlinNoise},
    },
};

/// Initializes the global logger from `RUST_LOG`, writing to stdout.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger() {
    let mut log_builder = env_logger::Builder::new();
    let initialized = log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .try_init()
        .is_ok();

    if initialized {
        info!("Logger initialized");
    }
}
