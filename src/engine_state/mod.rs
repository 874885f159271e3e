//! # Engine State Module
//!
//! The chunk subsystem of the voxel world.
//!
//! ## Key Components
//!
//! * `ChunkManager` - Streams chunks around the observer and drives meshing and upload
//! * `config` - World dimensions, render distance and terrain parameters
//! * `stats` - Timing and throughput counters
//! * `rendering` - Vertex format, meshing, ready queue and the render backend seam
//! * `voxels` - Blocks, chunks, terrain generation and the loaded-chunk map
//!
//! ## Architecture
//!
//! `ChunkManager` is the only component with a per-frame entry point. It owns the world
//! map, the noise source and the ready queue, and passes them down explicitly; there is no
//! global state. Everything the rendering side needs arrives through
//! [`RenderBackend`](rendering::RenderBackend) calls made outside any lock.

pub mod chunk_manager;
pub mod config;
pub mod rendering;
pub mod stats;
pub mod voxels;
