//! # Voxel Data
//!
//! This module contains the data side of the voxel world: what a block is, how chunks
//! store and generate blocks, and the map that holds every loaded chunk.
//!
//! ## Architecture
//!
//! * **Block**: block types, face geometry and the color palette
//! * **Chunk**: fixed-size block columns, their grid coordinates and terrain generation
//! * **Noise source**: the height field terrain is sampled from
//! * **World**: the loaded-chunk map and world-space transparency queries
//!
//! ## Thread Safety
//!
//! Block data is immutable once a chunk is shared, so any number of threads may read it.
//! The world map is guarded by the lock of the `MtResource` that holds it; each chunk's
//! mesh is guarded by its own lock.

pub mod block;
pub mod chunk;
pub mod noise_source;
pub mod world;
