//! # Voxel World Demo
//!
//! Headless walk through a generated world. Loads a JSON configuration if a path is given,
//! moves an observer along +X one chunk per tick and logs what streaming did.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- [config.json] [ticks]
//! ```

use std::{env, process::ExitCode};

use cgmath::Point3;
use log::{error, info};
use voxel_world::{init_logger, ChunkManager, RecordingBackend, WorldConfig};

const DEFAULT_TICKS: u32 = 16;

fn main() -> ExitCode {
    init_logger();

    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => match WorldConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(err) => {
                error!("Could not load {}: {}", path, err);
                return ExitCode::FAILURE;
            }
        },
        None => WorldConfig::default(),
    };
    let ticks = args
        .next()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_TICKS);

    let mut manager = match ChunkManager::with_perlin(config) {
        Ok(manager) => manager,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let mut backend = RecordingBackend::new();
    let step = manager.config().chunk_size_x as f32;
    let eye_height = manager.config().world_height as f32 / 2.0;

    for tick in 0..ticks {
        let observer = Point3::new(tick as f32 * step, eye_height, 0.0);
        let report = manager.update(observer, &mut backend);
        backend.clear_draws();
        let draws = manager.render_chunks(&mut backend);

        info!(
            "Tick {}: observer chunk {}, +{} / -{} chunks, {} uploads, {} draws",
            tick,
            report.observer_chunk,
            report.loaded.len(),
            report.unloaded.len(),
            report.meshes_uploaded,
            draws
        );
    }

    let stats = manager.stats();
    info!(
        "Generated {} chunks (last {:?}), built {} meshes (last {:?}), uploaded {}, released {}",
        stats.chunks_generated,
        stats.last_generation_time,
        stats.meshes_built,
        stats.last_mesh_time,
        stats.meshes_uploaded,
        stats.meshes_released
    );
    ExitCode::SUCCESS
}
