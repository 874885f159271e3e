//! Integration tests for the mesh handoff
//! These tests check that the backend always receives a complete copy of the last finished
//! build, including when chunks are meshed on another thread while the queue is drained.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
};

use cgmath::Point3;
use voxel_world::{ChunkCoordinate, ChunkManager, RecordingBackend, WorldConfig};

fn terrain_manager(render_distance: i32) -> ChunkManager {
    let config = WorldConfig {
        chunk_size_x: 8,
        chunk_size_z: 8,
        world_height: 32,
        render_distance,
        ..WorldConfig::default()
    };
    let hills = |x: f64, z: f64| ((x * 0.3).sin() + (z * 0.2).cos()) * 0.5;
    ChunkManager::new(config, Arc::new(hills)).unwrap()
}

fn assert_backend_matches_slots(manager: &ChunkManager, backend: &RecordingBackend) {
    for coordinate in manager.loaded_coordinates() {
        let chunk = manager.get_chunk(coordinate).unwrap();
        let snapshot = chunk.mesh().snapshot();
        assert!(!snapshot.is_empty());
        assert_eq!(backend.mesh_for(coordinate), Some(&snapshot), "chunk {coordinate}");
    }
}

#[test]
fn test_uploaded_meshes_match_the_last_build() {
    let mut manager = terrain_manager(1);
    let mut backend = RecordingBackend::new();

    for step in 0..4 {
        let position = Point3::new(step as f32 * 8.0, 16.0, step as f32 * 4.0);
        manager.update(position, &mut backend);
        assert_backend_matches_slots(&manager, &backend);
    }
}

#[test]
fn test_rebuild_on_a_worker_thread_is_uploaded_on_the_next_drain() {
    let mut manager = terrain_manager(1);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(0.0, 16.0, 0.0), &mut backend);
    let uploads_before = backend.upload_count();

    let chunk = manager.get_chunk(ChunkCoordinate::new(0, 0)).unwrap();
    let mesher = manager.mesher().clone();
    thread::spawn(move || {
        mesher.rebuild(&chunk);
    })
    .join()
    .unwrap();

    assert_eq!(manager.ready_queue().len(), 1);
    assert_eq!(manager.upload_ready_meshes(&mut backend), 1);
    assert_eq!(backend.upload_count(), uploads_before + 1);
    assert!(manager.ready_queue().is_empty());
    assert_backend_matches_slots(&manager, &backend);
}

#[test]
fn test_concurrent_builds_never_publish_a_torn_mesh() {
    let mut manager = terrain_manager(1);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(0.0, 16.0, 0.0), &mut backend);

    let chunks: Vec<_> = manager
        .loaded_coordinates()
        .into_iter()
        .filter_map(|coordinate| manager.get_chunk(coordinate))
        .collect();
    let mesher = manager.mesher().clone();
    let done = Arc::new(AtomicBool::new(false));

    let worker = {
        let done = done.clone();
        thread::spawn(move || {
            let mut rng = fastrand::Rng::with_seed(9);
            for _ in 0..200 {
                let chunk = &chunks[rng.usize(..chunks.len())];
                mesher.rebuild(chunk);
            }
            done.store(true, Ordering::Release);
        })
    };

    loop {
        let finished = done.load(Ordering::Acquire);
        manager.upload_ready_meshes(&mut backend);
        for coordinate in manager.loaded_coordinates() {
            let mesh = backend.mesh_for(coordinate).unwrap();
            let faces = mesh.face_count();
            assert_eq!(mesh.vertices.len(), faces * 4);
            assert_eq!(mesh.indices.len(), faces * 6);
        }
        if finished {
            break;
        }
        thread::yield_now();
    }
    worker.join().unwrap();

    manager.upload_ready_meshes(&mut backend);
    assert!(manager.ready_queue().is_empty());
    assert_backend_matches_slots(&manager, &backend);
}

#[test]
fn test_unloaded_chunks_are_never_uploaded() {
    let mut manager = terrain_manager(1);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(0.0, 16.0, 0.0), &mut backend);

    let stale = manager.get_chunk(ChunkCoordinate::new(-1, 0)).unwrap();
    manager.update(Point3::new(8.0, 16.0, 0.0), &mut backend);
    assert!(!manager.is_loaded(stale.coordinate()));
    let uploads_before = backend.upload_count();

    // A late build for a chunk that has already left the world.
    manager.mesher().rebuild(&stale);

    assert_eq!(manager.upload_ready_meshes(&mut backend), 0);
    assert_eq!(backend.upload_count(), uploads_before);
    assert!(backend.mesh_for(stale.coordinate()).is_none());
}

#[test]
fn test_duplicate_enqueues_upload_once() {
    let mut manager = terrain_manager(1);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(0.0, 16.0, 0.0), &mut backend);
    let uploads_before = backend.upload_count();

    let chunk = manager.get_chunk(ChunkCoordinate::new(1, 1)).unwrap();
    manager.mesher().rebuild(&chunk);
    manager.mesher().rebuild(&chunk);
    assert_eq!(manager.ready_queue().len(), 2);

    assert_eq!(manager.upload_ready_meshes(&mut backend), 1);
    assert_eq!(backend.upload_count(), uploads_before + 1);
}

#[test]
fn test_render_draws_each_resident_chunk_once() {
    let mut manager = terrain_manager(2);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(0.0, 16.0, 0.0), &mut backend);

    assert_eq!(manager.render_chunks(&mut backend), 25);

    let mut draws = backend.draws().to_vec();
    draws.sort();
    assert_eq!(draws, manager.loaded_coordinates());
}
