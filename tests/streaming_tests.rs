//! Integration tests for chunk streaming
//! These tests drive the chunk manager with a moving observer and check which chunks are
//! loaded, unloaded, uploaded and released.

use std::{collections::HashSet, sync::Arc};

use cgmath::Point3;
use voxel_world::{
    engine_state::rendering::meshing::MeshBuffers, ChunkCoordinate, ChunkManager,
    RecordingBackend, WorldConfig,
};

fn flat_config(render_distance: i32) -> WorldConfig {
    WorldConfig {
        chunk_size_x: 8,
        chunk_size_z: 8,
        world_height: 24,
        render_distance,
        ..WorldConfig::default()
    }
}

fn flat_manager(render_distance: i32) -> ChunkManager {
    ChunkManager::new(flat_config(render_distance), Arc::new(|_x: f64, _z: f64| 0.0)).unwrap()
}

fn square(center_x: i32, center_z: i32, radius: i32) -> Vec<ChunkCoordinate> {
    let mut coordinates = Vec::new();
    for x in center_x - radius..=center_x + radius {
        for z in center_z - radius..=center_z + radius {
            coordinates.push(ChunkCoordinate::new(x, z));
        }
    }
    coordinates.sort();
    coordinates
}

#[test]
fn test_origin_loads_three_by_three() {
    let mut manager = flat_manager(1);
    let mut backend = RecordingBackend::new();

    let report = manager.update(Point3::new(0.0, 12.0, 0.0), &mut backend);

    assert_eq!(report.observer_chunk, ChunkCoordinate::new(0, 0));
    assert_eq!(report.loaded, square(0, 0, 1));
    assert!(report.unloaded.is_empty());
    assert_eq!(manager.loaded_coordinates(), square(0, 0, 1));
}

#[test]
fn test_moving_one_chunk_along_x_swaps_one_column() {
    let mut manager = flat_manager(1);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(0.0, 12.0, 0.0), &mut backend);

    let report = manager.update(Point3::new(8.0, 12.0, 0.0), &mut backend);

    assert_eq!(report.observer_chunk, ChunkCoordinate::new(1, 0));
    assert_eq!(
        report.loaded,
        vec![
            ChunkCoordinate::new(2, -1),
            ChunkCoordinate::new(2, 0),
            ChunkCoordinate::new(2, 1)
        ]
    );
    assert_eq!(
        report.unloaded,
        vec![
            ChunkCoordinate::new(-1, -1),
            ChunkCoordinate::new(-1, 0),
            ChunkCoordinate::new(-1, 1)
        ]
    );
    assert_eq!(manager.loaded_count(), 9);
}

#[test]
fn test_wider_radius_swaps_five_chunk_columns() {
    let mut manager = flat_manager(2);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(4.0, 12.0, 4.0), &mut backend);
    assert_eq!(manager.loaded_count(), 25);

    let report = manager.update(Point3::new(12.0, 12.0, 4.0), &mut backend);

    assert_eq!(report.loaded.len(), 5);
    assert_eq!(report.unloaded.len(), 5);
    assert!(report.loaded.iter().all(|c| c.x == 3));
    assert!(report.unloaded.iter().all(|c| c.x == -2));
    assert_eq!(manager.loaded_count(), 25);
}

#[test]
fn test_diagonal_move_swaps_an_l_shape() {
    let mut manager = flat_manager(1);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(0.0, 12.0, 0.0), &mut backend);

    let report = manager.update(Point3::new(8.0, 12.0, 8.0), &mut backend);

    assert_eq!(report.loaded.len(), 5);
    assert_eq!(report.unloaded.len(), 5);
    assert_eq!(manager.loaded_coordinates(), square(1, 1, 1));
}

#[test]
fn test_walk_keeps_loaded_count_constant() {
    let mut manager = flat_manager(1);
    let mut backend = RecordingBackend::new();

    for step in 0..12 {
        let x = step as f32 * 8.0;
        manager.update(Point3::new(x, 12.0, -3.0), &mut backend);
        assert_eq!(manager.loaded_count(), 9, "step {step}");
    }
}

#[test]
fn test_negative_positions_floor_into_the_right_chunk() {
    let mut manager = flat_manager(0);
    let mut backend = RecordingBackend::new();

    let report = manager.update(Point3::new(-0.01, 12.0, -8.0), &mut backend);

    assert_eq!(report.observer_chunk, ChunkCoordinate::new(-1, -1));
    assert_eq!(manager.loaded_coordinates(), vec![ChunkCoordinate::new(-1, -1)]);
}

#[test]
fn test_repeated_updates_never_double_load() {
    let mut manager = flat_manager(1);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(0.0, 12.0, 0.0), &mut backend);
    let before: Vec<_> = manager
        .loaded_coordinates()
        .into_iter()
        .filter_map(|c| manager.get_chunk(c))
        .collect();

    for _ in 0..3 {
        let report = manager.update(Point3::new(3.0, 12.0, 5.0), &mut backend);
        assert!(report.loaded.is_empty());
    }

    for chunk in before {
        let current = manager.get_chunk(chunk.coordinate()).unwrap();
        assert!(Arc::ptr_eq(&chunk, &current));
    }
    assert_eq!(manager.stats().chunks_generated, 9);
}

#[test]
fn test_backend_residency_follows_loaded_set() {
    let mut manager = flat_manager(1);
    let mut backend = RecordingBackend::new();

    for step in 0..5 {
        let position = Point3::new(step as f32 * 8.0, 12.0, step as f32 * -8.0);
        manager.update(position, &mut backend);

        let loaded: HashSet<_> = manager.loaded_coordinates().into_iter().collect();
        assert_eq!(backend.resident_count(), loaded.len());
        for coordinate in &loaded {
            assert!(backend.mesh_for(*coordinate).is_some(), "{coordinate} missing");
        }
    }
    assert_eq!(backend.empty_upload_count(), 0);
}

#[test]
fn test_unloading_releases_only_resident_meshes() {
    let mut manager = flat_manager(1);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(0.0, 12.0, 0.0), &mut backend);

    let report = manager.update(Point3::new(8.0, 12.0, 0.0), &mut backend);

    let mut released = backend.releases().to_vec();
    released.sort();
    assert_eq!(released, report.unloaded);
}

#[test]
fn test_empty_world_uploads_and_draws_nothing() {
    // Height is -5 * 10 + 10 = -40: every cell is air.
    let mut manager =
        ChunkManager::new(flat_config(1), Arc::new(|_x: f64, _z: f64| -5.0)).unwrap();
    let mut backend = RecordingBackend::new();

    let report = manager.update(Point3::new(0.0, 12.0, 0.0), &mut backend);
    manager.update(Point3::new(8.0, 12.0, 0.0), &mut backend);

    assert_eq!(report.meshes_built, 9);
    assert_eq!(report.meshes_uploaded, 0);
    assert_eq!(backend.upload_count(), 0);
    assert!(backend.releases().is_empty());
    assert_eq!(manager.render_chunks(&mut backend), 0);
}

#[test]
fn test_only_horizontal_position_matters() {
    let mut low = flat_manager(1);
    let mut high = flat_manager(1);
    let mut backend = RecordingBackend::new();

    let a = low.update(Point3::new(5.0, -1000.0, 5.0), &mut backend);
    let b = high.update(Point3::new(5.0, 1000.0, 5.0), &mut backend);

    assert_eq!(a.loaded, b.loaded);
}

#[test]
fn test_new_chunks_rebuild_their_loaded_neighbors() {
    // Flat terrain: every column is solid up to y = 9.
    let mut manager = flat_manager(1);
    let mut backend = RecordingBackend::new();
    manager.update(Point3::new(0.0, 12.0, 0.0), &mut backend);

    let edge = ChunkCoordinate::new(1, 0);
    let before = backend.mesh_for(edge).unwrap().clone();

    let report = manager.update(Point3::new(8.0, 12.0, 0.0), &mut backend);

    // Three new chunks in column x = 2 plus the three chunks of column x = 1 next to them.
    assert_eq!(report.meshes_built, 6);
    assert_eq!(report.meshes_uploaded, 6);

    let after = backend.mesh_for(edge).unwrap().clone();
    assert_ne!(before, after);
    assert_eq!(after, manager.get_chunk(edge).unwrap().mesh().snapshot());

    // Top-face vertices on the +X border of chunk (1, 0) sit at x = 15.5, y = 9.5.
    let border_ao = |mesh: &MeshBuffers| {
        mesh.vertices
            .iter()
            .filter(|v| (v.position[0] - 15.5).abs() < 1e-5 && (v.position[1] - 9.5).abs() < 1e-5)
            .map(|v| v.ao)
            .collect::<Vec<f32>>()
    };

    // While x = 2 was unloaded its cells read as solid and shaded the border.
    let shaded = border_ao(&before);
    assert!(!shaded.is_empty());
    assert!(shaded.iter().all(|ao| *ao < 1.0), "{shaded:?}");

    // The loaded neighbor is open air above y = 9.
    let open = border_ao(&after);
    assert_eq!(open.len(), shaded.len());
    assert!(open.iter().all(|ao| *ao == 1.0), "{open:?}");
}
