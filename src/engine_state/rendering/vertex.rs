//! Vertex format for voxel meshes.
//!
//! This module defines the vertex record handed to the render backend.

use cgmath::{Point3, Vector3};

/// A vertex in a chunk mesh.
///
/// Positions are in world space. The color already includes face brightness and ambient
/// occlusion; the raw occlusion scalar is kept alongside for shaders that want it.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Color: [f32; 3] (12 bytes)
/// - Ambient occlusion: f32 (4 bytes)
///
/// Total size: 28 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// World-space position
    pub position: [f32; 3],
    /// Shaded RGB color, each channel in `[0, 1]`
    pub color: [f32; 3],
    /// Ambient occlusion scalar
    pub ao: f32,
}

impl Vertex {
    /// Creates a new vertex.
    ///
    /// # Arguments
    /// * `position` - World-space position of the vertex
    /// * `color` - Final shaded color
    /// * `ao` - Ambient occlusion scalar used for the color
    pub fn new(position: Point3<f32>, color: Vector3<f32>, ao: f32) -> Self {
        Vertex {
            position: position.into(),
            color: color.into(),
            ao,
        }
    }

    /// The position as a point.
    pub fn position(&self) -> Point3<f32> {
        Point3::from(self.position)
    }
}
