//! # Block Side Module
//!
//! This module defines the six faces of a voxel block together with the fixed geometry
//! the mesher needs for each of them: outward normal, corner positions in emission order
//! and base brightness.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// The order is: [FRONT, BACK, BOTTOM, TOP, LEFT, RIGHT]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The front face (facing positive Z)
    FRONT = 0,

    /// The back face (facing negative Z)
    BACK = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

/// Base brightness of the top face.
pub const TOP_BRIGHTNESS: f32 = 1.0;
/// Base brightness of the bottom face.
pub const BOTTOM_BRIGHTNESS: f32 = 0.6;
/// Base brightness of the four vertical faces.
pub const SIDE_BRIGHTNESS: f32 = 0.8;

/// Corner directions of each face, in vertex emission order.
///
/// Every component is `±1`: the component along the face normal equals the normal, the two
/// tangent components pick the corner. Half of a direction is the vertex offset from the
/// block center. Indexed by `BlockSide as usize`. Vertices `0,1,2` and `2,3,0` form the two
/// triangles of the quad.
const FACE_CORNERS: [[[i32; 3]; 4]; 6] = [
    // FRONT
    [[-1, 1, 1], [-1, -1, 1], [1, -1, 1], [1, 1, 1]],
    // BACK
    [[1, 1, -1], [1, -1, -1], [-1, -1, -1], [-1, 1, -1]],
    // BOTTOM
    [[1, -1, 1], [-1, -1, 1], [-1, -1, -1], [1, -1, -1]],
    // TOP
    [[-1, 1, 1], [1, 1, 1], [1, 1, -1], [-1, 1, -1]],
    // LEFT
    [[-1, 1, -1], [-1, -1, -1], [-1, -1, 1], [-1, 1, 1]],
    // RIGHT
    [[1, -1, 1], [1, -1, -1], [1, 1, -1], [1, 1, 1]],
];

impl BlockSide {
    /// Returns all six block faces in the order the mesher emits them.
    ///
    /// The order is: [LEFT, RIGHT, BACK, FRONT, TOP, BOTTOM]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::LEFT,
            BlockSide::RIGHT,
            BlockSide::BACK,
            BlockSide::FRONT,
            BlockSide::TOP,
            BlockSide::BOTTOM,
        ]
    }

    /// The outward unit normal of this face.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
        }
    }

    /// Direction-dependent base brightness multiplied into every vertex color.
    pub fn brightness(self) -> f32 {
        match self {
            BlockSide::TOP => TOP_BRIGHTNESS,
            BlockSide::BOTTOM => BOTTOM_BRIGHTNESS,
            _ => SIDE_BRIGHTNESS,
        }
    }

    /// Corner directions of the face in emission order. See [`FACE_CORNERS`].
    pub fn corners(self) -> [Vector3<i32>; 4] {
        FACE_CORNERS[self as usize].map(Vector3::from)
    }

    /// Splits a corner direction into its two tangent steps.
    ///
    /// For the top face corner `(-1, 1, 1)` this yields `(-1, 0, 0)` and `(0, 0, 1)`: the
    /// two in-plane neighbors that share the vertex are one step along each.
    pub fn tangent_steps(self, corner: Vector3<i32>) -> (Vector3<i32>, Vector3<i32>) {
        let tangent = corner - self.normal();
        match self {
            BlockSide::LEFT | BlockSide::RIGHT => {
                (Vector3::new(0, tangent.y, 0), Vector3::new(0, 0, tangent.z))
            }
            BlockSide::TOP | BlockSide::BOTTOM => {
                (Vector3::new(tangent.x, 0, 0), Vector3::new(0, 0, tangent.z))
            }
            BlockSide::FRONT | BlockSide::BACK => {
                (Vector3::new(tangent.x, 0, 0), Vector3::new(0, tangent.y, 0))
            }
        }
    }
}
