//! Per-vertex ambient occlusion.
//!
//! Each face vertex looks at the cells in the layer in front of the face that touch it: two
//! "side" cells sharing an edge with the vertex and one "corner" cell sharing only the
//! vertex. Two further "deep" cells, one more step out along the normal, darken it a
//! little more.

/// Brightness by number of blockers. Index is the blocker count.
pub const AO_STEPS: [f32; 4] = [1.0, 0.9, 0.8, 0.7];
/// Result when both side cells are solid, regardless of the corner.
pub const FULL_OCCLUSION: f32 = 0.0;
/// Multiplier applied once per solid deep cell.
pub const DEEP_BLOCKER_FACTOR: f32 = 0.9;
/// Floor of the final per-vertex value.
pub const MIN_VERTEX_BRIGHTNESS: f32 = 0.05;

/// Occlusion from the first layer in front of the face.
///
/// The corner only counts when neither side is solid.
pub fn corner_occlusion(side1: bool, side2: bool, corner: bool) -> f32 {
    if side1 && side2 {
        return FULL_OCCLUSION;
    }

    let blockers = side1 as usize + side2 as usize + (corner && !side1 && !side2) as usize;
    AO_STEPS[blockers]
}

/// Full per-vertex occlusion including the deep cells, floored at
/// [`MIN_VERTEX_BRIGHTNESS`].
pub fn vertex_occlusion(side1: bool, side2: bool, corner: bool, deep1: bool, deep2: bool) -> f32 {
    let mut ao = corner_occlusion(side1, side2, corner);
    if deep1 {
        ao *= DEEP_BLOCKER_FACTOR;
    }
    if deep2 {
        ao *= DEEP_BLOCKER_FACTOR;
    }
    ao.max(MIN_VERTEX_BRIGHTNESS)
}
