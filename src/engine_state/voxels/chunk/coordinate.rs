//! Horizontal chunk grid coordinates.

use std::fmt;

use cgmath::Point3;

use crate::engine_state::config::WorldConfig;

/// Position of a chunk in the horizontal chunk grid.
///
/// Height is never chunked, so a coordinate is only the `(x, z)` pair. Equality and
/// hashing are exact-integer, which makes it the sole key of the loaded-chunk map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkCoordinate {
    /// Chunk index along X
    pub x: i32,
    /// Chunk index along Z
    pub z: i32,
}

impl ChunkCoordinate {
    /// Creates a coordinate from chunk indices.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Finds the chunk containing a world-space position.
    ///
    /// Uses floor division, so `x = -0.5` resolves to chunk `-1` rather than `0`. Only the
    /// horizontal components are read.
    pub fn from_world_position(position: Point3<f32>, config: &WorldConfig) -> Self {
        Self {
            x: (position.x / config.chunk_size_x as f32).floor() as i32,
            z: (position.z / config.chunk_size_z as f32).floor() as i32,
        }
    }

    /// Finds the chunk containing an integer world block column.
    pub fn from_block(world_x: i32, world_z: i32, config: &WorldConfig) -> Self {
        Self {
            x: world_x.div_euclid(config.chunk_size_x as i32),
            z: world_z.div_euclid(config.chunk_size_z as i32),
        }
    }

    /// World-space block coordinates of this chunk's local `(0, 0)` column.
    pub fn block_origin(&self, config: &WorldConfig) -> (i32, i32) {
        (
            self.x * config.chunk_size_x as i32,
            self.z * config.chunk_size_z as i32,
        )
    }

    /// The larger of the two per-axis distances.
    pub fn chebyshev_distance(&self, other: &ChunkCoordinate) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    /// Whether this coordinate lies inside the square of `radius` chunks around `center`.
    pub fn is_within(&self, center: &ChunkCoordinate, radius: i32) -> bool {
        self.chebyshev_distance(center) <= radius
    }

    /// The eight horizontally adjacent coordinates, including diagonals.
    pub fn neighbors(&self) -> [ChunkCoordinate; 8] {
        let ChunkCoordinate { x, z } = *self;
        [
            Self::new(x - 1, z - 1),
            Self::new(x, z - 1),
            Self::new(x + 1, z - 1),
            Self::new(x - 1, z),
            Self::new(x + 1, z),
            Self::new(x - 1, z + 1),
            Self::new(x, z + 1),
            Self::new(x + 1, z + 1),
        ]
    }

    /// Every coordinate of the square of `radius` chunks around this one, row by row.
    pub fn square(&self, radius: i32) -> impl Iterator<Item = ChunkCoordinate> {
        let center = *self;
        (-radius..=radius).flat_map(move |dz| {
            (-radius..=radius).map(move |dx| Self::new(center.x + dx, center.z + dz))
        })
    }
}

impl fmt::Display for ChunkCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_positions_floor_towards_negative_infinity() {
        let config = WorldConfig::default();
        let at = |x, z| ChunkCoordinate::from_world_position(Point3::new(x, 64.0, z), &config);

        assert_eq!(at(0.0, 0.0), ChunkCoordinate::new(0, 0));
        assert_eq!(at(15.9, 15.9), ChunkCoordinate::new(0, 0));
        assert_eq!(at(16.0, -0.1), ChunkCoordinate::new(1, -1));
        assert_eq!(at(-16.0, -16.1), ChunkCoordinate::new(-1, -2));
    }

    #[test]
    fn block_columns_use_euclidean_division() {
        let config = WorldConfig::default();
        assert_eq!(ChunkCoordinate::from_block(-1, 0, &config), ChunkCoordinate::new(-1, 0));
        assert_eq!(ChunkCoordinate::from_block(-16, 31, &config), ChunkCoordinate::new(-1, 1));
        assert_eq!(ChunkCoordinate::from_block(-17, 32, &config), ChunkCoordinate::new(-2, 2));
    }

    #[test]
    fn distance_is_per_axis() {
        let center = ChunkCoordinate::new(0, 0);
        assert!(ChunkCoordinate::new(2, -2).is_within(&center, 2));
        assert!(!ChunkCoordinate::new(3, 0).is_within(&center, 2));
        assert_eq!(ChunkCoordinate::new(-3, 1).chebyshev_distance(&center), 3);
    }

    #[test]
    fn neighbors_are_the_ring_around_the_chunk() {
        let center = ChunkCoordinate::new(4, -7);
        let neighbors = center.neighbors();
        assert!(!neighbors.contains(&center));
        assert!(neighbors.iter().all(|n| n.chebyshev_distance(&center) == 1));

        let mut unique = neighbors.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn square_covers_the_full_radius() {
        let square: Vec<_> = ChunkCoordinate::new(1, 1).square(1).collect();
        assert_eq!(square.len(), 9);
        assert_eq!(square.first(), Some(&ChunkCoordinate::new(0, 0)));
        assert_eq!(square.last(), Some(&ChunkCoordinate::new(2, 2)));
        assert_eq!(ChunkCoordinate::new(0, 0).square(0).count(), 1);
    }
}
