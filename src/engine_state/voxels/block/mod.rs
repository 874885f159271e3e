//! # Block Module
//!
//! This module provides the block palette: type identifiers, face definitions and the
//! fixed base color of each block type.

use block_type::BlockType;
use cgmath::Vector3;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// Color used for identifiers without an entry of their own.
pub const DEFAULT_BLOCK_COLOR: [u8; 3] = [145, 209, 67];

/// Maps each block identifier to its 8-bit RGB base color.
///
/// Indexed by `BlockType` as a `usize`. Air never produces geometry, its entry only keeps
/// the table dense.
pub static BLOCK_TYPE_TO_COLOR: [[u8; 3]; 4] = [
    DEFAULT_BLOCK_COLOR, // AIR
    [145, 209, 67],      // GRASS
    [150, 108, 74],      // DIRT
    [180, 180, 180],     // STONE
];

/// Stateless palette lookups.
pub struct Block;

impl Block {
    /// Gets the base color of a block identifier, normalized to `[0, 1]` per channel.
    ///
    /// Unknown identifiers fall back to [`DEFAULT_BLOCK_COLOR`].
    pub fn get_color_from_int(btype_int: BlockTypeSize) -> Vector3<f32> {
        let rgb = BLOCK_TYPE_TO_COLOR
            .get(btype_int as usize)
            .copied()
            .unwrap_or(DEFAULT_BLOCK_COLOR);
        Vector3::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32) / 255.0
    }

    /// Gets the normalized base color of a block type.
    pub fn get_color(block_type: BlockType) -> Vector3<f32> {
        Self::get_color_from_int(block_type.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_normalized() {
        let stone = Block::get_color(BlockType::STONE);
        assert!((stone.x - 180.0 / 255.0).abs() < 1e-6);
        assert_eq!(stone.x, stone.y);
        assert_eq!(stone.y, stone.z);

        let dirt = Block::get_color(BlockType::DIRT);
        assert!((dirt.x - 150.0 / 255.0).abs() < 1e-6);
        assert!((dirt.y - 108.0 / 255.0).abs() < 1e-6);
        assert!((dirt.z - 74.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn unknown_identifiers_use_the_default_color() {
        assert_eq!(Block::get_color_from_int(42), Block::get_color(BlockType::GRASS));
    }
}
