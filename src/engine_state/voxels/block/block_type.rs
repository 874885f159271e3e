//! # Block Type Module
//!
//! This module defines the small palette of block types a chunk can hold.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all possible block types in the voxel world.
///
/// The discriminant is the block identifier stored in chunk grids. `AIR` is always `0`
/// and is the only type without geometry.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// Empty space. Fully transparent, never meshed.
    #[default]
    AIR = 0,

    /// Grass, used for the surface cell of every terrain column.
    GRASS = 1,

    /// Dirt, used for the shallow layer under the grass.
    DIRT = 2,

    /// Stone, filling everything below the dirt layer.
    STONE = 3,
}

impl BlockType {
    /// Looks up a block type by its identifier.
    ///
    /// # Returns
    /// `None` if the identifier is not part of the palette.
    pub fn from_id(id: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(id)
    }

    /// The identifier stored for this block type.
    pub fn id(self) -> BlockTypeSize {
        self as BlockTypeSize
    }

    /// Whether light and sight pass through this block.
    pub fn is_transparent(self) -> bool {
        self == BlockType::AIR
    }
}
