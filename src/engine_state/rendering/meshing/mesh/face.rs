use cgmath::{Point3, Vector3};

use super::ambient_occlusion::vertex_occlusion;
use crate::engine_state::{
    rendering::Vertex,
    voxels::{
        block::{block_side::BlockSide, block_type::BlockType, Block},
        chunk::Chunk,
    },
};

/// A single visible quad of a block.
///
/// A face knows which block it belongs to and which way it points. Turning it into vertices
/// reads the surrounding cells through the chunk's transparency oracle, so faces on the
/// chunk border see into neighboring chunks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Local coordinates of the owning block
    pub block: Point3<i32>,
    /// The type of the owning block, used for the base color
    pub block_type: BlockType,
    /// Which side of the block this face represents
    pub block_side: BlockSide,
}

impl Face {
    /// Creates a new face for the block at local coordinates `(i, j, k)`.
    pub fn new(i: i32, j: i32, k: i32, block_type: BlockType, block_side: BlockSide) -> Self {
        Face {
            block: Point3::new(i, j, k),
            block_type,
            block_side,
        }
    }

    /// Solid test for the cell at `offset` from the owning block.
    fn blocked(&self, chunk: &Chunk, offset: Vector3<i32>) -> bool {
        let cell = self.block + offset;
        !chunk.is_transparent(cell.x, cell.y, cell.z)
    }

    /// Ambient occlusion of the vertex at `corner`.
    ///
    /// # Arguments
    /// * `chunk` - The chunk that owns the face
    /// * `corner` - Corner direction from [`BlockSide::corners`]
    pub fn corner_ao(&self, chunk: &Chunk, corner: Vector3<i32>) -> f32 {
        let normal = self.block_side.normal();
        let (first, second) = self.block_side.tangent_steps(corner);

        vertex_occlusion(
            self.blocked(chunk, normal + first),
            self.blocked(chunk, normal + second),
            self.blocked(chunk, normal + first + second),
            self.blocked(chunk, normal * 2 + first),
            self.blocked(chunk, normal * 2 + second),
        )
    }

    /// Builds the four shaded vertices of this face in winding order.
    ///
    /// Positions are world space with the block center on integer coordinates, so corners
    /// sit half a block away.
    pub fn vertices(&self, chunk: &Chunk) -> [Vertex; 4] {
        let world = chunk.to_world(self.block.x, self.block.y, self.block.z);
        let center = Point3::new(world.x as f32, world.y as f32, world.z as f32);
        let base_color = Block::get_color(self.block_type);
        let brightness = self.block_side.brightness();

        self.block_side.corners().map(|corner| {
            let ao = self.corner_ao(chunk, corner);
            let shaded = base_color * ao * brightness;
            let color = Vector3::new(
                shaded.x.clamp(0.0, 1.0),
                shaded.y.clamp(0.0, 1.0),
                shaded.z.clamp(0.0, 1.0),
            );
            let offset = Vector3::new(corner.x as f32, corner.y as f32, corner.z as f32) * 0.5;
            Vertex::new(center + offset, color, ao)
        })
    }
}
