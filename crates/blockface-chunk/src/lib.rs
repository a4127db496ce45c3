//! Chunk grids, chunk coordinates and the sparse chunk store.
#![forbid(unsafe_code)]

mod coord;
mod source;
mod store;

pub use coord::ChunkCoord;
pub use source::{BlockSource, NoNeighbors};
pub use store::ChunkStore;

use blockface_blocks::Block;

/// Edge length used when callers do not choose one.
pub const DEFAULT_CHUNK_SIZE: usize = 16;

/// Cubic grid of blocks; every cell starts as air.
#[derive(Clone, Debug)]
pub struct Chunk {
    pub coord: ChunkCoord,
    size: usize,
    blocks: Vec<Block>,
}

impl Chunk {
    pub fn new(coord: ChunkCoord, size: usize) -> Self {
        Chunk {
            coord,
            size,
            blocks: vec![Block::AIR; size * size * size],
        }
    }

    pub fn from_blocks_local(coord: ChunkCoord, size: usize, blocks: Vec<Block>) -> Self {
        let mut b = blocks;
        let expect = size * size * size;
        if b.len() != expect {
            b.resize(expect, Block::AIR);
        }
        Chunk {
            coord,
            size,
            blocks: b,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.size + z) * self.size + x
    }

    #[inline]
    pub fn contains_local(&self, x: i32, y: i32, z: i32) -> bool {
        let s = self.size as i32;
        (0..s).contains(&x) && (0..s).contains(&y) && (0..s).contains(&z)
    }

    #[inline]
    pub fn get_local(&self, x: usize, y: usize, z: usize) -> Block {
        self.blocks[self.idx(x, y, z)]
    }

    /// Block at a local position; positions outside the grid are looked up
    /// in world space through `neighbors`.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32, neighbors: &impl BlockSource) -> Option<Block> {
        if self.contains_local(x, y, z) {
            return Some(self.get_local(x as usize, y as usize, z as usize));
        }
        let [ox, oy, oz] = self.origin();
        neighbors.block_at(ox + x, oy + y, oz + z)
    }

    /// Writes a cell; out-of-range positions are ignored.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: Block) {
        if !self.contains_local(x, y, z) {
            return;
        }
        let i = self.idx(x as usize, y as usize, z as usize);
        self.blocks[i] = block;
    }

    /// World position of local cell (0,0,0).
    #[inline]
    pub fn origin(&self) -> [i32; 3] {
        self.coord.origin(self.size)
    }

    #[inline]
    pub fn contains_world(&self, wx: i32, wy: i32, wz: i32) -> bool {
        let [ox, oy, oz] = self.origin();
        self.contains_local(wx - ox, wy - oy, wz - oz)
    }

    #[inline]
    pub fn get_world(&self, wx: i32, wy: i32, wz: i32) -> Option<Block> {
        if !self.contains_world(wx, wy, wz) {
            return None;
        }
        let [ox, oy, oz] = self.origin();
        Some(self.get_local(
            (wx - ox) as usize,
            (wy - oy) as usize,
            (wz - oz) as usize,
        ))
    }

    #[inline]
    pub fn has_non_air(&self) -> bool {
        self.blocks.iter().any(|b| !b.is_air())
    }

    #[inline]
    pub fn is_all_air(&self) -> bool {
        !self.has_non_air()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl BlockSource for Chunk {
    #[inline]
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> Option<Block> {
        self.get_world(wx, wy, wz)
    }
}
