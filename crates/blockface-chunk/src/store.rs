use blockface_blocks::Block;
use hashbrown::{HashMap, HashSet};

use crate::{BlockSource, Chunk, ChunkCoord};

/// Sparse world made of resident chunks, with rebuild tracking.
///
/// Edits mark the owning chunk dirty plus every resident chunk sharing a face
/// with the edited cell, since their border faces may now cull differently.
#[derive(Clone, Debug)]
pub struct ChunkStore {
    dim: usize,
    chunks: HashMap<ChunkCoord, Chunk>,
    dirty: HashSet<ChunkCoord>,
}

impl ChunkStore {
    pub fn new(dim: usize) -> Self {
        Self {
            dim: dim.max(1),
            chunks: HashMap::new(),
            dirty: HashSet::new(),
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Resident chunk coordinates in ascending order.
    pub fn coords(&self) -> Vec<ChunkCoord> {
        let mut v: Vec<ChunkCoord> = self.chunks.keys().copied().collect();
        v.sort_unstable();
        v
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Replaces or adds a whole chunk. It and its resident face neighbours become dirty.
    pub fn insert_chunk(&mut self, chunk: Chunk) {
        let coord = chunk.coord;
        let chunk = if chunk.size() != self.dim {
            log::warn!(
                "chunk {:?} has size {}, store uses {}; resizing",
                coord,
                chunk.size(),
                self.dim
            );
            resize_chunk(&chunk, self.dim)
        } else {
            chunk
        };
        self.chunks.insert(coord, chunk);
        self.dirty.insert(coord);
        for (dx, dy, dz) in FACE_OFFSETS {
            let n = coord.offset(dx, dy, dz);
            if self.chunks.contains_key(&n) {
                self.dirty.insert(n);
            }
        }
    }

    pub fn remove_chunk(&mut self, coord: ChunkCoord) -> Option<Chunk> {
        let removed = self.chunks.remove(&coord)?;
        self.dirty.remove(&coord);
        for (dx, dy, dz) in FACE_OFFSETS {
            let n = coord.offset(dx, dy, dz);
            if self.chunks.contains_key(&n) {
                self.dirty.insert(n);
            }
        }
        Some(removed)
    }

    /// Block at a world cell; `None` when no chunk is resident there.
    pub fn get_block(&self, wx: i32, wy: i32, wz: i32) -> Option<Block> {
        let coord = ChunkCoord::containing(wx, wy, wz, self.dim);
        self.chunks.get(&coord)?.get_world(wx, wy, wz)
    }

    /// Writes a world cell, creating the owning chunk on demand.
    ///
    /// Writing air where no chunk is resident does nothing; rewriting the
    /// same block marks nothing dirty.
    pub fn set_block(&mut self, wx: i32, wy: i32, wz: i32, block: Block) {
        let dim = self.dim;
        let coord = ChunkCoord::containing(wx, wy, wz, dim);
        let [ox, oy, oz] = coord.origin(dim);
        let (lx, ly, lz) = (wx - ox, wy - oy, wz - oz);
        if !self.chunks.contains_key(&coord) {
            if block.is_air() {
                return;
            }
            log::debug!("creating chunk {:?}", coord);
            self.chunks.insert(coord, Chunk::new(coord, dim));
        }
        let Some(chunk) = self.chunks.get_mut(&coord) else {
            return;
        };
        if chunk.get_local(lx as usize, ly as usize, lz as usize) == block {
            return;
        }
        chunk.set_block(lx, ly, lz, block);
        for n in affected_chunks(coord, (lx, ly, lz), dim) {
            if n == coord || self.chunks.contains_key(&n) {
                self.dirty.insert(n);
            }
        }
    }

    pub fn is_dirty(&self, coord: ChunkCoord) -> bool {
        self.dirty.contains(&coord)
    }

    pub fn mark_dirty(&mut self, coord: ChunkCoord) {
        if self.chunks.contains_key(&coord) {
            self.dirty.insert(coord);
        }
    }

    pub fn mark_all_dirty(&mut self) {
        self.dirty.extend(self.chunks.keys().copied());
    }

    /// Drains the dirty set in ascending coordinate order.
    pub fn take_dirty(&mut self) -> Vec<ChunkCoord> {
        let mut v: Vec<ChunkCoord> = self.dirty.drain().collect();
        v.sort_unstable();
        v
    }
}

impl Default for ChunkStore {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CHUNK_SIZE)
    }
}

impl BlockSource for ChunkStore {
    #[inline]
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> Option<Block> {
        self.get_block(wx, wy, wz)
    }
}

const FACE_OFFSETS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

// Owning chunk plus the chunk across each border the local cell touches
fn affected_chunks(coord: ChunkCoord, local: (i32, i32, i32), dim: usize) -> Vec<ChunkCoord> {
    let last = dim as i32 - 1;
    let (lx, ly, lz) = local;
    let mut out = vec![coord];
    if lx == 0 {
        out.push(coord.offset(-1, 0, 0));
    }
    if lx == last {
        out.push(coord.offset(1, 0, 0));
    }
    if ly == 0 {
        out.push(coord.offset(0, -1, 0));
    }
    if ly == last {
        out.push(coord.offset(0, 1, 0));
    }
    if lz == 0 {
        out.push(coord.offset(0, 0, -1));
    }
    if lz == last {
        out.push(coord.offset(0, 0, 1));
    }
    out
}

fn resize_chunk(chunk: &Chunk, dim: usize) -> Chunk {
    let mut out = Chunk::new(chunk.coord, dim);
    let n = chunk.size().min(dim);
    for y in 0..n {
        for z in 0..n {
            for x in 0..n {
                out.set_block(x as i32, y as i32, z as i32, chunk.get_local(x, y, z));
            }
        }
    }
    out
}
