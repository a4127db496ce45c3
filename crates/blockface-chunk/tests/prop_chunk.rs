use blockface_blocks::Block;
use blockface_chunk::{BlockSource, Chunk, ChunkCoord, ChunkStore, NoNeighbors};
use proptest::prelude::*;

fn dim() -> impl Strategy<Value = usize> {
    1usize..=8
}

fn small_i32() -> impl Strategy<Value = i32> {
    -100_000i32..=100_000
}

fn world_cell() -> impl Strategy<Value = (i32, i32, i32)> {
    (-40i32..40, -40i32..40, -40i32..40)
}

proptest! {
    // idx maps each (x,y,z) within bounds to unique in-range indices
    #[test]
    fn idx_is_unique_and_in_range(cx in small_i32(), cz in small_i32(), s in dim()) {
        let expect = s * s * s;
        let c = Chunk::new(ChunkCoord::new(cx, 0, cz), s);
        let mut seen = vec![false; expect];
        for y in 0..s { for z in 0..s { for x in 0..s {
            let i = c.idx(x, y, z);
            prop_assert!(i < expect);
            prop_assert!(!seen[i]);
            seen[i] = true;
        }}}
        prop_assert!(seen.into_iter().all(|b| b));
    }

    // get_world agrees with get_local for every cell and misses just outside
    #[test]
    fn world_and_local_reads_agree(cx in small_i32(), cy in -8i32..8, cz in small_i32(), s in dim()) {
        let n = s * s * s;
        let blocks = (0..n).map(|i| Block::new(i as u16)).collect();
        let c = Chunk::from_blocks_local(ChunkCoord::new(cx, cy, cz), s, blocks);
        let [ox, oy, oz] = c.origin();
        let si = s as i32;
        for y in 0..s { for z in 0..s { for x in 0..s {
            let w = (ox + x as i32, oy + y as i32, oz + z as i32);
            prop_assert_eq!(c.get_world(w.0, w.1, w.2), Some(c.get_local(x, y, z)));
        }}}
        prop_assert_eq!(c.get_world(ox - 1, oy, oz), None);
        prop_assert_eq!(c.get_world(ox, oy + si, oz), None);
        prop_assert_eq!(c.get_world(ox, oy, oz + si), None);
    }

    // Local reads past the edge land on the same world cell the resolver sees
    #[test]
    fn edge_reads_use_world_coordinates(cx in -50i32..50, cz in -50i32..50, s in dim(), axis in 0usize..3, hi in any::<bool>()) {
        let c = Chunk::new(ChunkCoord::new(cx, 0, cz), s);
        let mut l = [0i32; 3];
        l[axis] = if hi { s as i32 } else { -1 };
        let [ox, oy, oz] = c.origin();
        let expect = (ox + l[0], oy + l[1], oz + l[2]);
        let lookup = move |wx: i32, wy: i32, wz: i32| {
            ((wx, wy, wz) == expect).then_some(Block::new(7))
        };
        prop_assert_eq!(c.get(l[0], l[1], l[2], &lookup), Some(Block::new(7)));
        prop_assert_eq!(c.get(l[0], l[1], l[2], &NoNeighbors), None);
    }

    // The store reads back what it was given, wherever chunk borders fall
    #[test]
    fn store_reads_back_writes(cells in prop::collection::vec(world_cell(), 1..32), s in 1usize..=6) {
        let mut store = ChunkStore::new(s);
        for (i, &(x, y, z)) in cells.iter().enumerate() {
            store.set_block(x, y, z, Block::new(1 + (i % 5) as u16));
        }
        // Later writes win for repeated cells
        let mut last = std::collections::HashMap::new();
        for (i, &cell) in cells.iter().enumerate() {
            last.insert(cell, Block::new(1 + (i % 5) as u16));
        }
        for (&(x, y, z), &b) in &last {
            prop_assert_eq!(store.get_block(x, y, z), Some(b));
            prop_assert_eq!(store.block_at(x, y, z), Some(b));
        }
    }

    // Every chunk that owns or borders an edited cell is reported dirty, in order
    #[test]
    fn dirty_set_covers_owner_and_resident_neighbours((x, y, z) in world_cell(), s in 2usize..=6) {
        let mut store = ChunkStore::new(s);
        let owner = ChunkCoord::containing(x, y, z, s);
        // Populate the owner and its six neighbours
        for (dx, dy, dz) in [(0,0,0),(1,0,0),(-1,0,0),(0,1,0),(0,-1,0),(0,0,1),(0,0,-1)] {
            let [ox, oy, oz] = owner.offset(dx, dy, dz).origin(s);
            store.set_block(ox, oy, oz, Block::new(9));
            store.set_block(ox + 1, oy + 1, oz + 1, Block::new(9));
        }
        store.take_dirty();
        store.set_block(x, y, z, Block::new(3));
        let dirty = store.take_dirty();
        prop_assert!(dirty.contains(&owner));
        prop_assert!(dirty.windows(2).all(|w| w[0] < w[1]));
        let [ox, oy, oz] = owner.origin(s);
        let (lx, ly, lz) = (x - ox, y - oy, z - oz);
        let last = s as i32 - 1;
        let expect_neighbour = |d: (i32, i32, i32)| {
            (d.0 == -1 && lx == 0) || (d.0 == 1 && lx == last)
                || (d.1 == -1 && ly == 0) || (d.1 == 1 && ly == last)
                || (d.2 == -1 && lz == 0) || (d.2 == 1 && lz == last)
        };
        for d in [(1,0,0),(-1,0,0),(0,1,0),(0,-1,0),(0,0,1),(0,0,-1)] {
            let n = owner.offset(d.0, d.1, d.2);
            prop_assert_eq!(dirty.contains(&n), expect_neighbour(d), "neighbour {:?}", d);
        }
    }
}
