use blockface_blocks::Block;

/// Read-only view of blocks outside the chunk being meshed, in world coordinates.
///
/// `None` means nothing is resident there; callers treat it as open space.
pub trait BlockSource {
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> Option<Block>;
}

/// Resolver for a chunk meshed in isolation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNeighbors;

impl BlockSource for NoNeighbors {
    #[inline]
    fn block_at(&self, _wx: i32, _wy: i32, _wz: i32) -> Option<Block> {
        None
    }
}

impl<F> BlockSource for F
where
    F: Fn(i32, i32, i32) -> Option<Block>,
{
    #[inline]
    fn block_at(&self, wx: i32, wy: i32, wz: i32) -> Option<Block> {
        self(wx, wy, wz)
    }
}
