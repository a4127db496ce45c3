use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            cx: self.cx + dx,
            cy: self.cy + dy,
            cz: self.cz + dz,
        }
    }

    /// Chunk containing world cell `(wx, wy, wz)` for chunks of edge `dim`.
    #[inline]
    pub fn containing(wx: i32, wy: i32, wz: i32, dim: usize) -> Self {
        let d = dim as i32;
        Self::new(wx.div_euclid(d), wy.div_euclid(d), wz.div_euclid(d))
    }

    /// World position of local cell (0,0,0).
    #[inline]
    pub fn origin(self, dim: usize) -> [i32; 3] {
        let d = dim as i32;
        [self.cx * d, self.cy * d, self.cz * d]
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ChunkCoord> for (i32, i32, i32) {
    fn from(value: ChunkCoord) -> Self {
        (value.cx, value.cy, value.cz)
    }
}
