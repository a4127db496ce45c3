use blockface_geom::{Vec2, Vec3};

/// Half extent of a block in block-local space.
pub const HALF: f32 = 0.5;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub fn of(self, p: Vec3) -> f32 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
            Axis::Z => p.z,
        }
    }

    /// Drops this axis from `p`: X keeps (y,z), Y keeps (x,z), Z keeps (x,y).
    #[inline]
    pub fn project(self, p: Vec3) -> Vec2 {
        match self {
            Axis::X => Vec2::new(p.y, p.z),
            Axis::Y => Vec2::new(p.x, p.z),
            Axis::Z => Vec2::new(p.x, p.y),
        }
    }
}

/// One of the six axis-aligned cell boundaries.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::PosY,
        Direction::NegY,
        Direction::PosX,
        Direction::NegX,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// Returns the `[0..6)` index of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index `[0..6)` back into a `Direction`.
    /// Falls back to `PosY` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Direction {
        match i {
            0 => Direction::PosY,
            1 => Direction::NegY,
            2 => Direction::PosX,
            3 => Direction::NegX,
            4 => Direction::PosZ,
            5 => Direction::NegZ,
            _ => Direction::PosY,
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::PosY => Direction::NegY,
            Direction::NegY => Direction::PosY,
            Direction::PosX => Direction::NegX,
            Direction::NegX => Direction::PosX,
            Direction::PosZ => Direction::NegZ,
            Direction::NegZ => Direction::PosZ,
        }
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Direction::PosX | Direction::NegX => Axis::X,
            Direction::PosY | Direction::NegY => Axis::Y,
            Direction::PosZ | Direction::NegZ => Axis::Z,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::PosX | Direction::PosY | Direction::PosZ)
    }

    /// Coordinate of this boundary plane along `axis()`: +0.5 or -0.5.
    #[inline]
    pub fn boundary(self) -> f32 {
        if self.is_positive() { HALF } else { -HALF }
    }

    /// Returns the unit-normal vector for this direction.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let (dx, dy, dz) = self.delta();
        Vec3::new(dx as f32, dy as f32, dz as f32)
    }

    /// Returns the integer grid delta `(dx,dy,dz)` when stepping out of this face.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Direction::PosY => (0, 1, 0),
            Direction::NegY => (0, -1, 0),
            Direction::PosX => (1, 0, 0),
            Direction::NegX => (-1, 0, 0),
            Direction::PosZ => (0, 0, 1),
            Direction::NegZ => (0, 0, -1),
        }
    }

    /// Quarter turn about +Y taking north (-Z) to east (+X).
    #[inline]
    pub fn rotated_quarter(self) -> Direction {
        match self {
            Direction::PosX => Direction::PosZ,
            Direction::PosZ => Direction::NegX,
            Direction::NegX => Direction::NegZ,
            Direction::NegZ => Direction::PosX,
            d => d,
        }
    }

    #[inline]
    pub fn mirrored_y(self) -> Direction {
        match self {
            Direction::PosY => Direction::NegY,
            Direction::NegY => Direction::PosY,
            d => d,
        }
    }
}
