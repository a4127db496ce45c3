//! Planar face polygons in block-local space ([-0.5, 0.5] on every axis).
//!
//! A face has three or four corners. Triangles are stored as-is; quads are
//! stored in strip order, so `c0,c1,c2` and `c2,c1,c3` are the two triangles
//! and the perimeter runs `c0,c1,c3,c2`. Both triangles wind counter-clockwise
//! when viewed from the side the face points to.

use blockface_geom::{Aabb, Vec2, Vec3};

use crate::direction::{Direction, HALF};

pub const MAX_CORNERS: usize = 4;

/// Tolerance for boundary-plane and containment comparisons.
pub const EPSILON: f32 = 1e-4;

const TRI_INDICES: [u32; 3] = [0, 1, 2];
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 1, 3];
const TRI_OUTLINE: [usize; 3] = [0, 1, 2];
const QUAD_OUTLINE: [usize; 4] = [0, 1, 3, 2];

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Corner {
    pub pos: Vec3,
    pub uv: Vec2,
}

impl Corner {
    #[inline]
    pub const fn new(pos: Vec3, uv: Vec2) -> Self {
        Self { pos, uv }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// May be hidden by a neighbour's geometry.
    #[default]
    Cull,
    /// Never suppressed, e.g. sloped surfaces that cannot sit flush with a neighbour.
    AlwaysRender,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Face {
    corners: [Corner; MAX_CORNERS],
    len: u8,
    pub visibility: Visibility,
}

impl Face {
    pub fn quad(corners: [Corner; 4]) -> Self {
        Self {
            corners,
            len: 4,
            visibility: Visibility::Cull,
        }
    }

    pub fn tri(c: [Corner; 3]) -> Self {
        Self {
            corners: [c[0], c[1], c[2], Corner::default()],
            len: 3,
            visibility: Visibility::Cull,
        }
    }

    /// Builds a triangle from positions, deriving UVs for `dir`.
    pub fn tri_at(dir: Direction, p: [Vec3; 3]) -> Self {
        Self::tri(p.map(|p| Corner::new(p, uv_for(dir, p))))
    }

    /// Axis-aligned rectangle lying in the plane `axis == depth` for `dir`.
    ///
    /// `a` and `b` are the spans on the two remaining axes in projection
    /// order: (y,z) for X faces, (x,z) for Y faces, (x,y) for Z faces.
    pub fn rect(dir: Direction, depth: f32, a: (f32, f32), b: (f32, f32)) -> Self {
        let d = depth;
        let (a0, a1) = a;
        let (b0, b1) = b;
        let p = match dir {
            Direction::PosY => [
                Vec3::new(a0, d, b1),
                Vec3::new(a1, d, b1),
                Vec3::new(a0, d, b0),
                Vec3::new(a1, d, b0),
            ],
            Direction::NegY => [
                Vec3::new(a0, d, b0),
                Vec3::new(a1, d, b0),
                Vec3::new(a0, d, b1),
                Vec3::new(a1, d, b1),
            ],
            Direction::PosZ => [
                Vec3::new(a0, b0, d),
                Vec3::new(a1, b0, d),
                Vec3::new(a0, b1, d),
                Vec3::new(a1, b1, d),
            ],
            Direction::NegZ => [
                Vec3::new(a1, b0, d),
                Vec3::new(a0, b0, d),
                Vec3::new(a1, b1, d),
                Vec3::new(a0, b1, d),
            ],
            Direction::PosX => [
                Vec3::new(d, a0, b1),
                Vec3::new(d, a0, b0),
                Vec3::new(d, a1, b1),
                Vec3::new(d, a1, b0),
            ],
            Direction::NegX => [
                Vec3::new(d, a0, b0),
                Vec3::new(d, a0, b1),
                Vec3::new(d, a1, b0),
                Vec3::new(d, a1, b1),
            ],
        };
        Self::quad(p.map(|p| Corner::new(p, uv_for(dir, p))))
    }

    /// Full boundary square for `dir`.
    pub fn full(dir: Direction) -> Self {
        Self::rect(dir, dir.boundary(), (-HALF, HALF), (-HALF, HALF))
    }

    #[inline]
    pub fn always_render(mut self) -> Self {
        self.visibility = Visibility::AlwaysRender;
        self
    }

    #[inline]
    pub fn is_always_render(&self) -> bool {
        self.visibility == Visibility::AlwaysRender
    }

    #[inline]
    pub fn corners(&self) -> &[Corner] {
        &self.corners[..self.len as usize]
    }

    /// Corners in perimeter order.
    pub fn outline(&self) -> impl Iterator<Item = &Corner> + '_ {
        let order: &'static [usize] = if self.len == 4 {
            &QUAD_OUTLINE
        } else {
            &TRI_OUTLINE
        };
        order.iter().map(move |&i| &self.corners[i])
    }

    /// Triangle list over `corners()`.
    #[inline]
    pub fn triangle_indices(&self) -> &'static [u32] {
        if self.len == 4 {
            &QUAD_INDICES
        } else {
            &TRI_INDICES
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.corners().iter().map(|c| c.pos))
    }

    /// True when the whole face sits on `dir`'s boundary plane (within `EPSILON`).
    pub fn lies_on(&self, dir: Direction) -> bool {
        let b = self.bounds();
        let axis = dir.axis();
        let edge = dir.boundary();
        (axis.of(b.min) - edge).abs() <= EPSILON && (axis.of(b.max) - edge).abs() <= EPSILON
    }

    /// True when the face lies on `dir`'s boundary and spans the whole cell side.
    pub fn covers_side(&self, dir: Direction) -> bool {
        if !self.lies_on(dir) {
            return false;
        }
        let b = self.bounds();
        let axis = dir.axis();
        let lo = axis.project(b.min);
        let hi = axis.project(b.max);
        lo.x <= -HALF + EPSILON
            && lo.y <= -HALF + EPSILON
            && hi.x >= HALF - EPSILON
            && hi.y >= HALF - EPSILON
    }

    /// Geometric normal of the first triangle (unnormalized).
    pub fn winding_normal(&self) -> Vec3 {
        let c = self.corners();
        (c[1].pos - c[0].pos).cross(c[2].pos - c[0].pos)
    }

    /// Quarter turn about +Y (north to east). `dir` is the group the face was listed under.
    pub fn rotated_quarter(&self, dir: Direction) -> Face {
        let to = dir.rotated_quarter();
        self.remapped(to, |p| Vec3::new(-p.z, p.y, p.x), false)
    }

    /// Reflection through the y = 0 plane; winding is restored by swapping corners 1 and 2.
    pub fn mirrored_y(&self, dir: Direction) -> Face {
        let to = dir.mirrored_y();
        self.remapped(to, |p| Vec3::new(p.x, -p.y, p.z), true)
    }

    fn remapped(&self, to: Direction, f: impl Fn(Vec3) -> Vec3, flip: bool) -> Face {
        let mut out = *self;
        for (dst, src) in out.corners.iter_mut().zip(self.corners()) {
            let p = f(src.pos);
            *dst = Corner::new(p, uv_for(to, p));
        }
        if flip {
            out.corners.swap(1, 2);
        }
        out
    }
}

/// Texture coordinates anchored to block-local space for a face pointing along `dir`.
pub fn uv_for(dir: Direction, p: Vec3) -> Vec2 {
    match dir {
        Direction::PosY | Direction::NegY => Vec2::new(p.x + HALF, p.z + HALF),
        Direction::PosZ => Vec2::new(p.x + HALF, p.y + HALF),
        Direction::NegZ => Vec2::new(HALF - p.x, p.y + HALF),
        Direction::PosX => Vec2::new(HALF - p.z, p.y + HALF),
        Direction::NegX => Vec2::new(p.z + HALF, p.y + HALF),
    }
}
