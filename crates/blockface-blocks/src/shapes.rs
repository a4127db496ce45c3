//! Face templates per shape variant, built once when the catalog is created.
//!
//! Oriented shapes are authored facing north (tall side toward -Z) with their
//! bottom half filled; the other facings and the upside-down variants are
//! derived by rotation about +Y and reflection through y = 0.

use blockface_geom::Vec3;

use crate::direction::{Direction, HALF};
use crate::face::Face;
use crate::types::{BlockState, Connections, Facing, Shape};

const FULL: (f32, f32) = (-HALF, HALF);
const LOW: (f32, f32) = (-HALF, 0.0);
const HIGH: (f32, f32) = (0.0, HALF);

/// Fence post half-width.
pub const POST_HALF: f32 = 0.125;
/// Fence arm half-width.
pub const ARM_HALF: f32 = 0.0625;
/// Vertical span of a fence arm.
pub const ARM_Y: (f32, f32) = (0.0, 0.375);

/// Faces grouped by the direction they are listed under.
#[derive(Clone, Debug, Default)]
pub struct FaceSet {
    by_dir: [Vec<Face>; 6],
}

impl FaceSet {
    #[inline]
    pub fn get(&self, dir: Direction) -> &[Face] {
        &self.by_dir[dir.index()]
    }

    pub fn push(&mut self, dir: Direction, face: Face) {
        self.by_dir[dir.index()].push(face);
    }

    fn with(mut self, dir: Direction, face: Face) -> Self {
        self.push(dir, face);
        self
    }

    pub fn len(&self) -> usize {
        self.by_dir.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rotated_quarter(&self) -> FaceSet {
        let mut out = FaceSet::default();
        for dir in Direction::ALL {
            for f in self.get(dir) {
                out.push(dir.rotated_quarter(), f.rotated_quarter(dir));
            }
        }
        out
    }

    fn rotated(&self, turns: usize) -> FaceSet {
        let mut out = self.clone();
        for _ in 0..turns {
            out = out.rotated_quarter();
        }
        out
    }

    fn mirrored_y(&self) -> FaceSet {
        let mut out = FaceSet::default();
        for dir in Direction::ALL {
            for f in self.get(dir) {
                out.push(dir.mirrored_y(), f.mirrored_y(dir));
            }
        }
        out
    }

    /// All four facings of a north-authored set, indexed by `Facing`.
    fn facings(&self) -> [FaceSet; 4] {
        Facing::ALL.map(|f| self.rotated(f.quarter_turns()))
    }
}

fn cube() -> FaceSet {
    Direction::ALL
        .into_iter()
        .fold(FaceSet::default(), |set, dir| set.with(dir, Face::full(dir)))
}

fn slab_bottom() -> FaceSet {
    FaceSet::default()
        .with(Direction::PosY, Face::rect(Direction::PosY, 0.0, FULL, FULL))
        .with(Direction::NegY, Face::full(Direction::NegY))
        .with(Direction::PosX, Face::rect(Direction::PosX, HALF, LOW, FULL))
        .with(Direction::NegX, Face::rect(Direction::NegX, -HALF, LOW, FULL))
        .with(Direction::PosZ, Face::rect(Direction::PosZ, HALF, FULL, LOW))
        .with(Direction::NegZ, Face::rect(Direction::NegZ, -HALF, FULL, LOW))
}

fn stairs_north() -> FaceSet {
    FaceSet::default()
        .with(Direction::NegY, Face::full(Direction::NegY))
        .with(Direction::PosY, Face::rect(Direction::PosY, HALF, FULL, LOW))
        .with(Direction::PosY, Face::rect(Direction::PosY, 0.0, FULL, HIGH))
        .with(Direction::NegZ, Face::full(Direction::NegZ))
        .with(Direction::PosZ, Face::rect(Direction::PosZ, HALF, FULL, LOW))
        // Riser between the two steps; never on a cell boundary.
        .with(Direction::PosZ, Face::rect(Direction::PosZ, 0.0, FULL, HIGH))
        .with(Direction::PosX, Face::rect(Direction::PosX, HALF, LOW, FULL))
        .with(Direction::PosX, Face::rect(Direction::PosX, HALF, HIGH, LOW))
        .with(Direction::NegX, Face::rect(Direction::NegX, -HALF, LOW, FULL))
        .with(Direction::NegX, Face::rect(Direction::NegX, -HALF, HIGH, LOW))
}

fn ramp_north() -> FaceSet {
    let slope = Face::rect(Direction::PosY, 0.0, FULL, FULL);
    // Tilt the flat top so its back edge rises to y = 0.5 and its front edge drops to y = -0.5.
    let mut corners = [slope.corners()[0]; 4];
    for (dst, c) in corners.iter_mut().zip(slope.corners()) {
        let mut c = *c;
        c.pos.y = -c.pos.z;
        *dst = c;
    }
    FaceSet::default()
        .with(Direction::NegY, Face::full(Direction::NegY))
        .with(Direction::NegZ, Face::full(Direction::NegZ))
        .with(Direction::PosY, Face::quad(corners).always_render())
        .with(
            Direction::PosX,
            Face::tri_at(
                Direction::PosX,
                [
                    Vec3::new(HALF, -HALF, HALF),
                    Vec3::new(HALF, -HALF, -HALF),
                    Vec3::new(HALF, HALF, -HALF),
                ],
            ),
        )
        .with(
            Direction::NegX,
            Face::tri_at(
                Direction::NegX,
                [
                    Vec3::new(-HALF, -HALF, -HALF),
                    Vec3::new(-HALF, -HALF, HALF),
                    Vec3::new(-HALF, HALF, -HALF),
                ],
            ),
        )
}

fn fence_post() -> FaceSet {
    let p = (-POST_HALF, POST_HALF);
    FaceSet::default()
        .with(Direction::PosY, Face::rect(Direction::PosY, HALF, p, p))
        .with(Direction::NegY, Face::rect(Direction::NegY, -HALF, p, p))
        .with(Direction::PosX, Face::rect(Direction::PosX, POST_HALF, FULL, p))
        .with(Direction::NegX, Face::rect(Direction::NegX, -POST_HALF, FULL, p))
        .with(Direction::PosZ, Face::rect(Direction::PosZ, POST_HALF, p, FULL))
        .with(Direction::NegZ, Face::rect(Direction::NegZ, -POST_HALF, p, FULL))
}

/// Arm reaching from the post to the north boundary (-Z).
fn fence_arm_north() -> FaceSet {
    let x = (-ARM_HALF, ARM_HALF);
    let z = (-HALF, -POST_HALF);
    FaceSet::default()
        .with(Direction::NegZ, Face::rect(Direction::NegZ, -HALF, x, ARM_Y))
        .with(Direction::PosY, Face::rect(Direction::PosY, ARM_Y.1, x, z))
        .with(Direction::NegY, Face::rect(Direction::NegY, ARM_Y.0, x, z))
        .with(Direction::PosX, Face::rect(Direction::PosX, ARM_HALF, ARM_Y, z))
        .with(Direction::NegX, Face::rect(Direction::NegX, -ARM_HALF, ARM_Y, z))
}

/// Every template the catalog can hand out.
#[derive(Clone, Debug)]
pub struct ShapeTemplates {
    cube: FaceSet,
    slab: [FaceSet; 2],
    stairs: [[FaceSet; 4]; 2],
    ramp: [[FaceSet; 4]; 2],
    fence_post: FaceSet,
    fence_arms: [FaceSet; 4],
}

impl Default for ShapeTemplates {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeTemplates {
    pub fn new() -> Self {
        let slab = slab_bottom();
        let stairs = stairs_north();
        let ramp = ramp_north();
        Self {
            cube: cube(),
            // Indexed by `Half`: bottom as authored, top reflected.
            slab: [slab.clone(), slab.mirrored_y()],
            stairs: [stairs.facings(), stairs.mirrored_y().facings()],
            ramp: [ramp.facings(), ramp.mirrored_y().facings()],
            fence_post: fence_post(),
            fence_arms: fence_arm_north().facings(),
        }
    }

    /// Appends the faces `shape` exposes on `dir` for the given placement.
    ///
    /// Pure: the result depends only on the arguments.
    pub fn faces_into(
        &self,
        shape: Shape,
        state: BlockState,
        connections: Connections,
        dir: Direction,
        out: &mut Vec<Face>,
    ) {
        match shape {
            Shape::None => {}
            Shape::Cube => out.extend_from_slice(self.cube.get(dir)),
            Shape::Slab => out.extend_from_slice(self.slab[state.half.index()].get(dir)),
            Shape::Stairs => out.extend_from_slice(
                self.stairs[state.half.index()][state.facing.index()].get(dir),
            ),
            Shape::Ramp => out.extend_from_slice(
                self.ramp[state.half.index()][state.facing.index()].get(dir),
            ),
            Shape::Fence => {
                out.extend_from_slice(self.fence_post.get(dir));
                for side in Facing::ALL {
                    if connections.has(side) {
                        out.extend_from_slice(self.fence_arms[side.index()].get(dir));
                    }
                }
            }
        }
    }

    pub fn fence_post(&self) -> &FaceSet {
        &self.fence_post
    }

    pub fn fence_arm(&self, side: Facing) -> &FaceSet {
        &self.fence_arms[side.index()]
    }
}
