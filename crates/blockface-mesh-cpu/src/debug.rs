//! Diagnostics for faces the classifier hid.

use blockface_blocks::{Direction, Face};
use blockface_geom::Vec3;

use crate::constants::DEBUG_FACE_OFFSET;
use crate::mesh_build::MeshBuild;

/// Receives every face the assembler drops. `cell` is in world coordinates.
pub trait CullSink {
    fn face_culled(&mut self, face: &Face, cell: [i32; 3], dir: Direction);
}

/// Discards culled faces.
impl CullSink for () {
    #[inline]
    fn face_culled(&mut self, _face: &Face, _cell: [i32; 3], _dir: Direction) {}
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CulledFace {
    pub face: Face,
    pub cell: [i32; 3],
    pub direction: Direction,
}

#[derive(Clone, Debug, Default)]
pub struct CulledFaces {
    faces: Vec<CulledFace>,
}

impl CulledFaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CulledFace> {
        self.faces.iter()
    }

    pub fn clear(&mut self) {
        self.faces.clear();
    }

    pub fn extend(&mut self, other: CulledFaces) {
        self.faces.extend(other.faces);
    }

    /// World-space mesh of every culled face, nudged outward so it does not
    /// z-fight with the geometry that hid it.
    pub fn to_debug_mesh(&self) -> MeshBuild {
        let mut mb = MeshBuild::default();
        mb.reserve_faces(self.faces.len());
        for cf in &self.faces {
            let n = cf.direction.normal();
            let [x, y, z] = cf.cell;
            let at = Vec3::new(x as f32, y as f32, z as f32) + n * DEBUG_FACE_OFFSET;
            mb.add_face(&cf.face, at, n);
        }
        mb
    }
}

impl CullSink for CulledFaces {
    fn face_culled(&mut self, face: &Face, cell: [i32; 3], dir: Direction) {
        self.faces.push(CulledFace {
            face: *face,
            cell,
            direction: dir,
        });
    }
}
