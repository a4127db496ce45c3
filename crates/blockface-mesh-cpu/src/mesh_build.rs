use blockface_blocks::Face;
use blockface_geom::{Aabb, Vec3};

/// Flat vertex and index buffers ready for upload.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Clears all arrays but retains capacity for reuse across rebuilds.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.uv.clear();
        self.idx.clear();
    }

    /// Pre-reserve capacity for approximately `n_faces` quads worth of data.
    #[inline]
    pub fn reserve_faces(&mut self, n_faces: usize) {
        self.pos.reserve(n_faces * 4 * 3);
        self.norm.reserve(n_faces * 4 * 3);
        self.uv.reserve(n_faces * 4 * 2);
        self.idx.reserve(n_faces * 6);
    }

    /// Appends `face` translated by `at`, with a constant normal `n`.
    ///
    /// Indices are offset by the vertices already present.
    pub fn add_face(&mut self, face: &Face, at: Vec3, n: Vec3) {
        let base = self.vertex_count() as u32;
        for c in face.corners() {
            let p = c.pos + at;
            self.pos.extend_from_slice(&[p.x, p.y, p.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
            self.uv.extend_from_slice(&[c.uv.x, c.uv.y]);
        }
        self.idx
            .extend(face.triangle_indices().iter().map(|i| base + i));
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Returns a slice of interleaved vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }

    /// Returns a slice of interleaved vertex normals (x,y,z per vertex).
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }

    pub fn uvs(&self) -> &[f32] {
        &self.uv
    }

    pub fn indices(&self) -> &[u32] {
        &self.idx
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(
            self.pos
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2])),
        )
    }
}
