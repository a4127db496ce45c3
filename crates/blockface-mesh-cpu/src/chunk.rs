use blockface_chunk::ChunkCoord;
use blockface_geom::{Aabb, Vec3};

use crate::mesh_build::MeshBuild;

/// Mesh of one chunk. Positions are chunk-local with cell `(x,y,z)` centred at
/// `(x,y,z)`; add `origin` for world space.
#[derive(Clone, Debug)]
pub struct ChunkMeshCPU {
    pub coord: ChunkCoord,
    pub origin: Vec3,
    pub bbox: Aabb,
    pub mesh: MeshBuild,
    pub faces_emitted: usize,
    pub faces_culled: usize,
}

impl ChunkMeshCPU {
    /// Bounds in world space.
    pub fn world_bbox(&self) -> Aabb {
        self.bbox.translated(self.origin)
    }
}
