use blockface_blocks::BlockCatalog;
use blockface_chunk::{ChunkCoord, ChunkStore};
use rayon::prelude::*;

use crate::build::build_chunk_mesh;
use crate::chunk::ChunkMeshCPU;
use crate::debug::CulledFaces;

/// Result of rebuilding one chunk. `mesh` is `None` when the chunk is missing
/// or nothing in it is visible, so callers can drop a stale mesh.
#[derive(Clone, Debug)]
pub struct ChunkBuild {
    pub coord: ChunkCoord,
    pub mesh: Option<ChunkMeshCPU>,
    pub culled: CulledFaces,
}

/// Meshes `coords` of `store` in parallel, reading neighbours from the store.
///
/// Output is sorted by coordinate regardless of scheduling. Culled faces are
/// only collected when `collect_culled` is set.
pub fn build_chunks_par(
    store: &ChunkStore,
    coords: &[ChunkCoord],
    catalog: &BlockCatalog,
    collect_culled: bool,
) -> Vec<ChunkBuild> {
    let mut out: Vec<ChunkBuild> = coords
        .par_iter()
        .map(|&coord| {
            let mut culled = CulledFaces::new();
            let mesh = store.chunk(coord).and_then(|chunk| {
                if collect_culled {
                    build_chunk_mesh(chunk, catalog, store, &mut culled)
                } else {
                    build_chunk_mesh(chunk, catalog, store, &mut ())
                }
            });
            ChunkBuild {
                coord,
                mesh,
                culled,
            }
        })
        .collect();
    out.sort_unstable_by_key(|b| b.coord);
    log::info!(
        "rebuilt {} chunk(s), {} with geometry",
        out.len(),
        out.iter().filter(|b| b.mesh.is_some()).count()
    );
    out
}

/// Rebuilds every chunk the store has marked dirty.
pub fn rebuild_dirty(
    store: &mut ChunkStore,
    catalog: &BlockCatalog,
    collect_culled: bool,
) -> Vec<ChunkBuild> {
    let dirty = store.take_dirty();
    build_chunks_par(store, &dirty, catalog, collect_culled)
}
