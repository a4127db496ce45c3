use std::time::Instant;

use blockface_blocks::{Block, BlockCatalog, Connections, Direction, Face, Facing, Shape};
use blockface_chunk::{BlockSource, Chunk};
use blockface_geom::Vec3;

use crate::chunk::ChunkMeshCPU;
use crate::constants::{RESERVE_FACES, SCRATCH_FACES};
use crate::debug::CullSink;
use crate::mesh_build::MeshBuild;
use crate::occlusion::{Polygon2, is_occluded_with};

/// Meshes one chunk.
///
/// Cells on the chunk border look past it through `neighbors`; anything the
/// resolver does not know is open space. Every face hidden by its neighbour
/// goes to `culled`. Returns `None` when no face survives.
pub fn build_chunk_mesh(
    chunk: &Chunk,
    catalog: &BlockCatalog,
    neighbors: &impl BlockSource,
    culled: &mut impl CullSink,
) -> Option<ChunkMeshCPU> {
    let t0 = Instant::now();
    let s = chunk.size();
    let [ox, oy, oz] = chunk.origin();
    let mut mesh = MeshBuild::default();
    mesh.reserve_faces(RESERVE_FACES);
    let mut candidates: Vec<Face> = Vec::with_capacity(SCRATCH_FACES);
    let mut opposing: Vec<Face> = Vec::with_capacity(SCRATCH_FACES);
    let mut projected: Vec<Polygon2> = Vec::with_capacity(SCRATCH_FACES);
    let mut faces_emitted = 0usize;
    let mut faces_culled = 0usize;
    let mut unknown = 0usize;

    for y in 0..s {
        for z in 0..s {
            for x in 0..s {
                let here = chunk.get_local(x, y, z);
                if here.is_air() {
                    continue;
                }
                let Some(ty) = catalog.get(here.id) else {
                    unknown += 1;
                    continue;
                };
                let shape = ty.shape;
                if shape == Shape::None {
                    continue;
                }
                let (xi, yi, zi) = (x as i32, y as i32, z as i32);
                let conn = connections_at(chunk, catalog, neighbors, shape, xi, yi, zi);
                let at = Vec3::new(x as f32, y as f32, z as f32);
                for dir in Direction::ALL {
                    candidates.clear();
                    catalog.faces_into(here, dir, conn, &mut candidates);
                    if candidates.is_empty() {
                        continue;
                    }
                    let (dx, dy, dz) = dir.delta();
                    let (nx, ny, nz) = (xi + dx, yi + dy, zi + dz);
                    let back = dir.opposite();
                    opposing.clear();
                    let mut full_cover = false;
                    if let Some(nb) = chunk.get(nx, ny, nz, neighbors).filter(|b| !b.is_air()) {
                        full_cover = catalog.covers_side(nb, back);
                        if !full_cover {
                            let nshape = catalog.shape_of(nb);
                            let nconn = connections_at(chunk, catalog, neighbors, nshape, nx, ny, nz);
                            catalog.faces_into(nb, back, nconn, &mut opposing);
                        }
                    }
                    for face in &candidates {
                        // A full opposing side hides exactly what the classifier would
                        let hidden = if full_cover {
                            face.lies_on(dir) && !face.is_always_render()
                        } else {
                            is_occluded_with(face, &opposing, dir, &mut projected)
                        };
                        if hidden {
                            culled.face_culled(face, [ox + xi, oy + yi, oz + zi], dir);
                            faces_culled += 1;
                        } else {
                            mesh.add_face(face, at, dir.normal());
                            faces_emitted += 1;
                        }
                    }
                }
            }
        }
    }

    if unknown > 0 {
        log::warn!(
            "chunk ({}, {}, {}): skipped {} cell(s) with unknown block ids",
            chunk.coord.cx,
            chunk.coord.cy,
            chunk.coord.cz,
            unknown
        );
    }
    log::debug!(
        target: "perf",
        "ms={} mesh_chunk coord=({}, {}, {}) s={} emitted={} culled={}",
        t0.elapsed().as_millis(),
        chunk.coord.cx,
        chunk.coord.cy,
        chunk.coord.cz,
        s,
        faces_emitted,
        faces_culled
    );

    if mesh.is_empty() {
        return None;
    }
    Some(ChunkMeshCPU {
        coord: chunk.coord,
        origin: Vec3::new(ox as f32, oy as f32, oz as f32),
        bbox: mesh.bounds(),
        mesh,
        faces_emitted,
        faces_culled,
    })
}

/// Horizontal neighbours a connection-aware block links to; empty for other shapes.
pub fn connections_at(
    chunk: &Chunk,
    catalog: &BlockCatalog,
    neighbors: &impl BlockSource,
    shape: Shape,
    x: i32,
    y: i32,
    z: i32,
) -> Connections {
    if !shape.needs_connections() {
        return Connections::NONE;
    }
    let mut conn = Connections::NONE;
    for side in Facing::ALL {
        let (dx, _, dz) = side.direction().delta();
        let nb: Option<Block> = chunk.get(x + dx, y, z + dz, neighbors);
        if nb.is_some_and(|b| catalog.connects_to(shape, b)) {
            conn = conn.with(side);
        }
    }
    conn
}
