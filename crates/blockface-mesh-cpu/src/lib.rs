//! CPU meshing crate: per-face occlusion culling and chunk mesh assembly.
#![forbid(unsafe_code)]

mod build;
mod chunk;
pub mod constants;
mod debug;
mod mesh_build;
pub mod occlusion;
mod par;

pub use build::{build_chunk_mesh, connections_at};
pub use chunk::ChunkMeshCPU;
pub use debug::{CullSink, CulledFace, CulledFaces};
pub use mesh_build::MeshBuild;
pub use occlusion::{Polygon2, is_occluded, is_occluded_with, is_visible};
pub use par::{ChunkBuild, build_chunks_par, rebuild_dirty};
