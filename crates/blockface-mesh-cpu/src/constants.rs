//! Shared constants for blockface-mesh-cpu.

/// Distance culled faces are pushed along their normal in the debug mesh.
pub const DEBUG_FACE_OFFSET: f32 = 0.01;

// Rough per-chunk face count used to size scratch buffers up front
pub(crate) const RESERVE_FACES: usize = 256;

// Faces a single cell can contribute per direction (fence post plus arms)
pub(crate) const SCRATCH_FACES: usize = 8;
