//! Wavefront OBJ export of chunk meshes.

use std::io::{self, Write};

use blockface_geom::Vec3;
use blockface_mesh_cpu::MeshBuild;

/// Streams meshes as OBJ, one `o` group per mesh.
///
/// Positions are shifted by each mesh's offset so groups land in world space.
pub struct ObjWriter<W: Write> {
    out: W,
    next_vertex: usize,
}

impl<W: Write> ObjWriter<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "# blockface mesh export")?;
        Ok(Self {
            out,
            next_vertex: 1,
        })
    }

    pub fn add(&mut self, name: &str, mesh: &MeshBuild, offset: Vec3) -> io::Result<()> {
        if mesh.is_empty() {
            return Ok(());
        }
        writeln!(self.out, "o {name}")?;
        for p in mesh.positions().chunks_exact(3) {
            writeln!(
                self.out,
                "v {} {} {}",
                p[0] + offset.x,
                p[1] + offset.y,
                p[2] + offset.z
            )?;
        }
        for t in mesh.uvs().chunks_exact(2) {
            writeln!(self.out, "vt {} {}", t[0], t[1])?;
        }
        for n in mesh.normals().chunks_exact(3) {
            writeln!(self.out, "vn {} {} {}", n[0], n[1], n[2])?;
        }
        let base = self.next_vertex;
        for tri in mesh.indices().chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| base + i as usize);
            writeln!(self.out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
        }
        self.next_vertex += mesh.vertex_count();
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
