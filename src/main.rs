use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use blockface_blocks::BlockCatalog;
use blockface_chunk::{ChunkStore, DEFAULT_CHUNK_SIZE};
use blockface_mesh_cpu::{ChunkBuild, CulledFaces, build_chunk_mesh, build_chunks_par};
use clap::Parser;
use env_logger::Env;

mod obj;
mod scene;

use obj::ObjWriter;
use scene::{DEMO_SCENE_TOML, SceneConfig};

#[derive(Parser, Debug)]
#[command(name = "blockface")]
#[command(about = "Mesh a block scene with per-face occlusion culling and export it as OBJ")]
struct Cli {
    /// Block catalog TOML; the built-in catalog is used when omitted
    #[arg(long)]
    blocks: Option<PathBuf>,

    /// Scene TOML; a small demo yard is used when omitted
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Chunk edge length in cells
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Write the visible geometry here
    #[arg(long)]
    obj: Option<PathBuf>,

    /// Write the culled faces, nudged off their surfaces, here
    #[arg(long)]
    culled_obj: Option<PathBuf>,

    /// Mesh chunks on the rayon pool
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if cli.chunk_size == 0 {
        return Err(anyhow!("--chunk-size must be at least 1"));
    }

    let catalog = match &cli.blocks {
        Some(p) => BlockCatalog::load_from_path(p)
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("load block catalog {}", p.display()))?,
        None => BlockCatalog::builtin()
            .map_err(|e| anyhow!("{e}"))
            .context("load built-in block catalog")?,
    };

    let scene = match &cli.scene {
        Some(p) => SceneConfig::load(p)?,
        None => SceneConfig::from_toml_str(DEMO_SCENE_TOML).context("built-in demo scene")?,
    };
    let mut store = ChunkStore::new(cli.chunk_size);
    let written = scene.apply(&mut store, &catalog)?;
    log::info!(
        "scene: {} write(s) over {} chunk(s) of {}^3",
        written,
        store.len(),
        store.dim()
    );

    let collect_culled = cli.culled_obj.is_some();
    let coords = store.take_dirty();
    let t0 = Instant::now();
    let builds = if cli.parallel {
        build_chunks_par(&store, &coords, &catalog, collect_culled)
    } else {
        coords
            .iter()
            .map(|&coord| {
                let mut culled = CulledFaces::new();
                let mesh = store.chunk(coord).and_then(|chunk| {
                    if collect_culled {
                        build_chunk_mesh(chunk, &catalog, &store, &mut culled)
                    } else {
                        build_chunk_mesh(chunk, &catalog, &store, &mut ())
                    }
                });
                ChunkBuild {
                    coord,
                    mesh,
                    culled,
                }
            })
            .collect()
    };
    report(&builds, t0.elapsed().as_millis());

    if let Some(path) = &cli.obj {
        write_visible(path, &builds)?;
    }
    if let Some(path) = &cli.culled_obj {
        write_culled(path, &builds)?;
    }
    Ok(())
}

fn report(builds: &[ChunkBuild], ms: u128) {
    let meshes = builds.iter().filter_map(|b| b.mesh.as_ref());
    let (mut emitted, mut culled, mut verts, mut tris) = (0usize, 0usize, 0usize, 0usize);
    for m in meshes {
        emitted += m.faces_emitted;
        culled += m.faces_culled;
        verts += m.mesh.vertex_count();
        tris += m.mesh.triangle_count();
    }
    let total = emitted + culled;
    let pct = if total == 0 {
        0.0
    } else {
        100.0 * culled as f64 / total as f64
    };
    log::info!(
        "meshed {} chunk(s) in {} ms: {} face(s) emitted, {} culled ({:.1}%), {} vertices, {} triangles",
        builds.len(),
        ms,
        emitted,
        culled,
        pct,
        verts,
        tris
    );
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    Ok(BufWriter::new(f))
}

fn write_visible(path: &Path, builds: &[ChunkBuild]) -> Result<()> {
    let mut w = ObjWriter::new(create(path)?)?;
    for b in builds {
        if let Some(m) = &b.mesh {
            let name = format!("chunk_{}_{}_{}", b.coord.cx, b.coord.cy, b.coord.cz);
            w.add(&name, &m.mesh, m.origin)?;
        }
    }
    w.finish()?;
    log::info!("wrote {}", path.display());
    Ok(())
}

fn write_culled(path: &Path, builds: &[ChunkBuild]) -> Result<()> {
    let mut all = CulledFaces::new();
    for b in builds {
        all.extend(b.culled.clone());
    }
    let mut w = ObjWriter::new(create(path)?)?;
    // Culled faces carry world cells already
    w.add("culled", &all.to_debug_mesh(), blockface_geom::Vec3::ZERO)?;
    w.finish()?;
    log::info!("wrote {} culled face(s) to {}", all.len(), path.display());
    Ok(())
}
