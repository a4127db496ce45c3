//! Scene files: block placements applied to a chunk store.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use blockface_blocks::{BlockCatalog, BlockState, Facing, Half};
use blockface_chunk::ChunkStore;
use serde::Deserialize;

pub const DEMO_SCENE_TOML: &str = include_str!("../assets/demo_scene.toml");

// Refuse fills larger than this many cells
const MAX_FILL_CELLS: i64 = 1 << 24;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SceneConfig {
    #[serde(default)]
    pub fill: Vec<FillDef>,
    #[serde(default)]
    pub place: Vec<PlaceDef>,
}

/// Inclusive box of identical blocks.
#[derive(Deserialize, Debug, Clone)]
pub struct FillDef {
    pub block: String,
    pub from: [i32; 3],
    pub to: [i32; 3],
    #[serde(default)]
    pub half: Half,
    #[serde(default)]
    pub facing: Facing,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlaceDef {
    pub block: String,
    pub at: [i32; 3],
    #[serde(default)]
    pub half: Half,
    #[serde(default)]
    pub facing: Facing,
}

impl SceneConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parse scene toml")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("read scene {}", path.display()))?;
        Self::from_toml_str(&s).with_context(|| format!("in {}", path.display()))
    }

    /// Fills first, then single placements, each in file order.
    pub fn apply(&self, store: &mut ChunkStore, catalog: &BlockCatalog) -> Result<usize> {
        let mut written = 0usize;
        for f in &self.fill {
            let b = catalog
                .make_block(&f.block, BlockState::new(f.half, f.facing))
                .ok_or_else(|| anyhow!("fill: unknown block `{}`", f.block))?;
            let lo = [0, 1, 2].map(|i| f.from[i].min(f.to[i]));
            let hi = [0, 1, 2].map(|i| f.from[i].max(f.to[i]));
            let cells = (0..3)
                .map(|i| i64::from(hi[i]) - i64::from(lo[i]) + 1)
                .fold(1i64, i64::saturating_mul);
            if cells > MAX_FILL_CELLS {
                return Err(anyhow!(
                    "fill of `{}` covers {} cells (limit {})",
                    f.block,
                    cells,
                    MAX_FILL_CELLS
                ));
            }
            for y in lo[1]..=hi[1] {
                for z in lo[2]..=hi[2] {
                    for x in lo[0]..=hi[0] {
                        store.set_block(x, y, z, b);
                        written += 1;
                    }
                }
            }
        }
        for p in &self.place {
            let b = catalog
                .make_block(&p.block, BlockState::new(p.half, p.facing))
                .ok_or_else(|| anyhow!("place: unknown block `{}`", p.block))?;
            let [x, y, z] = p.at;
            store.set_block(x, y, z, b);
            written += 1;
        }
        Ok(written)
    }
}
