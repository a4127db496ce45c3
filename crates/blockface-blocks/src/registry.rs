use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::{BUILTIN_BLOCKS_TOML, BlocksConfig};
use super::direction::Direction;
use super::face::Face;
use super::shapes::ShapeTemplates;
use super::types::{Block, BlockId, BlockState, Connections, Facing, Half, Shape};

#[derive(Clone, Debug)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub shape: Shape,
    /// Neighbours may treat this block as able to hide adjacent geometry.
    pub opaque: bool,
    // Full-side masks per [half][facing] (6 bits in Direction order); zero for non-opaque types
    pub full_sides: [[u8; 4]; 2],
}

impl BlockType {
    fn placeholder(id: BlockId) -> Self {
        BlockType {
            id,
            name: String::new(),
            shape: Shape::None,
            opaque: false,
            full_sides: [[0; 4]; 2],
        }
    }

    /// True when this type, placed with `state`, is opaque and fully covers the
    /// `dir` side of its cell.
    #[inline]
    pub fn covers_side(&self, state: BlockState, dir: Direction) -> bool {
        let mask = self.full_sides[state.half.index()][state.facing.index()];
        (mask >> dir.index()) & 1 == 1
    }
}

/// Block types plus the face templates they expand to.
///
/// Built once at startup and passed by reference to whatever meshes chunks.
#[derive(Clone, Debug)]
pub struct BlockCatalog {
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
    templates: ShapeTemplates,
}

impl BlockCatalog {
    /// Catalog from the TOML shipped with this crate.
    pub fn builtin() -> Result<Self, Box<dyn Error>> {
        Self::from_toml_str(BUILTIN_BLOCKS_TOML)
    }

    pub fn load_from_path(blocks_path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let blocks_toml = fs::read_to_string(blocks_path)?;
        Self::from_toml_str(&blocks_toml)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: BlocksConfig) -> Result<Self, Box<dyn Error>> {
        let mut cat = BlockCatalog {
            blocks: Vec::new(),
            by_name: HashMap::new(),
            templates: ShapeTemplates::new(),
        };
        for def in cfg.blocks.into_iter() {
            let id = def.id.unwrap_or(cat.blocks.len() as u16);
            let shape = match def.shape.as_deref() {
                None => Shape::Cube,
                Some(key) => Shape::from_key(key)
                    .ok_or_else(|| format!("block `{}`: unknown shape `{}`", def.name, key))?,
            };
            if id == Block::AIR.id && shape != Shape::None {
                return Err(format!("block `{}`: id 0 is reserved for air", def.name).into());
            }
            if cat.by_name.contains_key(&def.name) {
                return Err(format!("duplicate block name `{}`", def.name).into());
            }
            if cat.get(id).is_some() {
                return Err(format!("block `{}`: id {} already taken", def.name, id).into());
            }
            let opaque = def.opaque.unwrap_or(shape.default_opaque());
            let full_sides = if opaque {
                cat.full_side_mask(shape)
            } else {
                [[0; 4]; 2]
            };
            let ty = BlockType {
                id,
                name: def.name,
                shape,
                opaque,
                full_sides,
            };
            if cat.blocks.len() <= id as usize {
                let start = cat.blocks.len();
                cat.blocks
                    .extend((start..=id as usize).map(|i| BlockType::placeholder(i as BlockId)));
            }
            cat.by_name.insert(ty.name.clone(), id);
            cat.blocks[id as usize] = ty;
        }
        log::info!(
            "block catalog ready: {} type(s), {} slot(s)",
            cat.by_name.len(),
            cat.blocks.len()
        );
        Ok(cat)
    }

    // Sides whose geometry spans the whole cell boundary, for every placement.
    // Connections are ignored; only fences use them and their arms never span a side.
    fn full_side_mask(&self, shape: Shape) -> [[u8; 4]; 2] {
        let mut scratch = Vec::new();
        let mut masks = [[0u8; 4]; 2];
        for half in [Half::Bottom, Half::Top] {
            for facing in Facing::ALL {
                let state = BlockState::new(half, facing);
                let mask = &mut masks[half.index()][facing.index()];
                for dir in Direction::ALL {
                    scratch.clear();
                    self.templates
                        .faces_into(shape, state, Connections::NONE, dir, &mut scratch);
                    if scratch.iter().any(|f| f.covers_side(dir)) {
                        *mask |= 1 << dir.index();
                    }
                }
            }
        }
        masks
    }

    /// Type for `id`; `None` for ids outside the catalog and unnamed gaps.
    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize).filter(|t| !t.name.is_empty())
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    pub fn make_block(&self, name: &str, state: BlockState) -> Option<Block> {
        let id = self.id_by_name(name)?;
        Some(Block::with_state(id, state))
    }

    #[inline]
    pub fn shape_of(&self, b: Block) -> Shape {
        self.get(b.id).map_or(Shape::None, |t| t.shape)
    }

    #[inline]
    pub fn is_opaque(&self, b: Block) -> bool {
        self.get(b.id).is_some_and(|t| t.opaque)
    }

    /// Whether `b`, as placed, fully hides the `dir` side of its cell.
    #[inline]
    pub fn covers_side(&self, b: Block, dir: Direction) -> bool {
        self.get(b.id).is_some_and(|t| t.covers_side(b.state, dir))
    }

    /// Whether a connection-aware block links toward `neighbor`: same shape or opaque.
    #[inline]
    pub fn connects_to(&self, here: Shape, neighbor: Block) -> bool {
        self.get(neighbor.id)
            .is_some_and(|t| t.opaque || (t.shape == here && here != Shape::None))
    }

    /// Appends the faces `block` exposes on `dir`.
    ///
    /// `connections` only matters for connection-aware shapes and must be
    /// resolved by the caller from live neighbours.
    #[inline]
    pub fn faces_into(
        &self,
        block: Block,
        dir: Direction,
        connections: Connections,
        out: &mut Vec<Face>,
    ) {
        let shape = self.shape_of(block);
        self.templates
            .faces_into(shape, block.state, connections, dir, out);
    }

    pub fn faces(&self, block: Block, dir: Direction, connections: Connections) -> Vec<Face> {
        let mut out = Vec::new();
        self.faces_into(block, dir, connections, &mut out);
        out
    }

    pub fn templates(&self) -> &ShapeTemplates {
        &self.templates
    }
}
