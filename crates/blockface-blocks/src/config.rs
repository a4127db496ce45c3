use serde::Deserialize;

// Top-level blocks config file
#[derive(Deserialize, Debug, Clone)]
pub struct BlocksConfig {
    pub blocks: Vec<BlockDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BlockDef {
    pub name: String,
    // Defaults to the next free slot in declaration order
    #[serde(default)]
    pub id: Option<u16>,
    // "none" | "cube" | "slab" | "stairs" | "fence" | "ramp"; defaults to "cube"
    #[serde(default)]
    pub shape: Option<String>,
    // Defaults per shape: only cubes are opaque
    #[serde(default)]
    pub opaque: Option<bool>,
}

/// Catalog shipped with the crate.
pub const BUILTIN_BLOCKS_TOML: &str = include_str!("../assets/blocks.toml");
