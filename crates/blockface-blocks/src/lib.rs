//! Block types, face geometry, and the shape catalog.
#![forbid(unsafe_code)]

pub mod config;
pub mod direction;
pub mod face;
pub mod registry;
pub mod shapes;
pub mod types;

pub use direction::{Axis, Direction};
pub use face::{Corner, EPSILON, Face, Visibility};
pub use registry::{BlockCatalog, BlockType};
pub use types::{Block, BlockId, BlockState, Connections, Facing, Half, Shape};
