//! Stylesheet functions exposed to the host evaluator.
//!
//! The host passes arguments as string nodes and expects literal nodes back. That calling
//! convention stops at [`AssetFunctions`]; everything behind it speaks plain strings.

mod assets;
mod nodes;
mod registry;

pub use assets::{ASSETS_FUNCTION, AssetFunctions, IMAGES_FUNCTION, register};
pub use nodes::{LiteralNode, StringNode};
pub use registry::{FunctionRegistry, StylesheetFunction};
