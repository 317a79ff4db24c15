#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod config;
pub mod error;
pub mod functions;
pub mod project;
pub mod resolver;
pub mod rewrite;

pub use config::ProjectConfig;
pub use error::{Error, Result};
pub use functions::{AssetFunctions, FunctionRegistry, LiteralNode, StringNode, register};
pub use project::ProjectLayout;
pub use resolver::{
  AssetResolver, ContentHashResolver, FingerprintManifest, ManifestResolver, ResolverStrategy,
  build_resolver,
};
pub use rewrite::{RewrittenStylesheet, rewrite_stylesheet};
