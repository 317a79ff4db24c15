//! Asset resolvers turning a stylesheet asset reference into its fingerprinted path.
//!
//! Two strategies implement the same [`AssetResolver`] contract: [`ContentHashResolver`]
//! hashes the asset on every call, [`ManifestResolver`] looks the path up in a manifest
//! produced by an earlier build step. Exactly one is chosen at startup through
//! [`ResolverStrategy`].

mod hashing;
mod manifest;

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::config::ProjectConfig;
use crate::error::Result;

pub use hashing::{ContentHashResolver, content_hash};
pub use manifest::{FingerprintManifest, ManifestResolver};

/// Resolve an asset reference to the path that should appear in the compiled stylesheet.
///
/// The returned string is a plain path; wrapping it in `url(...)` is the caller's job.
pub trait AssetResolver: Send + Sync {
  /// Produce the fingerprinted path for `path`, or `path` itself when no fingerprint applies.
  fn resolve(&self, path: &str) -> Result<String>;
}

/// Strategy used to fingerprint asset references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResolverStrategy {
  /// Hash asset contents on demand.
  #[default]
  Hash,
  /// Look fingerprints up in a precomputed manifest.
  Manifest,
}

/// Construct the resolver selected by the configuration.
///
/// The manifest strategy loads its manifest here, once; a missing or malformed manifest
/// fails construction instead of surfacing on the first lookup.
pub fn build_resolver(config: &ProjectConfig, project_root: &Path) -> Result<Arc<dyn AssetResolver>> {
  let layout = config.to_layout(project_root);
  match config.strategy {
    ResolverStrategy::Hash => {
      info!(root = %layout.assets_root.display(), "hashing assets on demand");
      Ok(Arc::new(ContentHashResolver::new(layout.assets_root)))
    }
    ResolverStrategy::Manifest => {
      let manifest = FingerprintManifest::load(&layout.manifest_path)?;
      info!(
        manifest = %layout.manifest_path.display(),
        entries = manifest.len(),
        "loaded fingerprint manifest"
      );
      Ok(Arc::new(ManifestResolver::new(manifest)))
    }
  }
}
