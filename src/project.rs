//! Filesystem layout of a project whose stylesheets reference fingerprinted assets.

use std::path::PathBuf;

/// Absolute locations derived from a [`crate::config::ProjectConfig`] and a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
  /// Root directory asset references are relative to.
  pub assets_root: PathBuf,
  /// Location of the precomputed fingerprint manifest.
  pub manifest_path: PathBuf,
}
