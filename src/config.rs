//! Project configuration loader describing where assets and the manifest live.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::asset_paths::DEFAULT_URL_PREFIX;
use crate::error::{Error, Result};
use crate::project::ProjectLayout;
use crate::resolver::ResolverStrategy;

/// File name searched for in the project root by [`ProjectConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "stylus-assets.json";

/// Discoverable project configuration for asset fingerprinting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// Directory under the project root holding the static assets.
  pub assets_dir: String,
  /// Manifest file produced by the asset build, relative to the project root.
  pub manifest_json: String,
  /// Which resolver turns asset references into fingerprinted paths.
  pub strategy: ResolverStrategy,
  /// Prefix written in front of every path inside `url("...")`.
  pub url_prefix: String,
  /// Directory prepended by the `images()` helper.
  pub images_alias: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      assets_dir: "assets".into(),
      manifest_json: "assets_map.json".into(),
      strategy: ResolverStrategy::Hash,
      url_prefix: DEFAULT_URL_PREFIX.into(),
      images_alias: "images".into(),
    }
  }
}

impl ProjectConfig {
  /// Load `stylus-assets.json` from the project root, or use defaults when it is absent.
  ///
  /// A configuration file that exists but cannot be read or parsed is still an error so a
  /// typo never silently switches strategies.
  pub fn discover(project_root: &Path) -> Result<Self> {
    let candidate = project_root.join(DEFAULT_CONFIG_FILE);
    match fs::read_to_string(&candidate) {
      Ok(content) => Self::parse(&candidate, &content),
      Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
      Err(err) => Err(Error::Config {
        path: candidate,
        message: err.to_string(),
      }),
    }
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path).map_err(|err| Error::Config {
      path: path.to_path_buf(),
      message: err.to_string(),
    })?;
    Self::parse(path, &content)
  }

  fn parse(path: &Path, content: &str) -> Result<Self> {
    serde_json::from_str(content).map_err(|err| Error::Config {
      path: path.to_path_buf(),
      message: err.to_string(),
    })
  }

  /// Resolve the configured directories against a project root.
  pub fn to_layout(&self, project_root: &Path) -> ProjectLayout {
    ProjectLayout {
      assets_root: project_root.join(&self.assets_dir),
      manifest_path: project_root.join(&self.manifest_json),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn falls_back_to_defaults_without_config_file() {
    let dir = tempdir().unwrap();
    let config = ProjectConfig::discover(dir.path()).unwrap();
    assert_eq!(config, ProjectConfig::default());
    assert_eq!(config.strategy, ResolverStrategy::Hash);
    assert_eq!(config.url_prefix, "../");
  }

  #[test]
  fn reads_partial_config_file() {
    let dir = tempdir().unwrap();
    fs::write(
      dir.path().join(DEFAULT_CONFIG_FILE),
      r#"{"strategy":"manifest","manifest_json":"build/map.json"}"#,
    )
    .unwrap();

    let config = ProjectConfig::discover(dir.path()).unwrap();
    assert_eq!(config.strategy, ResolverStrategy::Manifest);
    assert_eq!(config.manifest_json, "build/map.json");
    assert_eq!(config.assets_dir, "assets");

    let layout = config.to_layout(dir.path());
    assert_eq!(layout.manifest_path, dir.path().join("build/map.json"));
    assert_eq!(layout.assets_root, dir.path().join("assets"));
  }

  #[test]
  fn rejects_malformed_config_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), r#"{"strategy":"cdn"}"#).unwrap();

    let err = ProjectConfig::discover(dir.path()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
  }

  #[test]
  fn from_path_requires_the_file() {
    let dir = tempdir().unwrap();
    let err = ProjectConfig::from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
  }
}
