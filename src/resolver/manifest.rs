//! Manifest resolver: looks fingerprints up in a mapping written by an earlier build step.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::AssetResolver;
use crate::error::{Error, Result};

/// Immutable mapping from original asset paths to their fingerprinted paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerprintManifest {
  entries: BTreeMap<String, String>,
}

impl FingerprintManifest {
  /// Load a manifest from a flat JSON object of string keys to string values.
  pub fn load(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path).map_err(|source| Error::ManifestRead {
      path: path.to_path_buf(),
      source,
    })?;
    let entries: BTreeMap<String, String> =
      serde_json::from_str(&content).map_err(|source| Error::ManifestParse {
        path: path.to_path_buf(),
        source,
      })?;
    Ok(Self { entries })
  }

  /// Fingerprinted path recorded for `path`, if any.
  pub fn get(&self, path: &str) -> Option<&str> {
    self.entries.get(path).map(String::as_str)
  }

  pub(crate) fn len(&self) -> usize {
    self.entries.len()
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FingerprintManifest {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      entries: iter
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect(),
    }
  }
}

/// Resolver answering from an injected [`FingerprintManifest`].
#[derive(Debug, Clone)]
pub struct ManifestResolver {
  manifest: FingerprintManifest,
}

impl ManifestResolver {
  /// Create a resolver over an already loaded manifest.
  pub fn new(manifest: FingerprintManifest) -> Self {
    Self { manifest }
  }
}

impl AssetResolver for ManifestResolver {
  fn resolve(&self, path: &str) -> Result<String> {
    match self.manifest.get(path) {
      Some(fingerprinted) => Ok(fingerprinted.to_string()),
      None => {
        debug!(asset = path, "no manifest entry, leaving reference untouched");
        Ok(path.to_string())
      }
    }
  }
}
