//! Content-hash resolver: fingerprints an asset by hashing its bytes on every call.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use tracing::{debug, trace};

use super::AssetResolver;
use crate::asset_paths::{fingerprinted_path, strip_parent_prefix};
use crate::error::{Error, Result};

/// Resolver hashing the referenced file below a fixed assets root.
#[derive(Debug, Clone)]
pub struct ContentHashResolver {
  assets_root: PathBuf,
}

impl ContentHashResolver {
  /// Create a resolver for references relative to `assets_root`.
  pub fn new(assets_root: impl Into<PathBuf>) -> Self {
    Self {
      assets_root: assets_root.into(),
    }
  }

  fn locate(&self, relative: &str) -> PathBuf {
    self.assets_root.join(relative.trim_start_matches('/'))
  }
}

impl AssetResolver for ContentHashResolver {
  fn resolve(&self, path: &str) -> Result<String> {
    let relative = strip_parent_prefix(path);
    let target = self.locate(relative);

    // A missing asset is fatal: emitting an unfingerprinted URL would break silently.
    let metadata = fs::metadata(&target).map_err(|source| Error::AssetIo {
      path: target.clone(),
      source,
    })?;

    if !metadata.is_file() {
      trace!(asset = relative, "not a regular file, leaving reference untouched");
      return Ok(relative.to_string());
    }

    let hash = content_hash(&target)?;
    let fingerprinted = fingerprinted_path(relative, &hash);
    debug!(asset = relative, %fingerprinted, "fingerprinted asset");
    Ok(fingerprinted)
  }
}

/// Hex-encoded MD5 digest of a file's raw bytes.
///
/// MD5 matches the `fp<md5>-<name>` files written by the image build, so the URL names a
/// file that actually exists in the public tree.
pub fn content_hash(path: &Path) -> Result<String> {
  let io_error = |source| Error::AssetIo {
    path: path.to_path_buf(),
    source,
  };

  let mut file = File::open(path).map_err(io_error)?;
  let mut hasher = Md5::new();
  io::copy(&mut file, &mut hasher).map_err(io_error)?;
  Ok(hex::encode(hasher.finalize()))
}
