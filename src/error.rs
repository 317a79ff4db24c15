//! Error type shared by the resolvers, the function registry and the rewriter.

use std::path::PathBuf;

/// Errors raised while resolving asset references.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The asset could not be inspected or read from disk.
  #[error("failed to read asset {path}: {source}")]
  AssetIo {
    /// Absolute path that was being fingerprinted.
    path: PathBuf,
    /// Underlying I/O failure.
    source: std::io::Error,
  },
  /// The fingerprint manifest could not be read.
  #[error("failed to read fingerprint manifest {path}: {source}")]
  ManifestRead {
    /// Manifest location.
    path: PathBuf,
    /// Underlying I/O failure.
    source: std::io::Error,
  },
  /// The fingerprint manifest is not a flat JSON object of strings.
  #[error("failed to parse fingerprint manifest {path}: {source}")]
  ManifestParse {
    /// Manifest location.
    path: PathBuf,
    /// Underlying parse failure.
    source: serde_json::Error,
  },
  /// The project configuration file could not be loaded.
  #[error("invalid configuration {path}: {message}")]
  Config {
    /// Configuration file location.
    path: PathBuf,
    /// Human readable reason.
    message: String,
  },
  /// A stylesheet called a function that was never registered.
  #[error("unknown stylesheet function `{0}`")]
  UnknownFunction(String),
  /// A registered function failed while rewriting a stylesheet.
  #[error("{name}() on line {line} failed: {source}")]
  Call {
    /// 1-based line of the call in the stylesheet source.
    line: usize,
    /// Function name as written in the stylesheet.
    name: String,
    /// Failure raised by the function.
    #[source]
    source: Box<Error>,
  },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
