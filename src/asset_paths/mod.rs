//! Helpers for normalising asset references and shaping fingerprinted output paths.
//!
//! All helpers operate on forward-slash separated strings as written in stylesheet source,
//! never on native paths, so the produced URLs are identical on every platform.

mod filters;
mod normalize;
mod url;

pub use filters::should_ignore_asset_reference;
pub use normalize::{fingerprinted_path, join_alias, strip_parent_prefix};
pub use url::{DEFAULT_URL_PREFIX, url_literal};
