use std::sync::Arc;

use tracing::trace;

use super::nodes::{LiteralNode, StringNode};
use super::registry::FunctionRegistry;
use crate::asset_paths::{DEFAULT_URL_PREFIX, join_alias, url_literal};
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::resolver::AssetResolver;

/// Name under which the asset resolver is exposed to stylesheets.
pub const ASSETS_FUNCTION: &str = "assets";
/// Name under which the image alias helper is exposed to stylesheets.
pub const IMAGES_FUNCTION: &str = "images";

/// Adapter between the evaluator's node calling convention and an [`AssetResolver`].
#[derive(Clone)]
pub struct AssetFunctions {
  resolver: Arc<dyn AssetResolver>,
  url_prefix: String,
  images_alias: String,
}

impl AssetFunctions {
  /// Wrap a resolver using the default `../` URL prefix and `images` alias.
  pub fn new(resolver: Arc<dyn AssetResolver>) -> Self {
    Self {
      resolver,
      url_prefix: DEFAULT_URL_PREFIX.to_string(),
      images_alias: "images".to_string(),
    }
  }

  /// Wrap a resolver using the URL prefix and alias from the project configuration.
  pub fn from_config(resolver: Arc<dyn AssetResolver>, config: &ProjectConfig) -> Self {
    Self::new(resolver)
      .with_url_prefix(&config.url_prefix)
      .with_images_alias(&config.images_alias)
  }

  /// Override the prefix written inside `url("...")`.
  pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.url_prefix = prefix.into();
    self
  }

  /// Override the directory prepended by [`AssetFunctions::images`].
  pub fn with_images_alias(mut self, alias: impl Into<String>) -> Self {
    self.images_alias = alias.into();
    self
  }

  /// `assets("images/a/b.jpg")` => `url("../images/a/fpXXX-b.jpg")`.
  pub fn assets(&self, file: &StringNode) -> Result<LiteralNode> {
    let resolved = self.resolver.resolve(&file.val)?;
    trace!(asset = %file.val, %resolved, "assets()");
    Ok(LiteralNode::new(url_literal(&self.url_prefix, &resolved)))
  }

  /// Shorthand for `assets()` below the images directory.
  ///
  /// `images("a/b.jpg")` => `url("../images/a/fpXXX-b.jpg")`.
  pub fn images(&self, file: &StringNode) -> Result<LiteralNode> {
    self.assets(&StringNode::new(join_alias(&self.images_alias, &file.val)))
  }
}

impl std::fmt::Debug for AssetFunctions {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AssetFunctions")
      .field("url_prefix", &self.url_prefix)
      .field("images_alias", &self.images_alias)
      .finish_non_exhaustive()
  }
}

/// Define `assets` and `images` on the registry.
pub fn register(registry: &mut FunctionRegistry, functions: AssetFunctions) {
  let images = functions.clone();
  registry.define(ASSETS_FUNCTION, move |file: &StringNode| functions.assets(file));
  registry.define(IMAGES_FUNCTION, move |file: &StringNode| images.images(file));
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::resolver::{ContentHashResolver, FingerprintManifest, ManifestResolver, content_hash};
  use std::fs;
  use tempfile::tempdir;

  fn manifest_functions() -> AssetFunctions {
    let manifest = FingerprintManifest::from_iter([
      ("images/a/b.jpg", "images/a/fp42-b.jpg"),
      ("fonts/icons.woff", "fonts/fp7-icons.woff"),
    ]);
    AssetFunctions::new(Arc::new(ManifestResolver::new(manifest)))
  }

  #[test]
  fn assets_wraps_manifest_values_as_urls() {
    let functions = manifest_functions();

    assert_eq!(
      functions.assets(&"images/a/b.jpg".into()).unwrap().text,
      "url(\"../images/a/fp42-b.jpg\")"
    );
    assert_eq!(
      functions.assets(&"images/z.png".into()).unwrap().text,
      "url(\"../images/z.png\")"
    );
  }

  #[test]
  fn images_matches_assets_under_images_dir() {
    let functions = manifest_functions();
    assert_eq!(
      functions.images(&"a/b.jpg".into()).unwrap(),
      functions.assets(&"images/a/b.jpg".into()).unwrap()
    );
  }

  #[test]
  fn images_matches_assets_for_hashing_resolver() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("images/a")).unwrap();
    fs::write(dir.path().join("images/a/b.jpg"), b"jpeg").unwrap();
    let functions = AssetFunctions::new(Arc::new(ContentHashResolver::new(dir.path())));

    let hash = content_hash(&dir.path().join("images/a/b.jpg")).unwrap();
    let expected = format!("url(\"../images/a/fp{hash}-b.jpg\")");
    assert_eq!(functions.assets(&"images/a/b.jpg".into()).unwrap().text, expected);
    assert_eq!(functions.images(&"a/b.jpg".into()).unwrap().text, expected);
  }

  #[test]
  fn honours_configured_prefix_and_alias() {
    let manifest = FingerprintManifest::from_iter([("img/a.png", "img/fp1-a.png")]);
    let config = ProjectConfig {
      url_prefix: "/static/".into(),
      images_alias: "img".into(),
      ..ProjectConfig::default()
    };
    let functions =
      AssetFunctions::from_config(Arc::new(ManifestResolver::new(manifest)), &config);

    assert_eq!(
      functions.images(&"a.png".into()).unwrap().text,
      "url(\"/static/img/fp1-a.png\")"
    );
  }

  #[test]
  fn registers_both_functions() {
    let mut registry = FunctionRegistry::new();
    register(&mut registry, manifest_functions());

    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["assets", "images"]);
    assert_eq!(
      registry.call(IMAGES_FUNCTION, &"a/b.jpg".into()).unwrap().text,
      "url(\"../images/a/fp42-b.jpg\")"
    );
    assert_eq!(
      registry.call(ASSETS_FUNCTION, &"fonts/icons.woff".into()).unwrap().text,
      "url(\"../fonts/fp7-icons.woff\")"
    );
  }
}
