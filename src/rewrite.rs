//! Evaluate registered asset functions inside stylesheet text.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::asset_paths::{should_ignore_asset_reference, url_literal};
use crate::error::{Error, Result};
use crate::functions::{FunctionRegistry, StringNode};

/// Stylesheet text with every registered function call substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenStylesheet {
  /// Rewritten stylesheet source.
  pub css: String,
  /// Number of calls that were substituted.
  pub replaced: usize,
}

fn call_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r#"([A-Za-z_][\w-]*)\(\s*(?:"([^"\n]*)"|'([^'\n]*)')\s*\)"#)
      .expect("invalid function call regex")
  })
}

/// Replace `name("path")` calls for every function defined on `registry`.
///
/// Calls to unregistered names (`url(...)`, `rgba(...)`, ...) are copied through untouched.
/// Remote URLs and data URIs passed to a registered function become a plain `url("...")`
/// without touching the resolver. The first failing call aborts the rewrite.
pub fn rewrite_stylesheet(source: &str, registry: &FunctionRegistry) -> Result<RewrittenStylesheet> {
  let mut css = String::with_capacity(source.len());
  let mut replaced = 0;
  let mut last_end = 0;

  for captures in call_pattern().captures_iter(source) {
    let (Some(call), Some(name)) = (captures.get(0), captures.get(1)) else {
      continue;
    };
    if !registry.contains(name.as_str()) {
      continue;
    }

    let argument = captures
      .get(2)
      .or_else(|| captures.get(3))
      .map(|value| value.as_str())
      .unwrap_or_default();

    let literal = if should_ignore_asset_reference(argument) {
      url_literal("", argument)
    } else {
      registry
        .call(name.as_str(), &StringNode::new(argument))
        .map_err(|err| Error::Call {
          line: line_number(source, call.start()),
          name: name.as_str().to_string(),
          source: Box::new(err),
        })?
        .text
    };

    css.push_str(&source[last_end..call.start()]);
    css.push_str(&literal);
    last_end = call.end();
    replaced += 1;
  }

  css.push_str(&source[last_end..]);
  debug!(replaced, "rewrote stylesheet asset references");
  Ok(RewrittenStylesheet { css, replaced })
}

fn line_number(source: &str, offset: usize) -> usize {
  source[..offset].bytes().filter(|byte| *byte == b'\n').count() + 1
}
