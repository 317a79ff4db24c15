use std::collections::BTreeMap;

use super::nodes::{LiteralNode, StringNode};
use crate::error::{Error, Result};

/// Boxed stylesheet function taking one string node and producing a literal node.
pub type StylesheetFunction = Box<dyn Fn(&StringNode) -> Result<LiteralNode> + Send + Sync>;

/// Named functions callable from stylesheet source during compilation.
#[derive(Default)]
pub struct FunctionRegistry {
  functions: BTreeMap<String, StylesheetFunction>,
}

impl FunctionRegistry {
  /// Create an empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Define `name`, replacing any previous definition.
  pub fn define<F>(&mut self, name: impl Into<String>, function: F)
  where
    F: Fn(&StringNode) -> Result<LiteralNode> + Send + Sync + 'static,
  {
    self.functions.insert(name.into(), Box::new(function));
  }

  /// Returns `true` when `name` has been defined.
  pub fn contains(&self, name: &str) -> bool {
    self.functions.contains_key(name)
  }

  /// Defined function names in sorted order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.functions.keys().map(String::as_str)
  }

  /// Invoke `name` with a single string argument.
  pub fn call(&self, name: &str, argument: &StringNode) -> Result<LiteralNode> {
    let function = self
      .functions
      .get(name)
      .ok_or_else(|| Error::UnknownFunction(name.to_string()))?;
    function(argument)
  }
}

impl std::fmt::Debug for FunctionRegistry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("FunctionRegistry")
      .field("functions", &self.functions.keys().collect::<Vec<_>>())
      .finish()
  }
}
