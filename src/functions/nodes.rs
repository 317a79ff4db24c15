/// String-valued argument node as handed over by the stylesheet evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringNode {
  /// The string payload, without surrounding quotes.
  pub val: String,
}

impl StringNode {
  /// Wrap a plain string as an argument node.
  pub fn new(val: impl Into<String>) -> Self {
    Self { val: val.into() }
  }
}

impl From<&str> for StringNode {
  fn from(val: &str) -> Self {
    Self::new(val)
  }
}

/// Literal node returned to the evaluator; emitted into the compiled stylesheet verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralNode {
  /// Raw stylesheet text, e.g. `url("../images/fp00-a.png")`.
  pub text: String,
}

impl LiteralNode {
  /// Create a literal node from raw stylesheet text.
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }
}

impl std::fmt::Display for LiteralNode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.text)
  }
}
