/// Prefix placed in front of every resolved path inside the `url(...)` literal.
pub const DEFAULT_URL_PREFIX: &str = "../";

/// Wrap a resolved asset path as a stylesheet URL literal.
///
/// The path is emitted verbatim inside double quotes; stylesheet asset paths never carry
/// quotes themselves, so no escaping is attempted.
pub fn url_literal(prefix: &str, path: &str) -> String {
    format!("url(\"{prefix}{path}\")")
}
