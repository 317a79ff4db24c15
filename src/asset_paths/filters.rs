use regex::Regex;

fn external_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"^//").expect("invalid protocol-relative regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
            ]
        })
        .as_slice()
}

/// Returns `true` for references that must reach the browser exactly as written.
///
/// `images("//cdn.example.com/x.png")` would otherwise be joined under the images alias and
/// turned into a bogus local path.
pub fn should_ignore_asset_reference(value: &str) -> bool {
    external_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::should_ignore_asset_reference;

    #[test]
    fn ignores_http_urls() {
        assert!(should_ignore_asset_reference("https://cdn.example.com/a.png"));
        assert!(should_ignore_asset_reference("HTTP://example.com/b.png"));
    }

    #[test]
    fn ignores_protocol_relative_urls() {
        assert!(should_ignore_asset_reference("//cdn.example.com/a.png"));
    }

    #[test]
    fn ignores_data_uris() {
        assert!(should_ignore_asset_reference("data:image/png;base64,abc"));
    }

    #[test]
    fn keeps_relative_paths() {
        assert!(!should_ignore_asset_reference("images/photo.png"));
        assert!(!should_ignore_asset_reference("../images/photo.png"));
    }
}
