/// Remove a single leading `../` segment from an asset reference.
///
/// Stylesheets live one directory below the public root, so authors often write the
/// reference the way the browser will see it. Only the first segment is stripped.
pub fn strip_parent_prefix(path: &str) -> &str {
    path.strip_prefix("../").unwrap_or(path)
}

/// Prepend an alias directory to a sub-path, joining the two like a filesystem path join.
///
/// Empty and `.` segments are dropped and `..` pops the previous segment. A trailing slash
/// on the sub-path survives so directory references stay recognisable.
pub fn join_alias(alias: &str, sub_path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in alias.split('/').chain(sub_path.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else {
                    segments.push(segment);
                }
            }
            _ => segments.push(segment),
        }
    }

    let mut joined = segments.join("/");
    let wants_trailing_slash =
        sub_path.ends_with('/') || (sub_path.is_empty() && alias.ends_with('/'));
    if wants_trailing_slash && !joined.is_empty() {
        joined.push('/');
    }
    joined
}

/// Build the fingerprinted form of an asset path: `<dir>/fp<hash>-<basename>`.
///
/// The directory component is kept verbatim; a path without a directory yields just the
/// prefixed basename.
pub fn fingerprinted_path(path: &str, hash: &str) -> String {
    match path.rsplit_once('/') {
        Some((dir, name)) if !dir.is_empty() => format!("{dir}/fp{hash}-{name}"),
        Some((_, name)) => format!("/fp{hash}-{name}"),
        None => format!("fp{hash}-{path}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_one_parent_segment() {
        assert_eq!(strip_parent_prefix("../images/a.png"), "images/a.png");
        assert_eq!(strip_parent_prefix("../../images/a.png"), "../images/a.png");
        assert_eq!(strip_parent_prefix("images/../a.png"), "images/../a.png");
        assert_eq!(strip_parent_prefix("images/a.png"), "images/a.png");
    }

    #[test]
    fn joins_alias_and_sub_path() {
        assert_eq!(join_alias("images", "a/b.jpg"), "images/a/b.jpg");
        assert_eq!(join_alias("images/", "a/b.jpg"), "images/a/b.jpg");
        assert_eq!(join_alias("images/", "/a//b.jpg"), "images/a/b.jpg");
        assert_eq!(join_alias("images/", "./a/b.jpg"), "images/a/b.jpg");
    }

    #[test]
    fn join_resolves_parent_segments() {
        assert_eq!(join_alias("images/", "../fonts/x.woff"), "fonts/x.woff");
        assert_eq!(join_alias("images/", "../../x.woff"), "../x.woff");
    }

    #[test]
    fn join_keeps_directory_references() {
        assert_eq!(join_alias("images/", "icons/"), "images/icons/");
        assert_eq!(join_alias("images/", ""), "images/");
    }

    #[test]
    fn prefixes_basename_and_keeps_directory() {
        assert_eq!(
            fingerprinted_path("images/sub/a.jpg", "abc123"),
            "images/sub/fpabc123-a.jpg"
        );
        assert_eq!(fingerprinted_path("logo.png", "ff"), "fpff-logo.png");
        assert_eq!(fingerprinted_path("/logo.png", "ff"), "/fpff-logo.png");
    }
}
