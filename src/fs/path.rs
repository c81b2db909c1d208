//! Path Resolution
//!
//! Pure string functions turning user-supplied paths into canonical absolute
//! paths. Nothing here touches the tree, so none of it can fail.

/// The root path.
pub const ROOT: &str = "/";

/// Non-empty segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|p| !p.is_empty())
}

/// Resolve `path` against `base` into a canonical absolute path.
///
/// `.` and empty segments are dropped, `..` pops one segment and is a no-op at
/// the root.
pub fn resolve(path: &str, base: &str) -> String {
    let mut resolved: Vec<&str> = if path.starts_with('/') {
        Vec::new()
    } else {
        segments(base).collect()
    };

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }

    let canonical = format!("/{}", resolved.join("/"));
    log::trace!("resolved '{}' against '{}' to '{}'", path, base, canonical);
    canonical
}

/// Split an argument path into the canonical path of its containing directory
/// and the raw final segment.
pub fn split_parent_and_name(path: &str, base: &str) -> (String, String) {
    match path.rfind('/') {
        None => (resolve("", base), path.to_string()),
        Some(0) => (ROOT.to_string(), path[1..].to_string()),
        Some(pos) => (resolve(&path[..pos], base), path[pos + 1..].to_string()),
    }
}

/// Canonical path of `name` inside `parent`.
pub fn join(parent: &str, name: &str) -> String {
    if parent == ROOT {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Canonical path of the containing directory. The root is its own parent.
pub fn dirname(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => ROOT.to_string(),
        Some(pos) => path[..pos].to_string(),
    }
}

/// Whether `path` is `ancestor` itself or lies below it. Both must be canonical.
pub fn is_within(path: &str, ancestor: &str) -> bool {
    if ancestor == ROOT || path == ancestor {
        return true;
    }
    path.strip_prefix(ancestor)
        .map_or(false, |rest| rest.starts_with('/'))
}

/// Whether a single-name argument is `.` or `..`.
pub fn is_dot_name(name: &str) -> bool {
    name == "." || name == ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_parent() {
        assert_eq!(resolve("..", "/a/b"), "/a");
        assert_eq!(resolve("..", "/"), "/");
        assert_eq!(resolve("../../..", "/a"), "/");
    }

    #[test]
    fn test_resolve_absolute_ignores_base() {
        assert_eq!(resolve("/x/../y", "/a/b"), "/y");
        assert_eq!(resolve("/x/../y", "/"), "/y");
    }

    #[test]
    fn test_resolve_relative_and_malformed() {
        assert_eq!(resolve("c", "/a/b"), "/a/b/c");
        assert_eq!(resolve("./c/./d", "/a"), "/a/c/d");
        assert_eq!(resolve("c//d/", "/"), "/c/d");
        assert_eq!(resolve("", "/a/b"), "/a/b");
        assert_eq!(resolve("/", "/a/b"), "/");
        assert_eq!(resolve("//..//", "/a"), "/");
    }

    #[test]
    fn test_split_parent_and_name() {
        assert_eq!(split_parent_and_name("x", "/home"), ("/home".to_string(), "x".to_string()));
        assert_eq!(split_parent_and_name("/x", "/home"), ("/".to_string(), "x".to_string()));
        assert_eq!(split_parent_and_name("a/b", "/home"), ("/home/a".to_string(), "b".to_string()));
        assert_eq!(split_parent_and_name("../b", "/home"), ("/".to_string(), "b".to_string()));
        assert_eq!(split_parent_and_name("a/b/", "/"), ("/a/b".to_string(), String::new()));
    }

    #[test]
    fn test_join_and_dirname() {
        assert_eq!(join("/", "home"), "/home");
        assert_eq!(join("/home", "a"), "/home/a");
        assert_eq!(dirname("/"), "/");
        assert_eq!(dirname("/home"), "/");
        assert_eq!(dirname("/home/a"), "/home");
    }

    #[test]
    fn test_is_within() {
        assert!(is_within("/a/b", "/a"));
        assert!(is_within("/a", "/a"));
        assert!(is_within("/a", "/"));
        assert!(!is_within("/ab", "/a"));
        assert!(!is_within("/a", "/a/b"));
    }
}
