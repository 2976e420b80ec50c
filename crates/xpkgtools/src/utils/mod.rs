/// Returns the first `max_len` characters of `s`, or `s` itself when it is
/// already short enough.
pub fn truncate(s: &str, max_len: usize) -> &str {
    match s.char_indices().nth(max_len) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Joins two `/` separated path fragments. Either side may be empty.
pub fn join_path(directory: &str, name: &str) -> String {
    match (directory.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (_, true) => directory.to_string(),
        _ if directory.ends_with('/') => format!("{directory}{name}"),
        _ => format!("{directory}/{name}"),
    }
}

/// Removes the last extension of the final path segment, dot included.
///
/// Dots in parent directories are left alone, and only one extension is
/// ever removed (`a/b.tar.gz` becomes `a/b.tar`).
pub fn trim_extension(path: &str) -> &str {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[segment_start..].rfind('.') {
        Some(dot) => &path[..segment_start + dot],
        None => path,
    }
}
