//! Origin and path normalization rules.

/// Normalize a configured backend origin: strip trailing slashes, default the
/// scheme to https, substitute `default_origin` when nothing usable remains.
pub(super) fn normalize_origin(origin: &str, default_origin: &str) -> String {
    let trimmed = origin.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return default_origin.trim_end_matches('/').to_string();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Collapse every run of two or more slashes into one.
///
/// Operates on a path (origin excluded), so there is no scheme separator to
/// protect here.
pub(super) fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

/// Exactly one trailing slash at the end of the path component: before `?`
/// when a query string is present, at the very end otherwise.
pub(super) fn ensure_trailing_slash(path: &str) -> String {
    match path.find('?') {
        Some(i) => {
            let (before, query) = path.split_at(i);
            format!("{}/{}", before.trim_end_matches('/'), query)
        }
        None => format!("{}/", path.trim_end_matches('/')),
    }
}
