//! Filename extraction from URL path.

/// Extracts the last non-empty path segment of a URL.
///
/// Query and fragment are ignored. Returns `None` if the URL can't be parsed
/// or its path is empty/root.
pub fn filename_from_url_path(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().rsplit('/').find(|s| !s.is_empty())?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}
