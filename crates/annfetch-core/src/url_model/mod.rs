//! Local artifact naming: one source URL maps to one file under the downloads dir.

mod path;
mod sanitize;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename_for_linux;

use std::path::{Path, PathBuf};

/// Filename used when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "download.bin";

/// Derives the artifact filename for `url`: its last path segment, sanitized for Linux.
///
/// # Examples
///
/// - `artifact_name("ftp://ftp.irisa.fr/local/texmex/corpus/sift.tar.gz")` → `"sift.tar.gz"`
/// - `artifact_name("https://example.com/")` → `"download.bin"`
pub fn artifact_name(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(s) => s,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename_for_linux(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}

/// Full path of the local artifact for `url` under `downloads_dir`.
pub fn artifact_path(url: &str, downloads_dir: &Path) -> PathBuf {
    downloads_dir.join(artifact_name(url))
}
