//! Site directory walking and content-type mapping.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{Result, SitePublisherError};

/// One file discovered under the site root, ready to upload.
pub struct SiteFile {
    /// Absolute or site-root-relative location on local disk
    pub path: PathBuf,
    /// Object key: path relative to the site root, forward-slash separated
    pub key: String,
    /// Content type inferred from the file extension; `None` means the file
    /// has no recognized type and is skipped by the uploader
    pub content_type: Option<&'static str>,
}

/// Map a file extension to its content type.
///
/// Covers the types a static site is made of; anything else returns `None`
/// and the uploader skips the file.
#[must_use]
pub fn content_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "html" | "htm" => Some("text/html"),
        "css" => Some("text/css"),
        "js" => Some("application/javascript"),
        "json" | "map" => Some("application/json"),
        "webmanifest" => Some("application/manifest+json"),
        "xml" => Some("application/xml"),
        "txt" => Some("text/plain"),
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "svg" => Some("image/svg+xml"),
        "ico" => Some("image/vnd.microsoft.icon"),
        "woff" => Some("font/woff"),
        "woff2" => Some("font/woff2"),
        _ => None,
    }
}

/// Walk the site root recursively and collect every regular file with its
/// object key and inferred content type.
///
/// Entries are visited in file-name order so runs are deterministic.
///
/// # Errors
///
/// Returns an error if the walk fails or a path is not valid UTF-8.
pub fn collect_site_files(root: &Path) -> Result<Vec<SiteFile>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).map_err(|_| {
            SitePublisherError::InvalidPath(entry.path().display().to_string())
        })?;

        let mut parts = Vec::new();
        for component in relative.iter() {
            let part = component.to_str().ok_or_else(|| {
                SitePublisherError::InvalidPath(entry.path().display().to_string())
            })?;
            parts.push(part);
        }

        let content_type = content_type_for(entry.path());
        files.push(SiteFile {
            key: parts.join("/"),
            content_type,
            path: entry.into_path(),
        });
    }

    Ok(files)
}
