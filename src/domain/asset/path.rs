//! Upload path conventions

use std::time::{SystemTime, UNIX_EPOCH};

/// Repository folder receiving gallery images
pub const GALLERY_FOLDER: &str = "assets/gallery";

/// Repository folder receiving videos
pub const VIDEO_FOLDER: &str = "assets/videos";

/// A freshly uploaded asset: repository path plus the public URL the
/// document should reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedAsset {
    pub path: String,
    pub url: String,
}

/// Replace each whitespace run in a filename with a single underscore
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Build the destination path for an upload: `{folder}/{millis}_{name}`.
/// Paths are never reused, so uploads are append-only; replacing a slot
/// points the document at a new asset without touching the old one.
pub fn timestamped_path(folder: &str, millis: u64, original_name: &str) -> String {
    format!(
        "{}/{}_{}",
        folder.trim_end_matches('/'),
        millis,
        sanitize_file_name(original_name)
    )
}

/// Milliseconds since the Unix epoch
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
