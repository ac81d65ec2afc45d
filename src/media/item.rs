//! Download target representation.

use std::path::{Path, PathBuf};

use crate::fs::naming::media_filename;

/// One file to fetch: where it comes from and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// Direct media URL. Empty when resolution failed.
    pub source_url: String,

    /// Sanitized file name including the media extension.
    pub destination_filename: String,
}

impl DownloadTarget {
    /// Build a target from a resolved URL and a raw name hint.
    pub fn new(source_url: impl Into<String>, name_hint: &str, extension: &str) -> Self {
        Self {
            source_url: source_url.into(),
            destination_filename: media_filename(name_hint, extension),
        }
    }

    /// Whether resolution produced a URL at all.
    pub fn is_resolved(&self) -> bool {
        !self.source_url.trim().is_empty()
    }

    /// Full path of the destination inside `output_dir`.
    pub fn destination_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.destination_filename)
    }
}
