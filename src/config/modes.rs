//! Download mode definitions and detection.

use std::fmt;

/// Substring that marks an album playback page URL.
pub const ALBUM_PAGE_MARKER: &str = "albumplay";

/// Pattern pulling a single item id out of a page.
pub const ITEM_ID_PATTERN: &str = "iid:(.*)";

/// Pattern pulling an album id out of an album page.
pub const ALBUM_ID_PATTERN: &str = ",aid=(.*)";

/// Available download modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DownloadMode {
    /// Download one video by item id.
    #[default]
    Single,
    /// Download a range of items from an album listing.
    Album,
}

impl DownloadMode {
    /// Decide the mode from the page URL and whether a range was requested.
    ///
    /// Only an album page combined with a non-default range selects album
    /// mode. An album page without a range downloads the item currently
    /// playing. There is no explicit mode switch, so `--start 1 --end 1` on
    /// an album page can never mean "the first album item".
    pub fn detect(url: &str, range_given: bool) -> Self {
        if url.contains(ALBUM_PAGE_MARKER) && range_given {
            DownloadMode::Album
        } else {
            DownloadMode::Single
        }
    }

    /// The id extraction pattern used in this mode.
    pub fn id_pattern(&self) -> &'static str {
        match self {
            DownloadMode::Single => ITEM_ID_PATTERN,
            DownloadMode::Album => ALBUM_ID_PATTERN,
        }
    }
}

impl fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadMode::Single => write!(f, "single"),
            DownloadMode::Album => write!(f, "album"),
        }
    }
}
