//! Runtime configuration.

use std::path::PathBuf;

/// Album listing endpoint; the album id is appended.
pub const DEFAULT_LIST_ENDPOINT: &str = "http://www.tudou.com/tva/srv/alist.action?ver=asins&a=";

/// Direct URL resolution endpoint; the item id is appended.
pub const DEFAULT_VIDEO_ENDPOINT: &str = "http://v2.tudou.com/v.action?vn=02&hd=2&it=";

/// Extension given to every downloaded file.
pub const DEFAULT_MEDIA_EXTENSION: &str = "f4v";

/// Total attempts per item: the first try plus one retry.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 2;

/// Base URLs of the remote services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Prefix of the album listing request.
    pub list: String,
    /// Prefix of the download URL resolution request.
    pub video: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            list: DEFAULT_LIST_ENDPOINT.to_string(),
            video: DEFAULT_VIDEO_ENDPOINT.to_string(),
        }
    }
}

impl Endpoints {
    /// Build both endpoints under a different host, keeping the standard paths.
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            list: format!("{}/tva/srv/alist.action?ver=asins&a=", base),
            video: format!("{}/v.action?vn=02&hd=2&it=", base),
        }
    }

    /// Listing URL for an album.
    pub fn list_url(&self, album_id: &str) -> String {
        format!("{}{}", self.list, album_id)
    }

    /// Resolution URL for an item.
    pub fn video_url(&self, item_id: &str) -> String {
        format!("{}{}", self.video, item_id)
    }
}

/// Everything one run needs, built from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Page to start from.
    pub url: String,

    /// First album item to download (1-based).
    pub start: i64,

    /// Last album item to download (1-based, inclusive).
    pub end: i64,

    /// Directory receiving the downloaded files.
    pub output_dir: PathBuf,

    pub endpoints: Endpoints,

    /// File extension without the leading dot.
    pub media_extension: String,

    /// Attempts per item before giving up on it.
    pub max_attempts: u32,

    /// Whether to draw progress bars for large transfers.
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            start: 1,
            end: 1,
            output_dir: PathBuf::from("output"),
            endpoints: Endpoints::default(),
            media_extension: DEFAULT_MEDIA_EXTENSION.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            show_progress: true,
        }
    }
}

impl Config {
    /// Create a config for a page URL with every other value defaulted.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Whether the user asked for anything other than the default `1..=1` range.
    pub fn range_given(&self) -> bool {
        !(self.start == 1 && self.end == 1)
    }
}
