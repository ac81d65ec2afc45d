//! Media module.

pub mod extract;
pub mod item;

pub use extract::{extract_download_url, extract_id, DOWNLOAD_URL_PATTERN};
pub use item::DownloadTarget;
