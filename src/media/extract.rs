//! Identifier and download URL extraction from fetched pages.

use regex::Regex;

use crate::config::DownloadMode;
use crate::error::{Error, Result};

/// Pattern around the direct media URL in a resolution response.
pub const DOWNLOAD_URL_PATTERN: &str = "<f.*>(.*)</f>";

/// First capture group of `pattern` in `body`, if any.
fn first_capture(pattern: &str, body: &str) -> Result<Option<String>> {
    let re = Regex::new(pattern)?;
    Ok(re
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string()))
}

/// Detect the mode for `url` and pull the matching id out of `page`.
///
/// Fails when the page does not contain the id the mode expects.
pub fn extract_id(page: &[u8], url: &str, range_given: bool) -> Result<(DownloadMode, String)> {
    let mode = DownloadMode::detect(url, range_given);
    let pattern = mode.id_pattern();
    let body = String::from_utf8_lossy(page);

    let id = first_capture(pattern, &body)?.ok_or_else(|| Error::IdNotFound {
        pattern: pattern.to_string(),
    })?;

    let id = id.trim().to_string();
    tracing::debug!("Extracted {} id: {}", mode, id);

    Ok((mode, id))
}

/// Pull the direct media URL out of a resolution response.
///
/// Returns an empty string when the tag is missing.
pub fn extract_download_url(body: &[u8]) -> Result<String> {
    let body = String::from_utf8_lossy(body);
    Ok(first_capture(DOWNLOAD_URL_PATTERN, &body)?.unwrap_or_default())
}
