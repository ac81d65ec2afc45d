//! Configuration validation logic.

use url::Url;

use crate::config::settings::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_url(&config.url)?;
    validate_extension(&config.media_extension)?;

    if config.max_attempts == 0 {
        return Err(Error::Config(
            "max_attempts must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// Validate the page URL given on the command line.
pub fn validate_url(input: &str) -> Result<Url> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::InvalidUrl("URL cannot be empty".to_string()));
    }

    let url = Url::parse(input)?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidUrl(format!(
            "Unsupported scheme '{}' in {}",
            scheme, input
        ))),
    }
}

/// Validate the media file extension.
pub fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(Error::Config("media extension cannot be empty".to_string()));
    }

    if extension.starts_with('.') {
        return Err(Error::Config(format!(
            "media extension '{}' must not start with a dot",
            extension
        )));
    }

    Ok(())
}
