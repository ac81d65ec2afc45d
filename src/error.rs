//! Error types for the tudou-downloader application.

use thiserror::Error;

/// Main error type for the application.
///
/// Every variant aborts the run. Per-item download failures are not errors;
/// the downloader reports them as `false` and the orchestrator retries.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Page scraping errors
    #[error("No identifier matching '{pattern}' found in page")]
    IdNotFound { pattern: String },

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification used by the entry point to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The user supplied something unusable.
    Usage,
    /// Network, decode or extraction failure upstream of the download loop.
    Fatal,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) | Error::InvalidUrl(_) | Error::UrlParse(_) => ErrorKind::Usage,
            _ => ErrorKind::Fatal,
        }
    }

    /// Wrap a transport error together with the URL that produced it.
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Fetch {
            url: url.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors() {
        assert_eq!(Error::InvalidUrl("x".into()).kind(), ErrorKind::Usage);
        assert_eq!(Error::Config("x".into()).kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_fatal_errors() {
        let err = Error::IdNotFound {
            pattern: "iid:(.*)".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Fatal);
        assert_eq!(
            err.to_string(),
            "No identifier matching 'iid:(.*)' found in page"
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(Error::from(json_err).kind(), ErrorKind::Fatal);
    }
}
