//! Tudou HTTP client.

use reqwest::{Client, Response};

use crate::api::types::Listing;
use crate::config::Endpoints;
use crate::error::{Error, Result};
use crate::media::extract_download_url;

/// User agent sent with every request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Tudou client for page fetching, listing and URL resolution.
pub struct TudouApi {
    client: Client,
    endpoints: Endpoints,
}

impl TudouApi {
    /// Create a new client against the given endpoints.
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoints })
    }

    /// Fetch the whole body of `url`.
    ///
    /// The status code is not checked: an error page with a readable body
    /// is returned like any other.
    pub async fn fetch_page(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, e))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        let body = response.bytes().await.map_err(|e| Error::fetch(url, e))?;
        tracing::debug!("Response body: {} bytes", body.len());

        Ok(body.to_vec())
    }

    /// Fetch and decode the listing of an album.
    pub async fn get_listing(&self, album_id: &str) -> Result<Listing> {
        let url = self.endpoints.list_url(album_id.trim());
        let body = self.fetch_page(&url).await?;

        let listing: Listing = serde_json::from_slice(&body)?;
        tracing::debug!("Album {} lists {} items", album_id.trim(), listing.len());

        Ok(listing)
    }

    /// Resolve an item id to its direct media URL.
    ///
    /// Returns an empty string when the response carries no URL.
    pub async fn get_download_url(&self, item_id: &str) -> Result<String> {
        let url = self.endpoints.video_url(item_id.trim());
        let body = self.fetch_page(&url).await?;

        let download_url = extract_download_url(&body)?;
        if download_url.is_empty() {
            tracing::warn!("No download URL in response for item {}", item_id.trim());
        }

        Ok(download_url)
    }

    /// Start a media download, failing on transport errors and non-2xx statuses.
    ///
    /// Unlike `fetch_page`, the status is checked so an error page is retried
    /// instead of being saved as the media file.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::fetch(url, e))?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}
