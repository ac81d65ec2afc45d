//! Media file downloading.

use futures::StreamExt;
use reqwest::Response;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::TudouApi;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::{create_output_file, ensure_output_dir};
use crate::media::DownloadTarget;
use crate::output::{create_download_bar, print_info, print_success, print_warning};

/// Minimum file size to show progress bar (1 MiB).
const PROGRESS_THRESHOLD: u64 = 1024 * 1024;

/// Download a target into the configured output directory.
///
/// Returns the number of bytes written, or `None` when the transfer failed
/// and may be retried. Failing to create the output directory or file is an
/// error.
pub async fn download_target(
    api: &TudouApi,
    config: &Config,
    target: &DownloadTarget,
) -> Result<Option<u64>> {
    ensure_output_dir(&config.output_dir).await?;

    if !target.is_resolved() {
        tracing::warn!("No download URL for {}", target.destination_filename);
        print_warning("Download Failed!");
        return Ok(None);
    }

    let response = match api.download_file(&target.source_url).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Request for {} failed: {}", target.source_url, e);
            print_warning("Download Failed!");
            return Ok(None);
        }
    };

    print_info(&format!(
        "Downloading..., filename: {}",
        target.destination_filename
    ));

    let output_path = target.destination_path(&config.output_dir);
    let mut file = create_output_file(&output_path).await?;

    match stream_to_file(response, &mut file, config.show_progress).await {
        Ok(written) => {
            tracing::debug!("Wrote {} bytes to {}", written, output_path.display());
            print_success("Download Success!");
            Ok(Some(written))
        }
        Err(e) => {
            tracing::warn!("Transfer to {} failed: {}", output_path.display(), e);
            print_warning("Download Failed!");
            Ok(None)
        }
    }
}

/// Copy a response body into `file`, chunk by chunk.
async fn stream_to_file(response: Response, file: &mut File, show_progress: bool) -> Result<u64> {
    let content_length = response.content_length();
    let progress = content_length
        .filter(|&len| show_progress && len > PROGRESS_THRESHOLD)
        .map(create_download_bar);

    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoints;
    use crate::download::test_helpers::TruncatingServer;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &MockServer, temp_dir: &TempDir) -> Config {
        Config {
            output_dir: temp_dir.path().join("output"),
            endpoints: Endpoints::with_base(&server.uri()),
            show_progress: false,
            ..Config::new(format!("{}/programs/view/x/", server.uri()))
        }
    }

    #[tokio::test]
    async fn test_download_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media/1.f4v"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"FLV-BYTES".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&server, &temp_dir);
        let api = TudouApi::new(config.endpoints.clone()).unwrap();
        let target = DownloadTarget::new(
            format!("{}/media/1.f4v", server.uri()),
            "A/B|C",
            &config.media_extension,
        );

        let written = download_target(&api, &config, &target).await.unwrap();

        assert_eq!(written, Some(9));
        let saved = std::fs::read(config.output_dir.join("A-B-C.f4v")).unwrap();
        assert_eq!(saved, b"FLV-BYTES");
    }

    #[tokio::test]
    async fn test_download_error_status_is_recoverable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/media/2.f4v"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&server, &temp_dir);
        let api = TudouApi::new(config.endpoints.clone()).unwrap();
        let target = DownloadTarget::new(
            format!("{}/media/2.f4v", server.uri()),
            "two",
            &config.media_extension,
        );

        assert_eq!(download_target(&api, &config, &target).await.unwrap(), None);
        assert!(config.output_dir.is_dir());
        assert!(!config.output_dir.join("two.f4v").exists());
    }

    #[tokio::test]
    async fn test_download_empty_url_is_recoverable() {
        let server = MockServer::start().await;
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&server, &temp_dir);
        let api = TudouApi::new(config.endpoints.clone()).unwrap();
        let target = DownloadTarget::new("", "nothing", &config.media_extension);

        assert_eq!(download_target(&api, &config, &target).await.unwrap(), None);
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_download_cut_short_is_recoverable() {
        let server = MockServer::start().await;
        let cut = TruncatingServer::start().await;

        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&server, &temp_dir);
        let api = TudouApi::new(config.endpoints.clone()).unwrap();
        let target = DownloadTarget::new(cut.url.clone(), "cut", &config.media_extension);

        assert_eq!(download_target(&api, &config, &target).await.unwrap(), None);
        assert_eq!(cut.connections(), 1);
    }
}
