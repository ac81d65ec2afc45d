//! Per-item resolve-and-download with retry.

use crate::api::TudouApi;
use crate::config::Config;
use crate::download::media::download_target;
use crate::download::retry::with_attempts;
use crate::download::state::RunState;
use crate::error::Result;
use crate::media::DownloadTarget;
use crate::output::{print_info, print_warning};

/// Resolve and download one item, retrying the whole step on failure.
///
/// Every attempt re-resolves the download URL, since a failed transfer
/// often means the resolved URL went stale. Returns whether the item ended
/// up on disk.
pub async fn download_item(
    api: &TudouApi,
    config: &Config,
    item_id: &str,
    name_hint: &str,
    state: &mut RunState,
) -> Result<bool> {
    let item_id = item_id.trim();

    let outcome = with_attempts(config.max_attempts, |attempt| {
        attempt_item(api, config, item_id, name_hint, attempt)
    })
    .await?;

    if !outcome.succeeded() {
        tracing::warn!(
            "Giving up on item {} after {} attempts",
            item_id,
            outcome.attempts
        );
    }

    state.record(&outcome);
    Ok(outcome.succeeded())
}

async fn attempt_item(
    api: &TudouApi,
    config: &Config,
    item_id: &str,
    name_hint: &str,
    attempt: u32,
) -> Result<Option<u64>> {
    if attempt > 1 {
        print_warning(&format!("Try again, id: {}", item_id));
    }

    print_info(&format!("Getting download url, id: {}", item_id));
    let download_url = api.get_download_url(item_id).await?;

    let target = DownloadTarget::new(download_url, name_hint, &config.media_extension);
    download_target(api, config, &target).await
}
