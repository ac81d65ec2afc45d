//! Album download logic.

use std::ops::RangeInclusive;

use crate::api::TudouApi;
use crate::config::Config;
use crate::download::item::download_item;
use crate::download::state::RunState;
use crate::error::Result;
use crate::output::print_info;

/// Clamp a requested 1-based inclusive range onto a listing of `len` items.
///
/// An out-of-bounds start falls back to the first item; an out-of-bounds or
/// inverted end falls back to the last. An empty listing yields an empty
/// range.
pub fn clamp_range(start: i64, end: i64, len: usize) -> RangeInclusive<usize> {
    let len = len as i64;

    let start = if start < 1 || start > len { 1 } else { start };
    let end = if end > len || end < start { len } else { end };

    (start as usize)..=(end.max(0) as usize)
}

/// Download the selected items of an album.
///
/// A failed item does not stop the loop; fetch and decode errors do.
pub async fn download_album(
    api: &TudouApi,
    config: &Config,
    album_id: &str,
    state: &mut RunState,
) -> Result<()> {
    let listing = api.get_listing(album_id).await?;
    let range = clamp_range(config.start, config.end, listing.len());

    print_info(&format!(
        "Album {} has {} items, downloading {} to {}",
        album_id.trim(),
        listing.len(),
        range.start(),
        range.end()
    ));

    for position in range {
        let Some(item) = listing.get(position) else {
            break;
        };

        tracing::debug!(
            "Album item {}: {} ({})",
            position,
            item.display_name,
            item.internal_id
        );

        download_item(
            api,
            config,
            &item.internal_id.to_string(),
            &item.display_name,
            state,
        )
        .await?;
    }

    tracing::info!(
        "Album download complete: {} succeeded, {} failed",
        state.succeeded,
        state.failed
    );

    Ok(())
}
