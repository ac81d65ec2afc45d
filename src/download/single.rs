//! Single item download logic.

use crate::api::TudouApi;
use crate::config::Config;
use crate::download::item::download_item;
use crate::download::state::RunState;
use crate::error::Result;

/// Download a single item by id, naming the file after the id.
pub async fn download_single(
    api: &TudouApi,
    config: &Config,
    item_id: &str,
    state: &mut RunState,
) -> Result<()> {
    tracing::info!("Downloading single item: {}", item_id.trim());

    download_item(api, config, item_id, item_id, state).await?;

    Ok(())
}
