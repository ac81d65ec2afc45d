//! Top-level download flow.
//!
//! One run goes through these stages in order:
//! fetch the start page, detect the mode and extract the id, resolve, then
//! download. Fatal errors from any stage end the run; per-item failures
//! only end that item.

use crate::api::TudouApi;
use crate::config::{validate_config, Config, DownloadMode};
use crate::download::album::download_album;
use crate::download::single::download_single;
use crate::download::state::RunState;
use crate::error::Result;
use crate::media::extract_id;
use crate::output::print_info;

/// Validate `config`, build a client and run the whole download.
pub async fn run(config: &Config) -> Result<RunState> {
    validate_config(config)?;
    let api = TudouApi::new(config.endpoints.clone())?;
    run_with_api(&api, config).await
}

/// Run the download with an existing client.
pub async fn run_with_api(api: &TudouApi, config: &Config) -> Result<RunState> {
    let url = config.url.trim();
    let page = api.fetch_page(url).await?;

    let (mode, id) = extract_id(&page, url, config.range_given())?;
    print_info(&format!("Detected {} mode, id: {}", mode, id));

    let mut state = RunState::new(mode);

    match mode {
        DownloadMode::Album => download_album(api, config, &id, &mut state).await?,
        DownloadMode::Single => download_single(api, config, &id, &mut state).await?,
    }

    Ok(state)
}
