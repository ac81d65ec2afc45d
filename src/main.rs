//! Tudou Downloader - CLI entry point.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use tudou_downloader::{
    cli::Args,
    download::run,
    error::{Error, ErrorKind, Result},
    output::{
        print_banner, print_config_summary, print_error, print_info, print_run_stats, print_usage,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = run_cli().await {
        print_error(&format!("{}", e));
        match e.kind() {
            ErrorKind::Usage => print_usage(),
            ErrorKind::Fatal => match e {
                Error::IdNotFound { .. } => {
                    print_info("The page layout may have changed, or the URL is not a video page")
                }
                Error::Json(_) => print_info("The album listing could not be read"),
                _ => {}
            },
        }
    }

    // Failures are reported on the console only; the exit status stays 0.
    ExitCode::SUCCESS
}

async fn run_cli() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse_with_legacy_flags();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    let Some(config) = args.into_config() else {
        print_usage();
        return Ok(());
    };

    print_banner();
    print_config_summary(
        &config.url,
        config.start,
        config.end,
        &config.output_dir.display().to_string(),
    );

    let state = run(&config).await?;

    print_run_stats(&state);

    Ok(())
}
