//! Tudou Downloader - fetch Tudou videos and albums to local files.
//!
//! The run is a short sequential pipeline:
//!
//! - fetch the page given on the command line
//! - extract an item id or album id from it
//! - for albums, fetch the JSON listing and clamp the requested range
//! - resolve each item id to a direct media URL
//! - stream each media file into the output directory, retrying a failed
//!   item once
//!
//! # Example
//!
//! ```no_run
//! use tudou_downloader::{download, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::new("http://www.tudou.com/albumplay/abc/def.html");
//!     config.start = 1;
//!     config.end = 3;
//!
//!     let state = download::run(&config).await?;
//!     println!("{} of {} items downloaded", state.succeeded, state.attempted);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{Listing, ListingItem, TudouApi};
pub use config::{Config, DownloadMode, Endpoints};
pub use download::{run, RunState};
pub use error::{Error, ErrorKind, Result};
pub use media::DownloadTarget;
