//! Configuration module for the tudou-downloader.
//!
//! This module handles:
//! - The run configuration built from CLI arguments
//! - Download mode detection
//! - Configuration validation

pub mod modes;
pub mod settings;
pub mod validation;

pub use modes::DownloadMode;
pub use settings::{Config, Endpoints};
pub use validation::{validate_config, validate_url};
