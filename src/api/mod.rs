//! Tudou API module.
//!
//! This module provides:
//! - HTTP client for page fetching and media transfers
//! - Album listing and download URL resolution
//! - API response types

pub mod client;
pub mod types;

pub use client::TudouApi;
pub use types::{Listing, ListingItem};
