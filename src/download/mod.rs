//! Download module for content downloading.
//!
//! This module provides:
//! - Run state tracking
//! - Bounded per-item retry
//! - Album and single item downloading
//! - Media file streaming
//! - The top-level run

pub mod album;
pub mod item;
pub mod media;
pub mod orchestrator;
pub mod retry;
pub mod single;
pub mod state;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use album::{clamp_range, download_album};
pub use item::download_item;
pub use media::download_target;
pub use orchestrator::{run, run_with_api};
pub use retry::{with_attempts, RetryOutcome};
pub use single::download_single;
pub use state::RunState;
