//! Filesystem module.
//!
//! Provides:
//! - Output directory and file creation
//! - Filename sanitization

pub mod naming;
pub mod paths;

pub use naming::{media_filename, sanitize_filename};
pub use paths::{create_output_file, ensure_output_dir};
