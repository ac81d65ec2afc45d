//! Output directory and file management.

use std::path::Path;

use tokio::fs::{DirBuilder, File, OpenOptions};

use crate::error::Result;

/// Permission bits for the output directory.
#[cfg(unix)]
const DIR_MODE: u32 = 0o774;

/// Permission bits for downloaded files.
#[cfg(unix)]
const FILE_MODE: u32 = 0o664;

/// Ensure the output directory exists, creating it if necessary.
pub async fn ensure_output_dir(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIR_MODE);

    // Recursive creation succeeds when the directory already exists.
    builder.create(path).await?;
    Ok(())
}

/// Create or truncate a destination file for writing.
pub async fn create_output_file(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    Ok(options.open(path).await?)
}
