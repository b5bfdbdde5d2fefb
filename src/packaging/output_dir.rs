//! Output directory lifecycle.
//!
//! The root is wiped and recreated at the start of each run and left in
//! place afterwards, including after a failure, so partial output can be
//! inspected.

use crate::error::{PackagingError, Result};
use std::path::{Path, PathBuf};

/// Removes `root` if present and recreates it empty.
pub fn reset_output_root(root: &Path) -> Result<()> {
    let io_err = |source| PackagingError::OutputDir {
        path: root.to_path_buf(),
        source,
    };

    if root.exists() {
        log::debug!("Removing previous output at {}", root.display());
        std::fs::remove_dir_all(root).map_err(io_err)?;
    }
    std::fs::create_dir_all(root).map_err(io_err)
}

/// Creates `root/<name>` for one target and returns it.
pub fn create_target_dir(root: &Path, name: &str) -> Result<PathBuf> {
    let dir = root.join(name);
    std::fs::create_dir(&dir).map_err(|source| PackagingError::OutputDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
