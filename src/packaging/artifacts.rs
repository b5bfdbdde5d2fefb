//! Package discovery and verification in a target's output directory.

use crate::error::{PackagingError, Result};
use crate::target::PackageFormat;
use std::path::{Path, PathBuf};

/// Returns the single package of `format` that a build left in `dir`.
///
/// Only non-empty regular files with the format's extension count. Zero or
/// several of them is an [`PackagingError::Artifact`] error.
pub fn find_package(dir: &Path, format: PackageFormat) -> Result<PathBuf> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        format.as_str()
    );

    let paths = glob::glob(&pattern).map_err(|e| {
        PackagingError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
    })?;

    let mut packages = Vec::new();
    for entry in paths {
        let path = entry.map_err(std::io::Error::from)?;
        let metadata = std::fs::symlink_metadata(&path)?;

        if !metadata.is_file() {
            log::debug!("Skipping non-regular file: {}", path.display());
            continue;
        }
        if metadata.len() == 0 {
            log::warn!("Skipping empty package: {}", path.display());
            continue;
        }

        packages.push(path);
    }

    match packages.len() {
        1 => Ok(packages.remove(0)),
        found => Err(PackagingError::Artifact {
            dir: dir.to_path_buf(),
            extension: format.as_str(),
            found,
        }),
    }
}
