//! Packaging configuration resolved from the environment.

use crate::error::{PackagingError, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the packaging directory
pub const PACKAGING_DIR_ENV: &str = "PACKAGING_DIR";

/// Environment variable overriding the container CLI program
pub const CONTAINER_RUNTIME_ENV: &str = "CONTAINER_RUNTIME";

/// Container CLI used when `CONTAINER_RUNTIME` is unset
pub const DEFAULT_RUNTIME: &str = "docker";

/// Script run inside the builder image, relative to `/build-inside`
pub const BUILD_SCRIPT: &str = "build-package.sh";

/// Where the packages end up and how the containers are invoked.
#[derive(Debug, Clone)]
pub struct PackagingConfig {
    /// Directory holding `build-package.sh`, mounted at `/build-inside`
    pub packaging_dir: PathBuf,
    /// Project source tree, mounted at `/source`
    pub source_dir: PathBuf,
    /// Output root, reset at the start of every run
    pub out_dir: PathBuf,
    /// Container CLI program
    pub runtime: String,
    /// Runtime packages every built package depends on
    pub dependencies: Vec<String>,
    /// Command run inside the tester container once the package is installed
    pub smoke_test: String,
}

impl PackagingConfig {
    /// Configuration rooted at `packaging_dir` with default settings.
    pub fn new(packaging_dir: &Path) -> Result<Self> {
        let packaging_dir = packaging_dir
            .absolutize()
            .map_err(|e| PackagingError::OutputDir {
                path: packaging_dir.to_path_buf(),
                source: e,
            })?
            .into_owned();
        let source_dir = packaging_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| packaging_dir.clone());
        let out_dir = packaging_dir.join("out");

        Ok(Self {
            packaging_dir,
            source_dir,
            out_dir,
            runtime: DEFAULT_RUNTIME.to_string(),
            dependencies: vec!["python3".to_string()],
            smoke_test: "kubernaut --help".to_string(),
        })
    }

    /// Reads `PACKAGING_DIR` and `CONTAINER_RUNTIME`, falling back to the
    /// current directory and `docker`.
    pub fn from_env() -> Result<Self> {
        let packaging_dir = match std::env::var_os(PACKAGING_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        };

        let mut config = Self::new(&packaging_dir)?;
        if let Ok(runtime) = std::env::var(CONTAINER_RUNTIME_ENV)
            && !runtime.trim().is_empty()
        {
            config.runtime = runtime;
        }

        log::debug!("Packaging configuration: {config:?}");
        Ok(config)
    }

    /// Path of the build script as seen from inside the builder container
    pub fn build_script_in_container(&self) -> String {
        format!("/build-inside/{BUILD_SCRIPT}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_derived_from_packaging_dir() {
        let config = PackagingConfig::new(Path::new("/repo/packaging")).unwrap();
        assert_eq!(config.packaging_dir, PathBuf::from("/repo/packaging"));
        assert_eq!(config.source_dir, PathBuf::from("/repo"));
        assert_eq!(config.out_dir, PathBuf::from("/repo/packaging/out"));
        assert_eq!(config.runtime, "docker");
        assert_eq!(config.dependencies, vec!["python3".to_string()]);
    }

    #[test]
    fn test_relative_dir_is_absolutized() {
        let config = PackagingConfig::new(Path::new("packaging")).unwrap();
        assert!(config.packaging_dir.is_absolute());
        assert!(config.out_dir.ends_with("packaging/out"));
    }

    #[test]
    fn test_build_script_path() {
        let config = PackagingConfig::new(Path::new("/repo/packaging")).unwrap();
        assert_eq!(
            config.build_script_in_container(),
            "/build-inside/build-package.sh"
        );
    }
}
