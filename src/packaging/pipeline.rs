//! Top-level build-and-test run across every target.

use super::build::build_package;
use super::output_dir::{create_target_dir, reset_output_root};
use super::smoke_test::test_package;
use crate::cli::RuntimeConfig;
use crate::config::PackagingConfig;
use crate::container::ContainerRuntime;
use crate::error::{PackagingError, Result};
use crate::target::{TARGETS, Target};
use std::path::PathBuf;

/// A package that was built and passed its smoke test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPackage {
    /// Target the package was built for
    pub target: &'static Target,
    /// Package file under the output root
    pub path: PathBuf,
}

/// Outcome of a fully successful run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// One entry per target, in build order
    pub packages: Vec<BuiltPackage>,
}

/// Rejects versions the builder cannot use. The version is otherwise opaque.
fn validate_version(version: &str) -> Result<()> {
    if version.trim().is_empty() {
        return Err(PackagingError::InvalidVersion {
            version: version.to_string(),
            reason: "version must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Resets the output root, then builds and smoke-tests every target in order.
///
/// Each target's build and test complete before the next target starts. The
/// first failure aborts the run and is returned as is; output written so far
/// stays on disk.
pub async fn run<R: ContainerRuntime>(
    runtime: &R,
    config: &PackagingConfig,
    version: &str,
    output: &RuntimeConfig,
) -> Result<RunSummary> {
    validate_version(version)?;

    reset_output_root(&config.out_dir)?;
    output.verbose_println(&format!("Output directory: {}", config.out_dir.display()));

    let mut summary = RunSummary::default();

    for target in TARGETS {
        output.section(&format!("{} ({})", target.name, target.format));
        let target_dir = create_target_dir(&config.out_dir, target.name)?;

        output.progress(&format!("Building {} package in {}", target.format, target.builder_image));
        let path = build_package(runtime, config, target, version, &target_dir).await?;
        output.success_println(&format!("Built {}", path.display()));

        output.progress(&format!("Installing into {}", target.tester_image));
        test_package(runtime, config, target.tester_image, &target_dir, target.format).await?;
        output.success_println(&format!("{} package installs and runs", target.name));

        log::info!("Target {} complete", target.name);
        summary.packages.push(BuiltPackage { target, path });
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_version_rejected() {
        assert!(matches!(
            validate_version(""),
            Err(PackagingError::InvalidVersion { .. })
        ));
        assert!(validate_version("   ").is_err());
    }

    #[test]
    fn test_any_non_empty_version_accepted() {
        assert!(validate_version("1.2.3").is_ok());
        assert!(validate_version("0.1.0.dev4+git.abc").is_ok());
    }
}
