//! Builder container invocation.

use super::artifacts::find_package;
use crate::config::PackagingConfig;
use crate::container::{ContainerRun, ContainerRuntime, MountMode};
use crate::error::Result;
use crate::target::Target;
use std::path::{Path, PathBuf};

/// Describes the fpm-within-docker run producing `target`'s package in `out_dir`.
///
/// The packaging directory is mounted at `/build-inside`, the source tree at
/// `/source` and `out_dir` at `/out`. Version and format travel as
/// `PACKAGE_VERSION` and `PACKAGE_TYPE`; dependencies are trailing script
/// arguments.
pub fn build_run(
    config: &PackagingConfig,
    target: &Target,
    version: &str,
    out_dir: &Path,
) -> ContainerRun {
    ContainerRun::new(target.builder_image)
        .env("PACKAGE_VERSION", version)
        .env("PACKAGE_TYPE", target.format.as_str())
        .mount(
            &config.packaging_dir,
            "/build-inside",
            Some(MountMode::ReadWrite),
        )
        .mount(&config.source_dir, "/source", Some(MountMode::ReadWrite))
        .mount(out_dir, "/out", None)
        .workdir("/build-inside")
        .args([config.build_script_in_container()])
        .args(config.dependencies.iter().cloned())
}

/// Builds the package for `target` into `out_dir` and returns its path.
///
/// Fails on a non-zero builder exit, or when the builder did not leave
/// exactly one package of the target's format behind.
pub async fn build_package<R: ContainerRuntime>(
    runtime: &R,
    config: &PackagingConfig,
    target: &Target,
    version: &str,
    out_dir: &Path,
) -> Result<PathBuf> {
    let run = build_run(config, target, version, out_dir);
    runtime.run(&run).await?;
    find_package(out_dir, target.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TARGETS;

    fn config() -> PackagingConfig {
        PackagingConfig::new(Path::new("/repo/packaging")).unwrap()
    }

    #[test]
    fn test_builder_invocation() {
        let target = &TARGETS[0];
        let run = build_run(&config(), target, "1.2.3", Path::new("/repo/packaging/out/xenial"));

        assert_eq!(run.image, "alanfranz/fpm-within-docker:ubuntu-xenial");
        assert_eq!(run.env_value("PACKAGE_VERSION"), Some("1.2.3"));
        assert_eq!(run.env_value("PACKAGE_TYPE"), Some("deb"));
        assert_eq!(run.workdir.as_deref(), Some("/build-inside"));

        let volumes: Vec<std::ffi::OsString> = run.mounts.iter().map(|m| m.to_volume_arg()).collect();
        assert_eq!(
            volumes,
            [
                "/repo/packaging:/build-inside:rw",
                "/repo:/source:rw",
                "/repo/packaging/out/xenial:/out",
            ]
        );
        assert_eq!(run.command, ["/build-inside/build-package.sh", "python3"]);
    }

    #[test]
    fn test_rpm_target_passes_rpm_type() {
        let target = &TARGETS[3];
        let run = build_run(&config(), target, "0.9", Path::new("/tmp/fedora-25"));
        assert_eq!(run.image, "alanfranz/fpm-within-docker:fedora-25");
        assert_eq!(run.env_value("PACKAGE_TYPE"), Some("rpm"));
    }

    #[test]
    fn test_version_is_passed_verbatim() {
        let run = build_run(&config(), &TARGETS[1], " 2.0.0-rc1+build.7 ", Path::new("/o"));
        assert_eq!(run.env_value("PACKAGE_VERSION"), Some(" 2.0.0-rc1+build.7 "));
    }
}
