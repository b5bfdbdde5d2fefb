//! Command line argument parsing and validation.
//!
//! The tool takes exactly one argument, the release version. Everything else
//! comes from the environment (see [`crate::config`]).

use clap::Parser;

/// Build and smoke-test Linux packages of the kubernaut CLI
#[derive(Parser, Debug)]
#[command(
    name = "create_linux_packages",
    version,
    about = "Build and smoke-test Ubuntu and Fedora packages in out/",
    long_about = "Build .deb and .rpm packages with fpm-within-docker images, then install
each one into a clean distribution container and run `kubernaut --help`.

Usage:
  create_linux_packages <release-version>
  PACKAGING_DIR=packaging create_linux_packages 1.2.3

Environment:
  PACKAGING_DIR       directory containing build-package.sh (default: current directory)
  CONTAINER_RUNTIME   container CLI to invoke (default: docker)
  RUST_LOG            diagnostic log filter, e.g. debug"
)]
pub struct Args {
    /// Release version stamped into every package
    ///
    /// Opaque; only a blank value is rejected, by the pipeline.
    #[arg(index = 1, value_name = "VERSION")]
    pub release_version: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Output settings shared by the pipeline and the container runtime
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration with normal output
    pub fn new() -> Self {
        Self {
            output: super::OutputManager::new(false, false),
        }
    }

    /// Runtime configuration that prints nothing except errors
    pub fn quiet() -> Self {
        Self {
            output: super::OutputManager::new(false, true),
        }
    }

    /// Print verbose message
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print progress message
    pub fn progress(&self, message: &str) {
        let _ = self.output.progress(message);
    }

    /// Print section header
    pub fn section(&self, title: &str) {
        let _ = self.output.section(title);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_consistent() {
        // --version is generated by clap and must not clash with the positional
        Args::command().debug_assert();
    }

    #[test]
    fn test_version_is_positional() {
        let args = Args::try_parse_from(["create_linux_packages", "1.2.3"]).unwrap();
        assert_eq!(args.release_version, "1.2.3");
    }

    #[test]
    fn test_version_flag_still_available() {
        let err = Args::try_parse_from(["create_linux_packages", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_version_required() {
        assert!(Args::try_parse_from(["create_linux_packages"]).is_err());
    }

    #[test]
    fn test_no_extra_arguments() {
        assert!(Args::try_parse_from(["create_linux_packages", "1.0", "2.0"]).is_err());
    }

    #[test]
    fn test_blank_version_parses() {
        let args = Args::try_parse_from(["create_linux_packages", " "]).unwrap();
        assert_eq!(args.release_version, " ");
    }
}
