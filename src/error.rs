//! Error types for package build and smoke-test operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, PackagingError>;

/// Exit code used when the run is interrupted (128 + SIGINT)
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Main error type for all packaging operations
#[derive(Error, Debug)]
pub enum PackagingError {
    /// A build or test container exited with a non-zero status
    #[error("Container '{image}' failed with {}", describe_code(.code))]
    ContainerFailed {
        /// Container CLI that ran it
        runtime: String,
        /// Image the container was started from
        image: String,
        /// Exit code, if the process exited normally
        code: Option<i32>,
    },

    /// The container runtime program could not be started
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The container runtime program is not on PATH
    #[error("Container runtime '{program}' not found: {reason}")]
    RuntimeNotFound {
        /// Configured runtime program
        program: String,
        /// Reason for the error
        reason: String,
    },

    /// The container runtime is installed but its daemon is not responding
    #[error("Container runtime unavailable: {reason}")]
    RuntimeUnavailable {
        /// Configured runtime program
        program: String,
        /// Reason for the error
        reason: String,
    },

    /// A build did not leave exactly one package behind
    #[error("Expected exactly one non-empty .{extension} package in {}, found {found}", .dir.display())]
    Artifact {
        /// Directory that was inspected
        dir: PathBuf,
        /// Expected package extension
        extension: &'static str,
        /// Number of matching packages found
        found: usize,
    },

    /// The output root or a per-target directory could not be prepared
    #[error("Failed to prepare output directory {}: {source}", .path.display())]
    OutputDir {
        /// Directory being prepared
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Version argument rejected before any work started
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion {
        /// Version string
        version: String,
        /// Reason for the error
        reason: String,
    },

    /// Ctrl-C received while a container was running
    #[error("Interrupted while running container '{image}'")]
    Interrupted {
        /// Image of the container that was stopped
        image: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn is_docker(program: &str) -> bool {
    std::path::Path::new(program)
        .file_name()
        .is_some_and(|name| name == "docker")
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl PackagingError {
    /// Process exit code to report for this error.
    ///
    /// A failing container propagates its own exit code. Everything else
    /// maps to 1, except interrupts which use the shell convention.
    pub fn exit_code(&self) -> i32 {
        match self {
            PackagingError::ContainerFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            PackagingError::Interrupted { .. } => INTERRUPTED_EXIT_CODE,
            _ => 1,
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PackagingError::ContainerFailed { runtime, image, .. } => vec![
                format!("Re-run the failing step by hand: {runtime} run --rm -it {image} sh"),
                "Inspect the partial output left under out/".to_string(),
            ],
            PackagingError::Spawn { program, .. } => vec![
                format!("Check that '{program}' is installed and on PATH"),
                "Set CONTAINER_RUNTIME to the container CLI you want to use".to_string(),
            ],
            PackagingError::RuntimeNotFound { program, .. } => vec![
                format!("Install '{program}' or add it to PATH"),
                "Set CONTAINER_RUNTIME to the container CLI you want to use".to_string(),
            ],
            PackagingError::RuntimeUnavailable { program, .. } => {
                let mut hints = Vec::new();
                if is_docker(program) {
                    hints.push("Start the Docker daemon: sudo systemctl start docker".to_string());
                }
                hints.push(format!(
                    "Check that your user can talk to the daemon: {program} ps"
                ));
                hints
            }
            PackagingError::Artifact { dir, .. } => vec![
                format!("Check what build-package.sh wrote to {}", dir.display()),
            ],
            PackagingError::OutputDir { .. } => vec![
                "Check write permissions on the packaging directory".to_string(),
                "Set PACKAGING_DIR to the directory containing build-package.sh".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_failure_propagates_exit_code() {
        let err = PackagingError::ContainerFailed {
            runtime: "docker".to_string(),
            image: "ubuntu:yakkety".to_string(),
            code: Some(100),
        };
        assert_eq!(err.exit_code(), 100);
        assert!(err.to_string().contains("exit code 100"));
        assert!(err.recovery_suggestions()[0].contains("docker run --rm -it ubuntu:yakkety"));
    }

    #[test]
    fn test_signal_termination_maps_to_one() {
        let err = PackagingError::ContainerFailed {
            runtime: "docker".to_string(),
            image: "fedora:25".to_string(),
            code: None,
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("signal"));
    }

    #[test]
    fn test_interrupt_exit_code() {
        let err = PackagingError::Interrupted {
            image: "fedora:26".to_string(),
        };
        assert_eq!(err.exit_code(), INTERRUPTED_EXIT_CODE);
    }

    #[test]
    fn test_other_errors_exit_one() {
        let err = PackagingError::Artifact {
            dir: PathBuf::from("out/zesty"),
            extension: "deb",
            found: 0,
        };
        assert_eq!(err.exit_code(), 1);
        assert!(!err.recovery_suggestions().is_empty());
    }

    #[test]
    fn test_hints_follow_configured_runtime() {
        let failed = PackagingError::ContainerFailed {
            runtime: "podman".to_string(),
            image: "fedora:26".to_string(),
            code: Some(1),
        };
        let hints = failed.recovery_suggestions();
        assert!(hints[0].contains("podman run --rm -it fedora:26"));
        assert!(hints.iter().all(|h| !h.contains("docker")));

        let down = PackagingError::RuntimeUnavailable {
            program: "podman".to_string(),
            reason: "no daemon".to_string(),
        };
        let hints = down.recovery_suggestions();
        assert!(hints.iter().all(|h| !h.contains("systemctl")));
        assert!(hints.iter().any(|h| h.contains("podman ps")));
    }

    #[test]
    fn test_docker_daemon_hint_only_for_docker() {
        let down = PackagingError::RuntimeUnavailable {
            program: "/usr/bin/docker".to_string(),
            reason: "no daemon".to_string(),
        };
        assert!(down.recovery_suggestions()[0].contains("systemctl start docker"));
    }

    #[test]
    fn test_missing_program_does_not_suggest_daemon() {
        let missing = PackagingError::RuntimeNotFound {
            program: "docker".to_string(),
            reason: "not on PATH".to_string(),
        };
        assert!(missing.to_string().contains("'docker' not found"));
        let hints = missing.recovery_suggestions();
        assert!(hints.iter().all(|h| !h.contains("daemon")));
        assert!(hints[0].contains("Install 'docker'"));
    }
}
