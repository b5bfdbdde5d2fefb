//! # create_linux_packages
//!
//! Builds Debian and RPM packages of the kubernaut CLI and smoke-tests them,
//! entirely through containers.
//!
//! ## Pipeline
//!
//! For each supported distribution (Ubuntu xenial, yakkety, zesty; Fedora 25, 26):
//!
//! - **Build**: run an `alanfranz/fpm-within-docker` image with the packaging
//!   directory, the source tree and `out/<distro>/` mounted; `build-package.sh`
//!   writes exactly one package to `out/<distro>/`
//! - **Test**: install that package into the plain distribution image and run
//!   `kubernaut --help`
//!
//! Targets run strictly one after another and the first failure aborts the run.
//!
//! ## Usage
//!
//! ```bash
//! create_linux_packages 1.2.3
//! PACKAGING_DIR=packaging CONTAINER_RUNTIME=podman create_linux_packages 1.2.3
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod container;
pub mod error;
pub mod packaging;
pub mod target;

// Re-export main types for public API
pub use config::PackagingConfig;
pub use container::{ContainerRun, ContainerRuntime, DockerCli};
pub use error::{PackagingError, Result};
pub use packaging::{BuiltPackage, RunSummary};
pub use target::{PackageFormat, TARGETS, Target};
