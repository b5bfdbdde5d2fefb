//! Container runtime integration.
//!
//! Every build and smoke test is a single `docker run --rm ...` invocation.
//! [`ContainerRun`] describes one invocation and renders its argument list;
//! [`ContainerRuntime`] executes it. [`DockerCli`] is the real implementation,
//! tests substitute their own.
//!
//! # Module Structure
//!
//! - `availability` - Runtime preflight check
//! - `docker` - `ContainerRuntime` backed by the docker CLI
//! - `guard` - RAII guard for container cleanup on interrupt
//! - `invocation` - Invocation descriptor and argument rendering

mod availability;
mod docker;
mod guard;
mod invocation;

pub use availability::check_runtime_available;
pub use docker::DockerCli;
pub use invocation::{ContainerRun, Mount, MountMode};

use crate::error::Result;

/// Executes container invocations to completion.
///
/// Implementations must block (asynchronously) until the container exits and
/// report a non-zero exit as [`crate::PackagingError::ContainerFailed`].
#[allow(async_fn_in_trait)]
pub trait ContainerRuntime {
    /// Runs the container and waits for it to exit.
    async fn run(&self, run: &ContainerRun) -> Result<()>;
}
