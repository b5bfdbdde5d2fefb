//! RAII guard for container cleanup.
//!
//! Force-removes a running container when the invocation is abandoned
//! (Ctrl-C) before the container exited on its own.

use std::process::{Command, Stdio};
use std::time::Duration;
use wait_timeout::ChildExt;

/// Upper bound on how long cleanup may block
const CLEANUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Removes the named container on drop unless disarmed.
///
/// Containers run with `--rm`, so a guard is disarmed once the container
/// exits normally and only fires on the abort path.
pub(super) struct ContainerGuard {
    program: String,
    name: String,
    armed: bool,
}

impl ContainerGuard {
    pub(super) fn new(program: &str, name: &str) -> Self {
        Self {
            program: program.to_string(),
            name: name.to_string(),
            armed: true,
        }
    }

    /// The container exited by itself; nothing to clean up.
    pub(super) fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for ContainerGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        log::debug!("Removing container '{}'", self.name);

        // spawn() + wait_timeout() so an unresponsive daemon cannot hang drop
        let mut child = match Command::new(&self.program)
            .args(["rm", "-f", &self.name])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(_) => return,
        };

        match child.wait_timeout(CLEANUP_TIMEOUT) {
            Ok(Some(status)) => {
                if !status.success() {
                    log::warn!(
                        "Failed to clean up container '{}' (exit code: {})",
                        self.name,
                        status.code().unwrap_or(-1)
                    );
                }
            }
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();

                log::warn!(
                    "Timed out cleaning up container '{}' after {} seconds. \
                     The container daemon may be down.",
                    self.name,
                    CLEANUP_TIMEOUT.as_secs()
                );
            }
            Err(_) => {
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }
}
