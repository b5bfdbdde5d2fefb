//! [`ContainerRuntime`] backed by the docker command line client.

use super::guard::ContainerGuard;
use super::{ContainerRun, ContainerRuntime};
use crate::cli::RuntimeConfig;
use crate::error::{PackagingError, Result};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Runs containers through a docker-compatible CLI.
///
/// Container stdout is streamed line by line through the output manager;
/// stderr goes straight to the terminal.
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
    output: RuntimeConfig,
}

impl DockerCli {
    /// Creates a runtime invoking `program` (usually `docker`).
    pub fn new(program: impl Into<String>, output: RuntimeConfig) -> Self {
        Self {
            program: program.into(),
            output,
        }
    }

    /// Echoes container output line by line until the pipe closes.
    ///
    /// Lines are raw bytes; invalid UTF-8 is replaced, never fatal. The pipe
    /// must stay open until EOF or the container is killed by SIGPIPE.
    async fn stream_output<R: AsyncRead + Unpin>(&self, stdout: R) {
        let mut reader = BufReader::new(stdout);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf).await {
                Ok(0) => break,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&buf);
                    self.output.indent(line.trim_end_matches(['\n', '\r']));
                }
                Err(e) => {
                    log::warn!("Stopped echoing container output: {e}");
                    if let Err(e) = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await {
                        log::warn!("Failed to drain container output: {e}");
                    }
                    break;
                }
            }
        }
    }
}

impl ContainerRuntime for DockerCli {
    async fn run(&self, run: &ContainerRun) -> Result<()> {
        let args = run.to_args();
        log::debug!("{} {:?}", self.program, args);

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PackagingError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        let mut guard = ContainerGuard::new(&self.program, &run.name);
        let stdout = child.stdout.take();

        let completion = async {
            if let Some(stdout) = stdout {
                self.stream_output(stdout).await;
            }
            child.wait().await
        };

        let status = tokio::select! {
            status = completion => status.map_err(|e| PackagingError::Spawn {
                program: self.program.clone(),
                source: e,
            })?,
            _ = tokio::signal::ctrl_c() => {
                self.output
                    .warning_println(&format!("Interrupted, removing container {}", run.name));
                // guard fires on return, child is killed on drop
                return Err(PackagingError::Interrupted {
                    image: run.image.clone(),
                });
            }
        };

        guard.disarm();

        if status.success() {
            Ok(())
        } else {
            Err(PackagingError::ContainerFailed {
                runtime: self.program.clone(),
                image: run.image.clone(),
                code: status.code(),
            })
        }
    }
}
