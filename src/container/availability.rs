//! Preflight check for the container runtime.

use crate::error::{PackagingError, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Timeout for the `info` check
/// Quick daemon availability check shouldn't take long
const RUNTIME_INFO_TIMEOUT: Duration = Duration::from_secs(5);

/// Checks that `program` is installed and its daemon answers `info`.
///
/// # Returns
///
/// * `Ok(())` - Runtime is available
/// * `Err(RuntimeNotFound)` - Not on PATH
/// * `Err(RuntimeUnavailable)` - Not responding or timed out
pub async fn check_runtime_available(program: &str) -> Result<()> {
    let resolved = which::which(program).map_err(|e| PackagingError::RuntimeNotFound {
        program: program.to_string(),
        reason: e.to_string(),
    })?;

    log::debug!("Using container runtime at {}", resolved.display());

    let status_result = timeout(
        RUNTIME_INFO_TIMEOUT,
        Command::new(&resolved)
            .arg("info")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status(),
    )
    .await;

    match status_result {
        Err(_) => Err(PackagingError::RuntimeUnavailable {
            program: program.to_string(),
            reason: format!(
                "'{program} info' timed out after {} seconds; the daemon is not responding",
                RUNTIME_INFO_TIMEOUT.as_secs()
            ),
        }),
        Ok(Ok(status)) if status.success() => Ok(()),
        Ok(Ok(status)) => Err(PackagingError::RuntimeUnavailable {
            program: program.to_string(),
            reason: format!(
                "'{program} info' exited with code {}; is the daemon running?",
                status.code().unwrap_or(-1)
            ),
        }),
        Ok(Err(e)) => Err(PackagingError::Spawn {
            program: program.to_string(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_program_is_not_found() {
        let result = check_runtime_available("definitely-not-a-container-runtime").await;
        assert!(matches!(
            result,
            Err(PackagingError::RuntimeNotFound { ref program, .. })
                if program == "definitely-not-a-container-runtime"
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_info_is_unavailable() {
        let result = check_runtime_available("false").await;
        assert!(matches!(
            result,
            Err(PackagingError::RuntimeUnavailable { .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_succeeding_info_is_available() {
        assert!(check_runtime_available("true").await.is_ok());
    }
}
