//! Command line interface for create_linux_packages.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::config::PackagingConfig;
use crate::container::{DockerCli, check_runtime_available};
use crate::error::Result;
use crate::packaging::{self, RunSummary};

/// Main CLI entry point
///
/// Returns the process exit code on a handled outcome; fatal errors are
/// returned for `main` to report.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    let output = RuntimeConfig::new();

    let config = PackagingConfig::from_env()?;
    check_runtime_available(&config.runtime).await?;

    let runtime = DockerCli::new(config.runtime.clone(), output.clone());
    let summary = packaging::run(&runtime, &config, &args.release_version, &output).await?;

    print_summary(&summary, &output);
    Ok(0)
}

fn print_summary(summary: &RunSummary, output: &RuntimeConfig) {
    output.section("Summary");
    for package in &summary.packages {
        output.indent(&format!("{:<10} {}", package.target.name, package.path.display()));
    }
    output.success_println(&format!(
        "{} package{} built and verified",
        summary.packages.len(),
        if summary.packages.len() == 1 { "" } else { "s" }
    ));
}
