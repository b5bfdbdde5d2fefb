//! Package build and smoke-test pipeline.
//!
//! For every [`Target`](crate::target::Target), in order:
//! 1. [`build_package`] runs the fpm builder image, writing one package to `out/<target>/`
//! 2. [`test_package`] installs that package into a plain distribution image
//!    and runs the CLI's `--help`
//!
//! [`run`] resets the output root and drives both steps across all targets,
//! stopping at the first failure.

mod artifacts;
mod build;
mod output_dir;
mod pipeline;

pub use artifacts::find_package;
pub use build::{build_package, build_run};
pub use output_dir::{create_target_dir, reset_output_root};
pub use pipeline::{BuiltPackage, RunSummary, run};
pub use smoke_test::{smoke_test_run, test_package};
