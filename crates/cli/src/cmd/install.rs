//! Implementation of the `walcs install` command.
//!
//! Installs the vendored dependency into its install directory, then
//! configures and builds the project in the build directory.

use std::time::Instant;

use anyhow::Result;

use walcs_core::step::install_plan;

use crate::output::{self, format_duration};

use super::RunOptions;

/// Execute the install command.
///
/// # Errors
///
/// Returns an error if the layout cannot be resolved or any step fails;
/// the first failed step aborts the rest of the sequence.
pub fn cmd_install(options: &RunOptions) -> Result<()> {
  let start = Instant::now();
  let (config, layout) = super::resolve(options)?;
  let plan = install_plan(&layout, &config);

  let steps_run = super::run_plan(&plan, options)?;
  if options.dry_run {
    return Ok(());
  }

  output::print_success(&format!(
    "Install complete: {} step(s) in {}",
    steps_run,
    format_duration(start.elapsed())
  ));

  Ok(())
}
