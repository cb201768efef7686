//! Implementation of the `walcs update` command.
//!
//! Re-runs the build tool in the existing build directory without
//! reconfiguring. Requires a prior `install`.

use std::time::Instant;

use anyhow::Result;

use walcs_core::step::{preflight_update, update_plan};

use crate::output::{self, format_duration};

use super::RunOptions;

/// Execute the update command.
///
/// # Errors
///
/// Returns `BuildDirMissing` when no build directory exists yet, and
/// otherwise any build-tool failure.
pub fn cmd_update(options: &RunOptions) -> Result<()> {
  let start = Instant::now();
  let (config, layout) = super::resolve(options)?;
  let plan = update_plan(&layout, &config);

  if !options.dry_run {
    preflight_update(&layout)?;
  }

  super::run_plan(&plan, options)?;
  if options.dry_run {
    return Ok(());
  }

  output::print_success(&format!(
    "Update complete in {}",
    format_duration(start.elapsed())
  ));

  Ok(())
}
