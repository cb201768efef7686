//! Implementation of the `walcs clean` command.
//!
//! Removes the dependency install directory and the build directory.
//! Both removals are idempotent: cleaning an already-clean tree
//! succeeds.

use anyhow::Result;

use walcs_core::step::clean_plan;

use crate::output;

use super::RunOptions;

/// Execute the clean command.
pub fn cmd_clean(options: &RunOptions) -> Result<()> {
  let (_config, layout) = super::resolve(options)?;
  let plan = clean_plan(&layout);

  super::run_plan(&plan, options)?;
  if options.dry_run {
    return Ok(());
  }

  output::print_success("Clean complete");

  Ok(())
}
