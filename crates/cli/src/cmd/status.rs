//! Implementation of the `walcs status` command.
//!
//! Read-only: reports which lifecycle directories currently exist, as
//! text or JSON.

use anyhow::Result;

use walcs_core::status::{DirStatus, probe_status};

use crate::output::{self, print_info, print_stat};

use super::RunOptions;

/// Execute the status command.
pub fn cmd_status(options: &RunOptions) -> Result<()> {
  let (_config, layout) = super::resolve(options)?;
  let status = probe_status(&layout);

  if options.format.is_json() {
    output::print_json(&status)?;
    return Ok(());
  }

  print_stat("Install dir", &describe(&status.install_dir));
  print_stat("Build dir", &describe(&status.build_dir));

  if !status.installed() {
    println!();
    print_info("Run 'walcs install' to build the project.");
  }

  Ok(())
}

fn describe(dir: &DirStatus) -> String {
  let presence = if dir.present { "present" } else { "absent" };
  format!("{} ({})", dir.path.display(), presence)
}
