//! Filesystem state probe.
//!
//! The only state a lifecycle run leaves behind is the presence or
//! absence of the install and build directories; this module reports it.

use std::path::PathBuf;

use serde::Serialize;

use crate::layout::Layout;

/// Presence of one lifecycle directory.
#[derive(Debug, Clone, Serialize)]
pub struct DirStatus {
  pub path: PathBuf,
  pub present: bool,
}

/// What a prior `install` has left on disk.
#[derive(Debug, Clone, Serialize)]
pub struct Status {
  pub install_dir: DirStatus,
  pub build_dir: DirStatus,
}

impl Status {
  /// True when both lifecycle directories exist.
  pub fn installed(&self) -> bool {
    self.install_dir.present && self.build_dir.present
  }
}

/// Probe which lifecycle directories currently exist. Read-only.
pub fn probe_status(layout: &Layout) -> Status {
  Status {
    install_dir: probe_dir(&layout.install_dir),
    build_dir: probe_dir(&layout.build_dir),
  }
}

fn probe_dir(path: &std::path::Path) -> DirStatus {
  DirStatus {
    path: path.to_path_buf(),
    present: path.is_dir(),
  }
}
