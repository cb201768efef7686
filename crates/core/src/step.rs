//! Lifecycle plans: ordered phases of filesystem and subprocess steps.
//!
//! Plan construction is pure; nothing here touches the filesystem or
//! spawns processes. Execution lives in [`crate::exec`]. The one
//! exception is [`preflight_update`], a read-only probe the CLI runs
//! before executing an update plan.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Config;
use crate::error::Error;
use crate::layout::Layout;

/// One effectful operation within a phase.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepKind {
  /// Create a directory and any missing parents; an already-present
  /// directory is success.
  CreateDir { path: PathBuf },
  /// Recursively remove a directory; an already-absent directory is
  /// success.
  RemoveDir { path: PathBuf },
  /// Run a child process to completion inside `cwd`.
  Run {
    program: PathBuf,
    args: Vec<PathBuf>,
    cwd: PathBuf,
  },
}

/// A named step. The name is the identifier failure reports carry.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
  pub name: &'static str,
  pub kind: StepKind,
}

/// A human-readable banner plus the steps run under it.
#[derive(Debug, Clone, Serialize)]
pub struct Phase {
  pub banner: String,
  pub steps: Vec<Step>,
}

/// The ordered phases one lifecycle command expands to.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
  pub phases: Vec<Phase>,
}

impl Plan {
  /// Total number of steps across all phases.
  pub fn step_count(&self) -> usize {
    self.phases.iter().map(|p| p.steps.len()).sum()
  }
}

/// Plan for `install`: install the dependency, then configure and build
/// the project.
pub fn install_plan(layout: &Layout, config: &Config) -> Plan {
  Plan {
    phases: vec![
      Phase {
        banner: format!("Installing {}", layout.dep_name()),
        steps: vec![
          Step {
            name: "create install dir",
            kind: StepKind::CreateDir {
              path: layout.install_dir.clone(),
            },
          },
          Step {
            name: "run installer",
            kind: StepKind::Run {
              program: layout.installer.clone(),
              args: vec![layout.install_dir.clone()],
              cwd: layout.dep_dir.clone(),
            },
          },
        ],
      },
      Phase {
        banner: format!("Building {}", layout.project_name()),
        steps: vec![
          Step {
            name: "create build dir",
            kind: StepKind::CreateDir {
              path: layout.build_dir.clone(),
            },
          },
          Step {
            name: "configure",
            kind: StepKind::Run {
              program: PathBuf::from(&config.build.configure),
              args: vec![layout.root.clone()],
              cwd: layout.build_dir.clone(),
            },
          },
          Step {
            name: "build",
            kind: StepKind::Run {
              program: PathBuf::from(&config.build.tool),
              args: vec![],
              cwd: layout.build_dir.clone(),
            },
          },
        ],
      },
    ],
  }
}

/// Plan for `clean`: remove the dependency install and the build
/// directory. Both removals are idempotent.
pub fn clean_plan(layout: &Layout) -> Plan {
  Plan {
    phases: vec![
      Phase {
        banner: format!("Removing {} install", layout.dep_name()),
        steps: vec![Step {
          name: "remove install dir",
          kind: StepKind::RemoveDir {
            path: layout.install_dir.clone(),
          },
        }],
      },
      Phase {
        banner: "Removing build directory".to_string(),
        steps: vec![Step {
          name: "remove build dir",
          kind: StepKind::RemoveDir {
            path: layout.build_dir.clone(),
          },
        }],
      },
    ],
  }
}

/// Plan for `update`: re-run the build tool in the existing build
/// directory, without reconfiguring.
pub fn update_plan(layout: &Layout, config: &Config) -> Plan {
  Plan {
    phases: vec![Phase {
      banner: format!("Rebuilding {}", layout.project_name()),
      steps: vec![Step {
        name: "build",
        kind: StepKind::Run {
          program: PathBuf::from(&config.build.tool),
          args: vec![],
          cwd: layout.build_dir.clone(),
        },
      }],
    }],
  }
}

/// Check that an update plan can run: the build directory must exist.
///
/// Run before executing [`update_plan`] so the failure is a distinct
/// error instead of the build tool dying on a missing working directory.
pub fn preflight_update(layout: &Layout) -> Result<(), Error> {
  if layout.build_dir.is_dir() {
    Ok(())
  } else {
    Err(Error::BuildDirMissing {
      path: layout.build_dir.clone(),
    })
  }
}
