//! Absolute path resolution for a project tree.
//!
//! Every subprocess invocation receives explicit absolute paths and an
//! explicit working directory; the orchestrator never changes its own
//! current working directory.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Error;

/// Absolute locations derived from the project root and configuration.
#[derive(Debug, Clone)]
pub struct Layout {
  /// Canonicalized project root.
  pub root: PathBuf,
  /// Dependency checkout.
  pub dep_dir: PathBuf,
  /// Installer script inside the dependency checkout.
  pub installer: PathBuf,
  /// Dependency install target.
  pub install_dir: PathBuf,
  /// Project build directory.
  pub build_dir: PathBuf,
}

impl Layout {
  /// Resolve the layout for `root` using `config`.
  ///
  /// # Errors
  ///
  /// Returns `Error::Filesystem` when the project root cannot be
  /// canonicalized (typically: it does not exist).
  pub fn resolve(root: &Path, config: &Config) -> Result<Self, Error> {
    let root = root.canonicalize().map_err(|e| Error::Filesystem {
      op: "resolve",
      path: root.to_path_buf(),
      source: e,
    })?;

    let dep_dir = root.join(&config.dependency.path);
    let installer = dep_dir.join(&config.dependency.installer);
    let install_dir = dep_dir.join(&config.dependency.install_subdir);
    let build_dir = root.join(&config.build.dir);

    Ok(Self {
      root,
      dep_dir,
      installer,
      install_dir,
      build_dir,
    })
  }

  /// Display name of the dependency, used in phase banners.
  pub fn dep_name(&self) -> String {
    name_of(&self.dep_dir, "dependency")
  }

  /// Display name of the project, used in phase banners.
  pub fn project_name(&self) -> String {
    name_of(&self.root, "project")
  }
}

fn name_of(path: &Path, fallback: &str) -> String {
  path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .unwrap_or_else(|| fallback.to_string())
}
