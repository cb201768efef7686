//! Project configuration (`walcs.toml`).
//!
//! Every field defaults to the layout of the tree this tool was built
//! for, so a project without a config file works out of the box. A
//! missing file means "all defaults"; a malformed file is an error.

use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// Name of the per-project configuration file.
pub const CONFIG_FILE: &str = "walcs.toml";

/// Top-level project configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
  pub dependency: DependencyConfig,
  pub build: BuildConfig,
}

/// Where the vendored dependency lives and how it is installed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DependencyConfig {
  /// Dependency checkout, relative to the project root.
  pub path: String,
  /// Installer script inside `path`; receives the install directory as
  /// its only argument.
  pub installer: String,
  /// Install target created under `path`.
  pub install_subdir: String,
}

impl Default for DependencyConfig {
  fn default() -> Self {
    Self {
      path: "external/sdsl-lite".to_string(),
      installer: "install.sh".to_string(),
      install_subdir: "install_dir".to_string(),
    }
  }
}

/// How the project itself is configured and built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
  /// Build directory, relative to the project root.
  pub dir: String,
  /// Configuration generator; receives the project root as its argument
  /// and runs inside the build directory.
  pub configure: String,
  /// Build tool; runs with no arguments inside the build directory.
  pub tool: String,
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      dir: "build".to_string(),
      configure: "cmake".to_string(),
      tool: "make".to_string(),
    }
  }
}

impl Config {
  /// Load the configuration at `path`.
  ///
  /// Returns defaults when the file does not exist.
  ///
  /// # Errors
  ///
  /// Returns `Error::Config` when the file exists but cannot be read or
  /// parsed.
  pub fn load(path: &Path) -> Result<Self, Error> {
    let raw = match std::fs::read_to_string(path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
      Err(e) => {
        return Err(Error::Config {
          path: path.to_path_buf(),
          message: e.to_string(),
        });
      }
    };

    toml::from_str(&raw).map_err(|e| Error::Config {
      path: path.to_path_buf(),
      message: e.to_string(),
    })
  }
}
