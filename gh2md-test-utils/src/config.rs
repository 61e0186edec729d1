//! Temporary configuration files for testing
//!
//! Tests point `ConfigDirs::from_dir` (or the CLI's `--config` flag) at the
//! guard's directory instead of the user's real config directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A `config.toml` written into a per-test temporary directory
///
/// The directory and file are removed when the guard is dropped.
pub struct ConfigFileGuard {
  /// The temporary directory acting as the config directory
  pub temp_dir: TempDir,
}

impl ConfigFileGuard {
  /// Name of the config file inside the guard's directory
  pub const FILE_NAME: &'static str = "config.toml";

  /// Create a new config directory containing `config.toml` with `content`
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    fs::write(temp_dir.path().join(Self::FILE_NAME), content).expect("Failed to write config file");

    Self { temp_dir }
  }

  /// Get the path to the config directory
  pub fn config_dir(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Get the path to the config file
  pub fn config_path(&self) -> PathBuf {
    self.temp_dir.path().join(Self::FILE_NAME)
  }
}
