//! # Configuration Management
//!
//! Handles the gh2md runtime configuration: built-in defaults, the optional
//! `config.toml` in the platform config directory, and the overrides the CLI
//! applies on top from the environment and command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::consts::{CONFIG_FILE_NAME, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Resolved configuration for a single gh2md run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// The GitHub URL to fetch
  pub url: String,
  /// Token sent as `Authorization: Bearer`; requests are anonymous without it
  pub token: Option<String>,
  /// Explicit output file (`-` for stdout)
  pub output_path: Option<PathBuf>,
  /// Directory for the default filename when no output file is given
  pub output_dir: Option<PathBuf>,
  pub include_comments: bool,
  pub include_meta: bool,
  /// Request timeout in seconds
  pub timeout: u64,
  /// GitHub REST API base URL without a trailing slash
  pub api_base_url: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      url: String::new(),
      token: None,
      output_path: None,
      output_dir: None,
      include_comments: true,
      include_meta: true,
      timeout: DEFAULT_TIMEOUT_SECS,
      api_base_url: DEFAULT_API_BASE_URL.to_string(),
    }
  }
}

impl Config {
  /// Merge settings from a config file over the current values.
  ///
  /// Only keys present in the file are applied.
  pub fn apply_file(&mut self, file: FileConfig) -> Result<()> {
    if let Some(token) = file.token.filter(|t| !t.is_empty()) {
      self.token = Some(token);
    }
    if let Some(include_comments) = file.include_comments {
      self.include_comments = include_comments;
    }
    if let Some(include_meta) = file.include_meta {
      self.include_meta = include_meta;
    }
    if let Some(timeout) = file.timeout {
      self.timeout = timeout;
    }
    if let Some(api_base_url) = file.api_base_url {
      self.set_api_base_url(&api_base_url)?;
    }
    if let Some(output_dir) = file.output_dir {
      self.output_dir = Some(output_dir);
    }
    Ok(())
  }

  /// Validate and store a new API base URL.
  pub fn set_api_base_url(&mut self, input: &str) -> Result<()> {
    self.api_base_url = normalize_api_base_url(input)?;
    Ok(())
  }
}

/// Settings read from `config.toml`
///
/// Every key is optional; unknown keys are rejected so typos surface early.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
  pub token: Option<String>,
  pub include_comments: Option<bool>,
  pub include_meta: Option<bool>,
  pub timeout: Option<u64>,
  pub api_base_url: Option<String>,
  pub output_dir: Option<PathBuf>,
}

impl FileConfig {
  /// Load a config file, failing if it is missing or malformed.
  pub fn load(path: &Path) -> Result<Self> {
    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config from {}", path.display()))
  }
}

/// Check that `input` is an absolute http(s) URL and strip trailing slashes.
pub fn normalize_api_base_url(input: &str) -> Result<String> {
  let trimmed = input.trim();
  let url = Url::parse(trimmed).with_context(|| format!("Invalid API base URL: '{trimmed}'"))?;

  if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
    return Err(anyhow::anyhow!(
      "Invalid API base URL: '{trimmed}'. Expected an http or https URL."
    ));
  }

  Ok(trimmed.trim_end_matches('/').to_string())
}

/// Represents the configuration directory for the gh2md application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Resolve the platform config directory
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "gh2md").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Use an explicit directory instead of the platform default
  pub fn from_dir<P: Into<PathBuf>>(config_dir: P) -> Self {
    Self {
      config_dir: config_dir.into(),
    }
  }

  /// Get the path to the config file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE_NAME)
  }

  /// Load the config file or return defaults when it does not exist
  pub fn load_file_config(&self) -> Result<FileConfig> {
    let config_path = self.config_path();

    if config_path.exists() {
      FileConfig::load(&config_path)
    } else {
      Ok(FileConfig::default())
    }
  }
}

#[cfg(test)]
mod tests {
  use gh2md_test_utils::ConfigFileGuard;

  use super::*;

  #[test]
  fn test_default_config() {
    let config = Config::default();
    assert!(config.include_comments);
    assert!(config.include_meta);
    assert_eq!(config.timeout, 30);
    assert_eq!(config.api_base_url, "https://api.github.com");
    assert!(config.token.is_none());
    assert!(config.output_path.is_none());
  }

  #[test]
  fn test_missing_config_file_uses_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dirs = ConfigDirs::from_dir(temp_dir.path());

    let file_config = dirs.load_file_config().unwrap();
    assert_eq!(file_config, FileConfig::default());
  }

  #[test]
  fn test_load_config_file_and_apply() {
    let guard = ConfigFileGuard::new(
      r#"
token = "ghp_from_file"
include_comments = false
timeout = 5
api_base_url = "https://github.example.com/api/v3/"
output_dir = "notes"
"#,
    );
    let dirs = ConfigDirs::from_dir(guard.config_dir());

    let file_config = dirs.load_file_config().unwrap();
    let mut config = Config::default();
    config.apply_file(file_config).unwrap();

    assert_eq!(config.token.as_deref(), Some("ghp_from_file"));
    assert!(!config.include_comments);
    assert!(config.include_meta);
    assert_eq!(config.timeout, 5);
    assert_eq!(config.api_base_url, "https://github.example.com/api/v3");
    assert_eq!(config.output_dir, Some(PathBuf::from("notes")));
  }

  #[test]
  fn test_empty_token_in_file_is_ignored() {
    let mut config = Config {
      token: Some("existing".to_string()),
      ..Default::default()
    };
    config
      .apply_file(FileConfig {
        token: Some(String::new()),
        ..Default::default()
      })
      .unwrap();

    assert_eq!(config.token.as_deref(), Some("existing"));
  }

  #[test]
  fn test_malformed_config_file() {
    let guard = ConfigFileGuard::new("timeout = \"soon\"");
    let dirs = ConfigDirs::from_dir(guard.config_dir());

    let err = dirs.load_file_config().unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
  }

  #[test]
  fn test_unknown_key_is_rejected() {
    let guard = ConfigFileGuard::new("include_reactions = true");
    assert!(FileConfig::load(&guard.config_path()).is_err());
  }

  #[test]
  fn test_normalize_api_base_url() {
    assert_eq!(
      normalize_api_base_url("https://api.github.com/").unwrap(),
      "https://api.github.com"
    );
    assert_eq!(
      normalize_api_base_url("http://127.0.0.1:8080").unwrap(),
      "http://127.0.0.1:8080"
    );
    assert!(normalize_api_base_url("api.github.com").is_err());
    assert!(normalize_api_base_url("ftp://api.github.com").is_err());
    assert!(normalize_api_base_url("").is_err());
  }

  #[test]
  fn test_invalid_base_url_in_file() {
    let mut config = Config::default();
    let result = config.apply_file(FileConfig {
      api_base_url: Some("not a url".to_string()),
      ..Default::default()
    });

    assert!(result.is_err());
    assert_eq!(config.api_base_url, "https://api.github.com");
  }
}
