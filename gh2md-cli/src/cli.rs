//! # Command Line Interface
//!
//! Defines the `gh2md` arguments and how they layer over the config file to
//! produce the [`Config`] for a run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};
use gh2md_core::config::{Config, ConfigDirs, FileConfig};
use gh2md_core::consts::{ENV_API_URL, ENV_GH_TOKEN, ENV_GITHUB_TOKEN};
use tracing::debug;

use crate::output::ColorMode;

/// Top-level CLI command for gh2md
#[derive(Parser, Debug)]
#[command(name = "gh2md")]
#[command(about = "Render a GitHub issue and its comments as Markdown")]
#[command(long_about = "Fetches a GitHub issue together with its comments through the REST API and\n\
        writes it as a Markdown document with YAML frontmatter.\n\n\
        Accepted URLs look like https://github.com/{owner}/{repo}/issues/{number}.")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// GitHub issue URL to render
  #[arg(value_name = "URL")]
  pub url: String,

  /// Output file, or a directory for the default file name ('-' for stdout)
  #[arg(short = 'o', long = "output", value_name = "PATH")]
  pub output: Option<PathBuf>,

  /// GitHub token used for authentication [env: GITHUB_TOKEN, GH_TOKEN]
  #[arg(long, value_name = "TOKEN")]
  pub token: Option<String>,

  /// Leave comments out of the document
  #[arg(long = "no-comments")]
  pub no_comments: bool,

  /// Leave the YAML frontmatter out of the document
  #[arg(long = "no-meta")]
  pub no_meta: bool,

  /// Request timeout in seconds (0 disables the timeout)
  #[arg(long, value_name = "SECS")]
  pub timeout: Option<u64>,

  /// GitHub REST API base URL, for GitHub Enterprise
  #[arg(long = "api-url", value_name = "URL", env = ENV_API_URL)]
  pub api_url: Option<String>,

  /// Read settings from this file instead of the default config.toml
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Fail on timestamps that are not valid RFC 3339 instead of leaving them
  /// empty
  #[arg(long = "strict-timestamps")]
  pub strict_timestamps: bool,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// Build the run configuration: defaults, then the config file, then the
  /// environment and flags.
  pub fn resolve_config(&self) -> Result<Config> {
    let file_config = self.load_file_config()?;
    let env_token = env_token();
    self.resolve_config_with(file_config, env_token)
  }

  fn load_file_config(&self) -> Result<FileConfig> {
    match &self.config {
      Some(path) => FileConfig::load(path),
      None => {
        let dirs = ConfigDirs::new()?;
        debug!("Looking for config file at {}", dirs.config_path().display());
        dirs.load_file_config()
      }
    }
  }

  fn resolve_config_with(&self, file_config: FileConfig, env_token: Option<String>) -> Result<Config> {
    let mut config = Config {
      url: self.url.clone(),
      ..Config::default()
    };
    config.apply_file(file_config).context("Invalid config file")?;

    if let Some(token) = self.token.clone().or(env_token).filter(|t| !t.is_empty()) {
      config.token = Some(token);
    }
    if let Some(api_url) = &self.api_url {
      config.set_api_base_url(api_url)?;
    }
    if let Some(timeout) = self.timeout {
      config.timeout = timeout;
    }
    if self.no_comments {
      config.include_comments = false;
    }
    if self.no_meta {
      config.include_meta = false;
    }
    config.output_path = self.output.clone();

    Ok(config)
  }
}

/// Token from `GITHUB_TOKEN`, falling back to `GH_TOKEN`
fn env_token() -> Option<String> {
  [ENV_GITHUB_TOKEN, ENV_GH_TOKEN]
    .into_iter()
    .filter_map(|name| std::env::var(name).ok())
    .find(|token| !token.is_empty())
}
