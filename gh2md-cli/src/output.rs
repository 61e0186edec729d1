//! # Output Formatting
//!
//! Status lines for the terminal, with colors and emojis. The rendered
//! Markdown itself never goes through these helpers.

use std::path::Path;

use owo_colors::OwoColorize;

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode to every `owo-colors` style in the process
  pub fn apply(self) {
    match self {
      Self::Yes | Self::Always => owo_colors::set_override(true),
      Self::No | Self::Never => owo_colors::set_override(false),
      Self::Auto => owo_colors::unset_override(),
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  eprintln!("{} {}", check.if_supports_color(owo_colors::Stream::Stderr, |s| s.green()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.if_supports_color(owo_colors::Stream::Stderr, |s| s.red()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  eprintln!(
    "{} {}",
    warning.if_supports_color(owo_colors::Stream::Stderr, |s| s.yellow()),
    message
  );
}

/// Format a file path
pub fn format_path(path: &Path) -> String {
  path
    .display()
    .if_supports_color(owo_colors::Stream::Stderr, |s| s.bright_green())
    .to_string()
}

/// Format an `owner/repo#number` reference
pub fn format_reference(reference: &str) -> String {
  reference
    .if_supports_color(owo_colors::Stream::Stderr, |s| s.bright_cyan())
    .to_string()
}
