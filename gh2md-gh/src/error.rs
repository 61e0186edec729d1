//! Errors returned by the GitHub client.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API
#[derive(Debug, Error)]
pub enum GitHubError {
  /// The request could not be built or sent, or the body could not be read.
  /// Timeouts land here too.
  #[error("failed to send request to GitHub")]
  Transport(#[from] reqwest::Error),

  /// GitHub answered with a non-2xx status.
  ///
  /// `message` comes from the error envelope when it could be decoded and is
  /// empty otherwise.
  #[error("unexpected status code {status}{}", message_suffix(.message))]
  Status { status: u16, message: String },

  /// The response body was not the JSON we expected.
  #[error("failed to decode GitHub response")]
  Decode(#[from] serde_json::Error),

  /// A timestamp failed to parse under [`crate::TimestampPolicy::Strict`].
  #[error("invalid {field} timestamp: '{value}'")]
  Timestamp {
    field: &'static str,
    value: String,
    /// `None` when the field was missing or null
    #[source]
    source: Option<chrono::ParseError>,
  },

  #[error("{0} is not implemented yet")]
  NotImplemented(&'static str),
}

fn message_suffix(message: &str) -> String {
  if message.is_empty() {
    String::new()
  } else {
    format!(": {message}")
  }
}

impl GitHubError {
  /// The HTTP status for [`GitHubError::Status`] errors.
  pub const fn status(&self) -> Option<u16> {
    match self {
      Self::Status { status, .. } => Some(*status),
      _ => None,
    }
  }

  pub fn is_timeout(&self) -> bool {
    matches!(self, Self::Transport(err) if err.is_timeout())
  }
}
