//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication, request building, and response decoding for the GitHub
//! REST API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, header};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::consts::{ACCEPT, USER_AGENT};
use crate::error::GitHubError;
use crate::models::ApiErrorResponse;

/// How unparsable timestamps in API payloads are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampPolicy {
  /// Leave the field at its zero value (`None` for optional fields)
  #[default]
  Lenient,
  /// Fail the whole call with [`GitHubError::Timestamp`]
  Strict,
}

/// Represents a GitHub API client
///
/// Holds only its transport and settings, so it can be reused for any number
/// of sequential fetches.
#[derive(Debug, Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth_token: String,
  pub(crate) timeout: Option<Duration>,
  pub(crate) timestamp_policy: TimestampPolicy,
}

impl GitHubClient {
  /// Create a new anonymous client for an API host: api.github.com, GitHub
  /// Enterprise or a mock server
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    let base_url: String = base_url.into();
    Self {
      client: Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      auth_token: String::new(),
      timeout: None,
      timestamp_policy: TimestampPolicy::default(),
    }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Set the token sent as `Authorization: Bearer`. An empty token disables
  /// the header.
  pub fn set_auth_token(&mut self, token: impl Into<String>) {
    self.auth_token = token.into();
  }

  /// Set the per-request timeout in seconds; `0` disables it.
  pub fn set_timeout(&mut self, seconds: u64) {
    self.timeout = (seconds > 0).then(|| Duration::from_secs(seconds));
  }

  /// Replace the underlying HTTP client.
  ///
  /// The configured timeout still applies to each request.
  pub fn set_http_client(&mut self, client: Client) {
    self.client = client;
  }

  pub fn set_timestamp_policy(&mut self, policy: TimestampPolicy) {
    self.timestamp_policy = policy;
  }

  pub const fn timestamp_policy(&self) -> TimestampPolicy {
    self.timestamp_policy
  }

  /// Build a GET request carrying the standard GitHub headers
  pub(crate) fn get(&self, url: &str) -> RequestBuilder {
    let mut request = self
      .client
      .get(url)
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT);

    if !self.auth_token.is_empty() {
      request = request.bearer_auth(&self.auth_token);
    }

    if let Some(timeout) = self.timeout {
      request = request.timeout(timeout);
    }

    request
  }

  /// GET `url` and decode a successful response body as `T`.
  ///
  /// Non-2xx responses become [`GitHubError::Status`], carrying the message
  /// from GitHub's error envelope when it can be decoded.
  pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
    trace!("GitHub API URL: {}", url);

    let response = self.get(url).send().await?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      let message = serde_json::from_str::<ApiErrorResponse>(&body)
        .map(|envelope| envelope.message)
        .unwrap_or_default();
      warn!("Unexpected GitHub API error: HTTP {} - {}", status, message);

      return Err(GitHubError::Status {
        status: status.as_u16(),
        message,
      });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
  }
}

/// Create a GitHub client for `base_url`, authenticated when a non-empty
/// token is given
pub fn create_github_client(base_url: &str, token: Option<&str>) -> GitHubClient {
  let mut client = GitHubClient::with_base_url(base_url);
  if let Some(token) = token {
    client.set_auth_token(token);
  }
  client
}
