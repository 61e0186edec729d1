//! GitHub pull request endpoints.

use gh2md_core::models::PullRequest;
use tracing::{instrument, warn};

use crate::client::GitHubClient;
use crate::error::GitHubError;

impl GitHubClient {
  /// Fetch a pull request together with its comments.
  ///
  /// Not supported yet: always fails with [`GitHubError::NotImplemented`]
  /// without sending a request.
  #[instrument(skip(self), level = "debug")]
  pub async fn fetch_pull_request(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest, GitHubError> {
    warn!("Pull request #{} for {}/{} requested, but pull requests are not supported", number, owner, repo);
    Err(GitHubError::NotImplemented("fetching pull requests"))
  }
}
