//! GitHub Issues API endpoint implementations.

use gh2md_core::models::{Comment, Issue};
use tracing::{debug, info, instrument};

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::models::{ApiComment, ApiIssue};

impl GitHubClient {
  /// Fetch an issue together with its comments.
  ///
  /// Issues two requests one after the other: the issue, then its comments.
  /// `comments_count` keeps the value the issue endpoint reported even when
  /// it differs from the number of comments actually returned.
  ///
  /// # Errors
  ///
  /// Fails without a partial result if either request cannot be sent,
  /// returns a non-2xx status, or cannot be decoded.
  #[instrument(skip(self), level = "debug")]
  pub async fn fetch_issue(&self, owner: &str, repo: &str, number: u64) -> Result<Issue, GitHubError> {
    info!("Fetching issue #{} for {}/{}", number, owner, repo);

    let mut issue = self.get_issue(owner, repo, number).await?;
    let comments = self.list_issue_comments(owner, repo, number).await?;

    if issue.comments_count != comments.len() as u64 {
      debug!(
        "Issue #{} reports {} comments but {} were returned",
        number,
        issue.comments_count,
        comments.len()
      );
    }

    issue.comments = comments;
    Ok(issue)
  }

  /// Get a specific issue by number, without its comments.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<Issue, GitHubError> {
    let url = format!("{}/repos/{}/{}/issues/{}", self.base_url, owner, repo, number);

    let issue: ApiIssue = self.get_json(&url).await?;
    issue.into_issue(self.timestamp_policy)
  }

  /// List the comments on an issue in the order GitHub returns them.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_issue_comments(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<Comment>, GitHubError> {
    let url = format!("{}/repos/{}/{}/issues/{}/comments", self.base_url, owner, repo, number);

    let comments: Vec<ApiComment> = self.get_json(&url).await?;
    debug!("Received {} comments", comments.len());

    comments
      .into_iter()
      .map(|comment| comment.into_comment(self.timestamp_policy))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use anyhow::Result;
  use chrono::{DateTime, TimeZone, Utc};
  use gh2md_test_utils::fixtures::{ISSUE_NUMBER, OWNER, REPO, error_json};
  use gh2md_test_utils::{comments_json, issue_json, mount_comments, mount_issue, mount_issue_with_comments};
  use serde_json::json;
  use wiremock::matchers::{header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::client::TimestampPolicy;
  use crate::consts::{ACCEPT, USER_AGENT};

  fn create_test_client(mock_server: &MockServer) -> GitHubClient {
    GitHubClient::with_base_url(mock_server.uri())
  }

  #[tokio::test]
  async fn test_fetch_issue_success() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_issue_with_comments(&mock_server).await;

    let client = create_test_client(&mock_server);
    let issue = client.fetch_issue(OWNER, REPO, ISSUE_NUMBER).await?;

    assert_eq!(issue.title, "Test Issue Title");
    assert_eq!(issue.id, 12345);
    assert_eq!(issue.state, "open");
    assert_eq!(issue.url, "https://github.com/testowner/testrepo/issues/12345");
    assert_eq!(issue.body, "This is a test issue body.");
    assert_eq!(issue.author, "testuser");
    assert_eq!(issue.author_url, "https://github.com/testuser");
    assert_eq!(issue.comments_count, 2);
    assert_eq!(issue.labels, vec!["bug", "enhancement"]);
    assert_eq!(issue.assignees, vec!["assignee1", "assignee2"]);
    assert_eq!(issue.milestone.as_deref(), Some("v1.0"));
    assert_eq!(issue.created_at, Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
    assert!(issue.closed_at.is_none());

    assert_eq!(issue.comments.len(), 2);
    assert_eq!(issue.comments[0].author, "commenter1");
    assert_eq!(issue.comments[0].body, "First comment");
    assert_eq!(issue.comments[1].author, "commenter2");
    assert_eq!(issue.comments[1].body, "Second comment");
    assert_eq!(
      issue.comments[1].updated_at,
      Utc.with_ymd_and_hms(2024, 1, 15, 13, 0, 0).unwrap()
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_fetch_issue_sends_headers_to_both_endpoints() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/repos/owner/repo/issues/7"))
      .and(header("accept", ACCEPT))
      .and(header("user-agent", USER_AGENT))
      .and(header("authorization", "Bearer test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(issue_json()))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/repos/owner/repo/issues/7/comments"))
      .and(header("accept", ACCEPT))
      .and(header("authorization", "Bearer test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
      .expect(1)
      .mount(&mock_server)
      .await;

    let mut client = create_test_client(&mock_server);
    client.set_auth_token("test_token");

    let issue = client.fetch_issue("owner", "repo", 7).await?;
    assert!(issue.comments.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_comments_count_is_not_reconciled() -> Result<()> {
    let mock_server = MockServer::start().await;

    let mut payload = issue_json();
    payload["comments"] = json!(45);
    mount_issue(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, payload).await;
    mount_comments(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, comments_json()).await;

    let client = create_test_client(&mock_server);
    let issue = client.fetch_issue(OWNER, REPO, ISSUE_NUMBER).await?;

    assert_eq!(issue.comments_count, 45);
    assert_eq!(issue.comments.len(), 2);

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_not_found() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_issue(&mock_server, "owner", "repo", 404, 404, error_json("Not Found")).await;

    let client = create_test_client(&mock_server);
    let err = client.fetch_issue("owner", "repo", 404).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("Not Found"));

    // The comments endpoint is never reached
    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);

    Ok(())
  }

  #[tokio::test]
  async fn test_comments_failure_fails_the_fetch() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_issue(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, issue_json()).await;
    mount_comments(
      &mock_server,
      OWNER,
      REPO,
      ISSUE_NUMBER,
      500,
      error_json("Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_issue(OWNER, REPO, ISSUE_NUMBER).await;

    match result {
      Err(GitHubError::Status { status, message }) => {
        assert_eq!(status, 500);
        assert_eq!(message, "Server Error");
      }
      other => panic!("expected a status error, got {other:?}"),
    }

    Ok(())
  }

  #[tokio::test]
  async fn test_malformed_issue_body() -> Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/repos/owner/repo/issues/1"))
      .respond_with(ResponseTemplate::new(200).set_body_string("[1, 2, 3"))
      .mount(&mock_server)
      .await;

    let client = create_test_client(&mock_server);
    let err = client.fetch_issue("owner", "repo", 1).await.unwrap_err();

    assert!(matches!(err, GitHubError::Decode(_)));

    Ok(())
  }

  #[tokio::test]
  async fn test_comments_must_be_an_array() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_issue(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, issue_json()).await;
    mount_comments(
      &mock_server,
      OWNER,
      REPO,
      ISSUE_NUMBER,
      200,
      json!({ "comments": [] }),
    )
    .await;

    let client = create_test_client(&mock_server);
    let err = client.fetch_issue(OWNER, REPO, ISSUE_NUMBER).await.unwrap_err();

    assert!(matches!(err, GitHubError::Decode(_)));

    Ok(())
  }

  /// Unparsable timestamps are left at their zero value under the default
  /// policy; this mirrors long-standing behavior rather than an ideal one.
  #[tokio::test]
  async fn test_unparsable_timestamp_is_lenient_by_default() -> Result<()> {
    let mock_server = MockServer::start().await;

    let mut payload = issue_json();
    payload["created_at"] = json!("not-a-date");
    let mut comments = comments_json();
    comments[0]["updated_at"] = json!("15/01/2024");
    mount_issue(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, payload).await;
    mount_comments(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, comments).await;

    let client = create_test_client(&mock_server);
    let issue = client.fetch_issue(OWNER, REPO, ISSUE_NUMBER).await?;

    assert_eq!(issue.created_at, DateTime::<Utc>::default());
    assert_eq!(issue.updated_at, Utc.with_ymd_and_hms(2024, 1, 16, 11, 0, 0).unwrap());
    assert_eq!(issue.comments[0].updated_at, DateTime::<Utc>::default());
    assert_eq!(
      issue.comments[0].created_at,
      Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_null_comment_timestamp_does_not_fail_the_fetch() -> Result<()> {
    let mock_server = MockServer::start().await;

    let mut comments = comments_json();
    comments[0]["created_at"] = json!(null);
    mount_issue(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, issue_json()).await;
    mount_comments(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, comments).await;

    let client = create_test_client(&mock_server);
    let issue = client.fetch_issue(OWNER, REPO, ISSUE_NUMBER).await?;

    assert_eq!(issue.comments.len(), 2);
    assert_eq!(issue.comments[0].created_at, DateTime::<Utc>::default());
    assert_eq!(
      issue.comments[0].updated_at,
      Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_null_timestamp_with_strict_policy() -> Result<()> {
    let mock_server = MockServer::start().await;

    let mut payload = issue_json();
    payload["updated_at"] = json!(null);
    mount_issue(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, payload).await;
    mount_comments(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, comments_json()).await;

    let mut client = create_test_client(&mock_server);
    client.set_timestamp_policy(TimestampPolicy::Strict);

    let err = client.fetch_issue(OWNER, REPO, ISSUE_NUMBER).await.unwrap_err();
    assert!(matches!(err, GitHubError::Timestamp { field: "updated_at", .. }));
    assert_eq!(err.to_string(), "invalid updated_at timestamp: 'null'");

    Ok(())
  }

  #[tokio::test]
  async fn test_unparsable_timestamp_with_strict_policy() -> Result<()> {
    let mock_server = MockServer::start().await;

    let mut comments = comments_json();
    comments[1]["created_at"] = json!("2024-01-15");
    mount_issue(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, issue_json()).await;
    mount_comments(&mock_server, OWNER, REPO, ISSUE_NUMBER, 200, comments).await;

    let mut client = create_test_client(&mock_server);
    client.set_timestamp_policy(TimestampPolicy::Strict);

    let err = client.fetch_issue(OWNER, REPO, ISSUE_NUMBER).await.unwrap_err();
    assert!(matches!(err, GitHubError::Timestamp { field: "created_at", .. }));

    Ok(())
  }

  #[tokio::test]
  async fn test_client_is_reusable() -> Result<()> {
    let mock_server = MockServer::start().await;
    mount_issue_with_comments(&mock_server).await;

    let client = create_test_client(&mock_server);
    let first = client.fetch_issue(OWNER, REPO, ISSUE_NUMBER).await?;
    let second = client.fetch_issue(OWNER, REPO, ISSUE_NUMBER).await?;

    assert_eq!(first, second);
    assert_eq!(mock_server.received_requests().await.unwrap_or_default().len(), 4);

    Ok(())
  }
}
