//! Mock GitHub endpoints
//!
//! Helpers that mount the issue and comments endpoints on a `wiremock`
//! [`MockServer`], so client and CLI tests only need to override what they
//! care about.

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::{ISSUE_NUMBER, OWNER, REPO, comments_json, issue_json};

/// Path of the issue endpoint
pub fn issue_path(owner: &str, repo: &str, number: u64) -> String {
  format!("/repos/{owner}/{repo}/issues/{number}")
}

/// Path of the comments endpoint
pub fn comments_path(owner: &str, repo: &str, number: u64) -> String {
  format!("/repos/{owner}/{repo}/issues/{number}/comments")
}

/// Serve `body` with `status` from the issue endpoint
pub async fn mount_issue(server: &MockServer, owner: &str, repo: &str, number: u64, status: u16, body: Value) {
  Mock::given(method("GET"))
    .and(path(issue_path(owner, repo, number)))
    .respond_with(ResponseTemplate::new(status).set_body_json(body))
    .mount(server)
    .await;
}

/// Serve `body` with `status` from the comments endpoint
pub async fn mount_comments(server: &MockServer, owner: &str, repo: &str, number: u64, status: u16, body: Value) {
  Mock::given(method("GET"))
    .and(path(comments_path(owner, repo, number)))
    .respond_with(ResponseTemplate::new(status).set_body_json(body))
    .mount(server)
    .await;
}

/// Serve the default issue and comments fixtures for
/// `testowner/testrepo#12345`
pub async fn mount_issue_with_comments(server: &MockServer) {
  mount_issue(server, OWNER, REPO, ISSUE_NUMBER, 200, issue_json()).await;
  mount_comments(server, OWNER, REPO, ISSUE_NUMBER, 200, comments_json()).await;
}
