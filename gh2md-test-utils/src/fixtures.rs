//! GitHub REST API payloads used across the workspace's tests
//!
//! The issue reports `comments: 2`, which matches [`comments_json`]. Tests
//! exercising count divergence override the field themselves.

use serde_json::{Value, json};

pub const OWNER: &str = "testowner";
pub const REPO: &str = "testrepo";
pub const ISSUE_NUMBER: u64 = 12345;

/// An issue as returned by `GET /repos/{owner}/{repo}/issues/{number}`
pub fn issue_json() -> Value {
  json!({
    "id": 1,
    "number": ISSUE_NUMBER,
    "title": "Test Issue Title",
    "state": "open",
    "html_url": "https://github.com/testowner/testrepo/issues/12345",
    "body": "This is a test issue body.",
    "created_at": "2024-01-15T10:00:00Z",
    "updated_at": "2024-01-16T11:00:00Z",
    "closed_at": null,
    "user": {
      "login": "testuser",
      "id": 100,
      "html_url": "https://github.com/testuser"
    },
    "labels": [
      {"id": 1, "name": "bug", "color": "d73a4a"},
      {"id": 2, "name": "enhancement", "color": "a2eeef"}
    ],
    "milestone": {
      "id": 10,
      "number": 1,
      "title": "v1.0"
    },
    "assignees": [
      {"login": "assignee1", "id": 201},
      {"login": "assignee2", "id": 202}
    ],
    "comments": 2
  })
}

/// Comments as returned by `GET /repos/{owner}/{repo}/issues/{number}/comments`
pub fn comments_json() -> Value {
  json!([
    {
      "id": 1001,
      "user": {
        "login": "commenter1",
        "html_url": "https://github.com/commenter1"
      },
      "body": "First comment",
      "created_at": "2024-01-15T12:00:00Z",
      "updated_at": "2024-01-15T12:00:00Z"
    },
    {
      "id": 1002,
      "user": {
        "login": "commenter2",
        "html_url": "https://github.com/commenter2"
      },
      "body": "Second comment",
      "created_at": "2024-01-15T13:00:00Z",
      "updated_at": "2024-01-15T13:00:00Z"
    }
  ])
}

/// GitHub's error envelope for non-2xx responses
pub fn error_json(message: &str) -> Value {
  json!({
    "message": message,
    "documentation_url": "https://docs.github.com/rest"
  })
}
