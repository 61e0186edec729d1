//! # GitHub API Models
//!
//! Wire representations of the GitHub REST payloads gh2md consumes, and their
//! conversion into the `gh2md-core` issue model. Missing fields decode to
//! their defaults; a field of the wrong JSON type is a decode error.

use chrono::{DateTime, Utc};
use gh2md_core::models::{Comment, Issue};
use serde::Deserialize;
use tracing::debug;

use crate::client::TimestampPolicy;
use crate::error::GitHubError;

/// Represents GitHub's error envelope for non-2xx responses
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiErrorResponse {
  pub message: String,
  pub documentation_url: Option<String>,
}

/// Represents a GitHub user as embedded in issues and comments
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiUser {
  pub login: String,
  pub html_url: String,
}

/// Represents a GitHub label
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiLabel {
  pub name: String,
}

/// Represents a GitHub milestone
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiMilestone {
  pub title: String,
}

/// Represents a GitHub issue
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiIssue {
  /// GitHub's internal id; the domain model uses `number` instead
  pub id: u64,
  pub number: u64,
  pub title: String,
  pub state: String,
  pub html_url: String,
  pub body: Option<String>,
  pub created_at: Option<String>,
  pub updated_at: Option<String>,
  pub closed_at: Option<String>,
  pub user: Option<ApiUser>,
  pub labels: Vec<ApiLabel>,
  pub milestone: Option<ApiMilestone>,
  pub assignees: Vec<ApiUser>,
  pub comments: u64,
}

/// Represents a comment on a GitHub issue
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ApiComment {
  pub user: Option<ApiUser>,
  pub body: Option<String>,
  pub created_at: Option<String>,
  pub updated_at: Option<String>,
}

impl ApiIssue {
  /// Convert into the domain model. The comment list is left empty.
  pub fn into_issue(self, policy: TimestampPolicy) -> Result<Issue, GitHubError> {
    let created_at = required_timestamp("created_at", self.created_at.as_deref(), policy)?;
    let updated_at = required_timestamp("updated_at", self.updated_at.as_deref(), policy)?;
    // A null closed_at just means the issue is open
    let closed_at = match self.closed_at.as_deref() {
      Some(raw) => parse_timestamp("closed_at", raw, policy)?,
      None => None,
    };
    let user = self.user.unwrap_or_default();

    Ok(Issue {
      id: self.number,
      title: self.title,
      state: self.state,
      url: self.html_url,
      body: self.body.unwrap_or_default(),
      created_at,
      updated_at,
      closed_at,
      author: user.login,
      author_url: user.html_url,
      labels: self.labels.into_iter().map(|label| label.name).collect(),
      milestone: self.milestone.map(|milestone| milestone.title),
      assignees: self.assignees.into_iter().map(|assignee| assignee.login).collect(),
      comments_count: self.comments,
      comments: Vec::new(),
    })
  }
}

impl ApiComment {
  pub fn into_comment(self, policy: TimestampPolicy) -> Result<Comment, GitHubError> {
    let created_at = required_timestamp("created_at", self.created_at.as_deref(), policy)?;
    let updated_at = required_timestamp("updated_at", self.updated_at.as_deref(), policy)?;
    let user = self.user.unwrap_or_default();

    Ok(Comment {
      author: user.login,
      author_url: user.html_url,
      body: self.body.unwrap_or_default(),
      created_at,
      updated_at,
    })
  }
}

/// Parse a timestamp GitHub always sends, falling back to the zero value when
/// the lenient policy skips it. A missing or null value counts as unparsable.
fn required_timestamp(
  field: &'static str,
  raw: Option<&str>,
  policy: TimestampPolicy,
) -> Result<DateTime<Utc>, GitHubError> {
  match raw {
    Some(raw) => Ok(parse_timestamp(field, raw, policy)?.unwrap_or_default()),
    None => match policy {
      TimestampPolicy::Lenient => {
        debug!("Missing {} timestamp, leaving it at the zero value", field);
        Ok(DateTime::<Utc>::default())
      }
      TimestampPolicy::Strict => Err(GitHubError::Timestamp {
        field,
        value: "null".to_string(),
        source: None,
      }),
    },
  }
}

/// Parse an RFC 3339 timestamp according to `policy`.
///
/// Returns `Ok(None)` when a lenient parse fails.
pub(crate) fn parse_timestamp(
  field: &'static str,
  raw: &str,
  policy: TimestampPolicy,
) -> Result<Option<DateTime<Utc>>, GitHubError> {
  match DateTime::parse_from_rfc3339(raw) {
    Ok(timestamp) => Ok(Some(timestamp.with_timezone(&Utc))),
    Err(source) => match policy {
      TimestampPolicy::Lenient => {
        debug!("Ignoring unparsable {} timestamp '{}': {}", field, raw, source);
        Ok(None)
      }
      TimestampPolicy::Strict => Err(GitHubError::Timestamp {
        field,
        value: raw.to_string(),
        source: Some(source),
      }),
    },
  }
}
