//! # Issue Model
//!
//! Domain representation of a fetched GitHub issue, its comments, and the
//! resource kinds the Markdown generator knows how to render. These types are
//! built fresh on every fetch; nothing here is cached or persisted.

use chrono::{DateTime, Utc};

use crate::url::ResourceType;

/// A GitHub issue together with the comments fetched for it
///
/// Timestamps that could not be parsed under the lenient policy are left at
/// `DateTime::<Utc>::default()`, the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issue {
  /// The issue number (not GitHub's internal id)
  pub id: u64,
  pub title: String,
  /// `open` or `closed`
  pub state: String,
  pub url: String,
  pub body: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub closed_at: Option<DateTime<Utc>>,
  pub author: String,
  pub author_url: String,
  pub labels: Vec<String>,
  pub milestone: Option<String>,
  pub assignees: Vec<String>,
  /// Comment count reported by the issue endpoint.
  ///
  /// Never reconciled with `comments.len()`: the two come from different
  /// endpoints and may disagree.
  pub comments_count: u64,
  pub comments: Vec<Comment>,
}

/// A comment on an issue or pull request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
  pub author: String,
  pub author_url: String,
  pub body: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// A pull request: an issue plus merge information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequest {
  pub issue: Issue,
  pub merged_at: Option<DateTime<Utc>>,
  pub merged_by: Option<String>,
}

/// Anything the Markdown generator can render
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Resource {
  Issue(Issue),
  PullRequest(PullRequest),
}

impl Resource {
  pub const fn kind(&self) -> ResourceType {
    match self {
      Self::Issue(_) => ResourceType::Issue,
      Self::PullRequest(_) => ResourceType::PullRequest,
    }
  }

  /// The issue fields shared by every resource kind.
  pub const fn issue(&self) -> &Issue {
    match self {
      Self::Issue(issue) => issue,
      Self::PullRequest(pr) => &pr.issue,
    }
  }
}

impl From<Issue> for Resource {
  fn from(issue: Issue) -> Self {
    Self::Issue(issue)
  }
}

impl From<PullRequest> for Resource {
  fn from(pr: PullRequest) -> Self {
    Self::PullRequest(pr)
  }
}
