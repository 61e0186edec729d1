use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Resource;

/// YAML metadata written at the top of a document
#[derive(Debug, Serialize)]
pub(super) struct Frontmatter<'a> {
  title: &'a str,
  number: u64,
  #[serde(rename = "type")]
  kind: &'static str,
  state: &'a str,
  url: &'a str,
  author: &'a str,
  author_url: &'a str,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
  #[serde(skip_serializing_if = "Option::is_none")]
  closed_at: Option<DateTime<Utc>>,
  labels: &'a [String],
  #[serde(skip_serializing_if = "is_empty")]
  assignees: &'a [String],
  #[serde(skip_serializing_if = "Option::is_none")]
  milestone: Option<&'a str>,
  /// Count reported by GitHub, not the number of comments rendered
  comments: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  merged_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  merged_by: Option<&'a str>,
}

impl<'a> Frontmatter<'a> {
  pub(super) fn from_resource(resource: &'a Resource) -> Self {
    let issue = resource.issue();
    let (merged_at, merged_by) = match resource {
      Resource::PullRequest(pr) => (pr.merged_at, pr.merged_by.as_deref()),
      _ => (None, None),
    };

    Self {
      title: &issue.title,
      number: issue.id,
      kind: resource.kind().as_str(),
      state: &issue.state,
      url: &issue.url,
      author: &issue.author,
      author_url: &issue.author_url,
      created_at: issue.created_at,
      updated_at: issue.updated_at,
      closed_at: issue.closed_at,
      labels: &issue.labels,
      assignees: &issue.assignees,
      milestone: issue.milestone.as_deref(),
      comments: issue.comments_count,
      merged_at,
      merged_by,
    }
  }
}

fn is_empty(list: &&[String]) -> bool {
  list.is_empty()
}
