//! # Markdown Generation
//!
//! Renders a fetched [`Resource`] into a Markdown document: optional YAML
//! frontmatter, the title and description, and the comment thread in the
//! order GitHub returned it.

mod filename;
mod frontmatter;

use chrono::{DateTime, Utc};
use thiserror::Error;

pub use self::filename::sanitize_filename;
use self::frontmatter::Frontmatter;
use crate::models::{Comment, Resource};

/// Placeholder written when an issue has no description
const EMPTY_BODY: &str = "_No description provided._";

/// Errors that can occur while rendering a document
#[derive(Debug, Error)]
pub enum RenderError {
  #[error("failed to serialize frontmatter")]
  Frontmatter(#[from] serde_yaml::Error),
}

/// Capability interface for turning resources into documents
pub trait Generator {
  /// Render the complete document.
  fn generate(&self, resource: &Resource) -> Result<String, RenderError>;

  /// Render only the YAML frontmatter block, including its `---` fences.
  fn generate_frontmatter(&self, resource: &Resource) -> Result<String, RenderError>;

  /// Turn a title into a filesystem-safe file stem.
  fn sanitize_filename(&self, title: &str) -> String;

  /// The file name a resource is written to when none is given.
  fn default_filename(&self, resource: &Resource) -> String;
}

/// The Markdown generator used by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownGenerator {
  include_comments: bool,
  include_meta: bool,
}

impl Default for MarkdownGenerator {
  fn default() -> Self {
    Self::new(true, true)
  }
}

impl MarkdownGenerator {
  pub const fn new(include_comments: bool, include_meta: bool) -> Self {
    Self {
      include_comments,
      include_meta,
    }
  }

  fn render_summary(resource: &Resource) -> String {
    let issue = resource.issue();
    let noun = match resource {
      Resource::PullRequest(_) => "pull request",
      _ => "issue",
    };

    let mut summary = format!(
      "**{}** opened this {} on {} · {}",
      issue.author,
      noun,
      format_date(&issue.created_at),
      issue.state
    );

    if let Some(closed_at) = &issue.closed_at {
      summary.push_str(&format!(" · closed on {}", format_date(closed_at)));
    }

    if let Resource::PullRequest(pr) = resource {
      match (&pr.merged_by, &pr.merged_at) {
        (Some(by), Some(at)) => summary.push_str(&format!(" · merged by {by} on {}", format_date(at))),
        (Some(by), None) => summary.push_str(&format!(" · merged by {by}")),
        (None, Some(at)) => summary.push_str(&format!(" · merged on {}", format_date(at))),
        (None, None) => {}
      }
    }

    if !issue.url.is_empty() {
      summary.push_str(&format!(" · [#{}]({})", issue.id, issue.url));
    }

    summary
  }

  fn render_comments(comments: &[Comment]) -> String {
    let rendered: Vec<String> = comments
      .iter()
      .map(|comment| {
        format!(
          "### {} commented on {}\n\n{}\n",
          comment.author,
          format_timestamp(&comment.created_at),
          body_or_placeholder(&comment.body)
        )
      })
      .collect();

    format!("## Comments\n\n{}", rendered.join("\n---\n\n"))
  }
}

impl Generator for MarkdownGenerator {
  fn generate(&self, resource: &Resource) -> Result<String, RenderError> {
    let issue = resource.issue();
    let mut document = String::new();

    if self.include_meta {
      document.push_str(&self.generate_frontmatter(resource)?);
      document.push('\n');
    }

    document.push_str(&format!("# {}\n\n", issue.title));
    document.push_str(&Self::render_summary(resource));
    document.push_str("\n\n");
    document.push_str(body_or_placeholder(&issue.body));
    document.push('\n');

    if self.include_comments && !issue.comments.is_empty() {
      document.push('\n');
      document.push_str(&Self::render_comments(&issue.comments));
    }

    Ok(document)
  }

  fn generate_frontmatter(&self, resource: &Resource) -> Result<String, RenderError> {
    let yaml = serde_yaml::to_string(&Frontmatter::from_resource(resource))?;
    Ok(format!("---\n{yaml}---\n"))
  }

  fn sanitize_filename(&self, title: &str) -> String {
    sanitize_filename(title)
  }

  fn default_filename(&self, resource: &Resource) -> String {
    let issue = resource.issue();
    let prefix = match resource {
      Resource::PullRequest(_) => "pr",
      _ => "issue",
    };
    format!("{prefix}-{}-{}.md", issue.id, sanitize_filename(&issue.title))
  }
}

fn body_or_placeholder(body: &str) -> &str {
  let trimmed = body.trim_end();
  if trimmed.trim().is_empty() { EMPTY_BODY } else { trimmed }
}

fn format_date(timestamp: &DateTime<Utc>) -> String {
  timestamp.format("%Y-%m-%d").to_string()
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
  timestamp.format("%Y-%m-%d %H:%M UTC").to_string()
}
