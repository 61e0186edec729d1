//! # GitHub URL Parsing
//!
//! Decomposes GitHub web URLs of the form
//! `https://github.com/{owner}/{repo}/{issues|pull|discussions}/{number}` into
//! a [`UrlInfo`]. Input is matched exactly: trailing slashes, query strings,
//! fragments and other variations are rejected rather than normalized.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::consts::GITHUB_WEB_PREFIX;

/// The kind of GitHub resource a URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
  Issue,
  PullRequest,
  Discussion,
}

impl ResourceType {
  /// Map a URL path keyword (`issues`, `pull`, `discussions`) to a resource
  /// type.
  pub fn from_keyword(keyword: &str) -> Option<Self> {
    match keyword {
      "issues" => Some(Self::Issue),
      "pull" => Some(Self::PullRequest),
      "discussions" => Some(Self::Discussion),
      _ => None,
    }
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Issue => "issue",
      Self::PullRequest => "pull_request",
      Self::Discussion => "discussion",
    }
  }
}

impl fmt::Display for ResourceType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Errors that can occur while parsing a GitHub URL
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlParseError {
  #[error("invalid GitHub URL format: {0}")]
  InvalidFormat(String),
  #[error("invalid issue number: '{segment}'")]
  InvalidNumber { segment: String },
  #[error("unsupported resource type: {0}")]
  UnsupportedResourceType(String),
}

/// Parsed GitHub URL information
///
/// Only [`parse`] constructs this type, so `number` is always positive and
/// `original` is always the exact input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlInfo {
  kind: ResourceType,
  owner: String,
  repo: String,
  number: u64,
  original: String,
}

impl UrlInfo {
  pub const fn kind(&self) -> ResourceType {
    self.kind
  }

  pub fn owner(&self) -> &str {
    &self.owner
  }

  pub fn repo(&self) -> &str {
    &self.repo
  }

  pub const fn number(&self) -> u64 {
    self.number
  }

  /// The URL exactly as it was passed to [`parse`].
  pub fn original(&self) -> &str {
    &self.original
  }
}

impl fmt::Display for UrlInfo {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}#{}", self.owner, self.repo, self.number)
  }
}

impl FromStr for UrlInfo {
  type Err = UrlParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse(s)
  }
}

/// Parse a GitHub issue, pull request or discussion URL.
///
/// # Errors
///
/// Returns [`UrlParseError::InvalidFormat`] if the URL does not start with
/// `https://github.com/` or does not have exactly four path segments (empty
/// owner or repository segments included),
/// [`UrlParseError::InvalidNumber`] if the last segment is not a positive
/// base-10 integer, and [`UrlParseError::UnsupportedResourceType`] for any
/// keyword other than `issues`, `pull` or `discussions`.
pub fn parse(url: &str) -> Result<UrlInfo, UrlParseError> {
  let invalid = || UrlParseError::InvalidFormat(url.to_string());

  let path = url.strip_prefix(GITHUB_WEB_PREFIX).ok_or_else(invalid)?;
  let segments: Vec<&str> = path.split('/').collect();

  // Expected format: owner/repo/type/number
  let [owner, repo, keyword, number] = segments.as_slice() else {
    return Err(invalid());
  };

  if owner.is_empty() || repo.is_empty() {
    return Err(invalid());
  }

  let number = match number.parse::<u64>() {
    Ok(n) if n > 0 => n,
    _ => {
      return Err(UrlParseError::InvalidNumber {
        segment: (*number).to_string(),
      });
    }
  };

  let kind =
    ResourceType::from_keyword(keyword).ok_or_else(|| UrlParseError::UnsupportedResourceType((*keyword).to_string()))?;

  Ok(UrlInfo {
    kind,
    owner: (*owner).to_string(),
    repo: (*repo).to_string(),
    number,
    original: url.to_string(),
  })
}

/// Check whether a URL is a supported GitHub resource URL.
pub fn validate(url: &str) -> bool {
  parse(url).is_ok()
}
