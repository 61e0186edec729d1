//! # GitHub API Client
//!
//! Fetches a single GitHub issue together with its comments over the REST API
//! and maps the JSON payloads into the `gh2md-core` issue model.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::{GitHubClient, TimestampPolicy, create_github_client};
// Re-export errors
pub use error::GitHubError;
