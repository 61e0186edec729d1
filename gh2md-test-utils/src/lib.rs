//! Test utilities shared across the gh2md workspace
//!
//! This crate provides common testing infrastructure including:
//! - GitHub API payload fixtures ([`fixtures`])
//! - Mock GitHub endpoints on a `wiremock` server ([`server`])
//! - Temporary config files ([`ConfigFileGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod config;
pub mod fixtures;
pub mod server;

// Re-export commonly used items
pub use config::ConfigFileGuard;
pub use fixtures::{comments_json, issue_json};
pub use server::{mount_comments, mount_issue, mount_issue_with_comments};
