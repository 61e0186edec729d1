//! # GitHub API Endpoints
//!
//! Endpoint implementations grouped by the resource type they fetch.

pub mod issues;
pub mod pulls;
