//! # gh2md Core Library
//!
//! Core library for gh2md providing GitHub URL parsing, the issue and comment
//! model shared with the API client, configuration loading, and the Markdown
//! generator that turns a fetched resource into a document.

pub mod config;
pub mod consts;
pub mod markdown;
pub mod models;
pub mod url;

// Re-export main types for the client and CLI crates
pub use config::{Config, ConfigDirs, FileConfig};
pub use markdown::{Generator, MarkdownGenerator, RenderError};
pub use models::{Comment, Issue, PullRequest, Resource};
pub use crate::url::{ResourceType, UrlInfo, UrlParseError, parse, validate};
