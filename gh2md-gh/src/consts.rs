//! Constants for the gh2md-gh client

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("gh2md/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github+json";
