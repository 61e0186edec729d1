//! Core constants shared across gh2md components.

/// Prefix every accepted GitHub web URL must start with.
pub const GITHUB_WEB_PREFIX: &str = "https://github.com/";

/// Base URL for the official SaaS GitHub API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding a GitHub token.
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Fallback environment variable used by the `gh` CLI.
pub const ENV_GH_TOKEN: &str = "GH_TOKEN";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "GH2MD_API_URL";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
