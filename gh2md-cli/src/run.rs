//! # Run
//!
//! Drives a single invocation: parse the URL, fetch the resource, render it
//! and write the document where the configuration says.

use std::fs;
use std::future::Future;
use std::io::{self, Write};
use std::path::{Path, PathBuf, is_separator};

use anyhow::{Context, Result, anyhow, bail};
use gh2md_core::config::Config;
use gh2md_core::markdown::{Generator, MarkdownGenerator};
use gh2md_core::models::Resource;
use gh2md_core::url::{ResourceType, UrlInfo};
use gh2md_gh::{GitHubClient, TimestampPolicy, create_github_client};
use tokio::runtime::Runtime;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::output::{format_path, format_reference, print_success, print_warning};

/// Where the rendered document goes
#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
  Stdout,
  File(PathBuf),
}

/// Handle a parsed command line
pub fn run(cli: Cli) -> Result<()> {
  let config = cli.resolve_config()?;
  let url_info: UrlInfo = config.url.parse()?;
  debug!("Parsed {} as {} {}", url_info.original(), url_info.kind(), url_info);

  if url_info.kind() == ResourceType::Discussion {
    bail!("Discussions are not supported: {}", url_info.original());
  }

  let policy = if cli.strict_timestamps {
    TimestampPolicy::Strict
  } else {
    TimestampPolicy::Lenient
  };
  let client = create_client(&config, policy);

  let resource = fetch_resource(&client, &url_info)?;
  let issue = resource.issue();
  if config.include_comments && issue.comments_count > issue.comments.len() as u64 {
    print_warning(&format!(
      "GitHub reports {} comments but only {} were fetched",
      issue.comments_count,
      issue.comments.len()
    ));
  }

  let generator = MarkdownGenerator::new(config.include_comments, config.include_meta);
  let document = generator.generate(&resource).context("Failed to render Markdown")?;

  match resolve_destination(&config, &generator, &resource) {
    Destination::Stdout => {
      let mut stdout = io::stdout().lock();
      stdout.write_all(document.as_bytes())?;
      stdout.flush()?;
    }
    Destination::File(path) => {
      write_document(&path, &document)?;
      print_success(&format!(
        "Wrote {} to {}",
        format_reference(&url_info.to_string()),
        format_path(&path)
      ));
    }
  }

  Ok(())
}

fn create_client(config: &Config, policy: TimestampPolicy) -> GitHubClient {
  let mut client = create_github_client(&config.api_base_url, config.token.as_deref());
  client.set_timeout(config.timeout);
  client.set_timestamp_policy(policy);
  client
}

/// Fetch on a fresh runtime, giving up without a result on Ctrl-C
fn fetch_resource(client: &GitHubClient, url_info: &UrlInfo) -> Result<Resource> {
  let rt = Runtime::new().context("Failed to create async runtime")?;

  rt.block_on(fetch_or_cancel(client, url_info, tokio::signal::ctrl_c()))
}

/// Race the fetch against `cancel`; the fetch future is dropped if `cancel`
/// resolves first
async fn fetch_or_cancel<C>(client: &GitHubClient, url_info: &UrlInfo, cancel: C) -> Result<Resource>
where
  C: Future<Output = io::Result<()>>,
{
  tokio::select! {
    result = fetch(client, url_info) => result,
    Ok(()) = cancel => Err(anyhow!("Cancelled")),
  }
}

async fn fetch(client: &GitHubClient, url_info: &UrlInfo) -> Result<Resource> {
  let (owner, repo, number) = (url_info.owner(), url_info.repo(), url_info.number());
  info!("Fetching {} {}", url_info.kind(), url_info);

  match url_info.kind() {
    ResourceType::Issue => {
      let issue = client
        .fetch_issue(owner, repo, number)
        .await
        .with_context(|| format!("Failed to fetch issue {url_info}"))?;
      Ok(issue.into())
    }
    ResourceType::PullRequest => {
      let pr = client
        .fetch_pull_request(owner, repo, number)
        .await
        .with_context(|| format!("Failed to fetch pull request {url_info}"))?;
      Ok(pr.into())
    }
    ResourceType::Discussion => bail!("Discussions are not supported: {}", url_info.original()),
  }
}

fn resolve_destination(config: &Config, generator: &impl Generator, resource: &Resource) -> Destination {
  match &config.output_path {
    Some(path) if path.as_os_str() == "-" => Destination::Stdout,
    Some(path) if path.is_dir() || names_directory(path) => {
      Destination::File(path.join(generator.default_filename(resource)))
    }
    Some(path) => Destination::File(path.clone()),
    None => {
      let dir = config.output_dir.clone().unwrap_or_default();
      Destination::File(dir.join(generator.default_filename(resource)))
    }
  }
}

/// Whether `path` is spelled with a trailing separator, like `notes/`
fn names_directory(path: &Path) -> bool {
  path.as_os_str().to_string_lossy().ends_with(is_separator)
}

fn write_document(path: &Path, document: &str) -> Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;
  }

  fs::write(path, document).with_context(|| format!("Failed to write {}", path.display()))
}
