//! Runtime configuration for reassign-reviewer
//!
//! Configuration is resolved with the following priority (highest to lowest):
//! 1. CLI flags (`--repo`, `--hostname`)
//! 2. Environment variables (`GH_REPO`, `GH_HOST`)
//! 3. The git remote of the current directory
//! 4. Default values
//!
//! Nothing is read from or written to disk besides the git metadata.

use std::path::Path;

use tracing::debug;

use crate::{Error, RepoContext, Result};

/// Host used when nothing else is configured
pub const DEFAULT_HOST: &str = "github.com";

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Hostname of the GitHub instance
    pub host: String,
    /// Repository to act on
    pub repo: RepoContext,
}

/// Raw, not yet resolved settings from one layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub repo: Option<String>,
    pub host: Option<String>,
}

impl ConfigOverrides {
    /// Read the host platform environment variables
    pub fn from_env() -> Self {
        Self {
            repo: non_empty_env("GH_REPO"),
            host: non_empty_env("GH_HOST"),
        }
    }

    /// Fill unset fields from a lower-priority layer
    pub fn or(self, lower: ConfigOverrides) -> Self {
        Self {
            repo: self.repo.or(lower.repo),
            host: self.host.or(lower.host),
        }
    }
}

impl Config {
    pub fn new(host: impl Into<String>, repo: RepoContext) -> Self {
        Self {
            host: host.into(),
            repo,
        }
    }

    /// Resolve configuration from CLI flags, environment and git remote
    ///
    /// Priority: CLI > env > git remote > defaults
    pub fn resolve(cli: ConfigOverrides, workdir: impl AsRef<Path>) -> Result<Self> {
        Self::resolve_layers(cli.or(ConfigOverrides::from_env()), workdir)
    }

    /// Resolve from already merged overrides, discovering the rest from git
    pub fn resolve_layers(overrides: ConfigOverrides, workdir: impl AsRef<Path>) -> Result<Self> {
        let (remote_host, repo) = match overrides.repo.as_deref() {
            Some(reference) => RepoContext::parse_with_host(reference).map_err(|e| {
                Error::Config(format!("Invalid repository '{}': {}", reference, e))
            })?,
            None => RepoContext::discover(workdir)?,
        };

        let host = overrides
            .host
            .or(remote_host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        debug!(host = %host, repo = %repo, "Configuration resolved");

        Ok(Self { host, repo })
    }

    /// Whether this is the public github.com service
    pub fn is_github_com(&self) -> bool {
        self.host.eq_ignore_ascii_case(DEFAULT_HOST)
            || self.host.eq_ignore_ascii_case("api.github.com")
    }

    /// Base URL of the REST API
    pub fn rest_base_url(&self) -> String {
        if self.is_github_com() {
            "https://api.github.com".to_string()
        } else {
            format!("https://{}/api/v3", self.host)
        }
    }

    /// URL of the GraphQL endpoint
    pub fn graphql_url(&self) -> String {
        if self.is_github_com() {
            "https://api.github.com/graphql".to_string()
        } else {
            format!("https://{}/api/graphql", self.host)
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
