//! Credential lookup
//!
//! The tool runs under the `gh` CLI and borrows its authentication.
//!
//! Loading priority:
//! 1. Environment variables (`GH_TOKEN`, `GITHUB_TOKEN`; the `*_ENTERPRISE_*`
//!    variants for other hosts)
//! 2. `gh auth token --hostname HOST`

use std::process::Command;

use tracing::debug;

use crate::{Error, Result};

/// Token used to talk to the host
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The bearer token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Resolve a token for `host` from the environment, then the `gh` CLI
    pub fn resolve(host: &str, is_github_com: bool) -> Result<Self> {
        Self::resolve_with(host, is_github_com, |key| std::env::var(key).ok(), gh_auth_token)
    }

    /// Resolve with injectable lookups
    pub fn resolve_with(
        host: &str,
        is_github_com: bool,
        env: impl Fn(&str) -> Option<String>,
        gh_cli: impl FnOnce(&str) -> Option<String>,
    ) -> Result<Self> {
        for key in token_env_keys(is_github_com) {
            if let Some(token) = env(key).and_then(non_empty) {
                debug!(source = *key, "Using token from environment");
                return Ok(Self::new(token));
            }
        }

        if let Some(token) = gh_cli(host).and_then(non_empty) {
            debug!(host = %host, "Using token from gh auth");
            return Ok(Self::new(token));
        }

        Err(Error::Auth(format!(
            "No token found for {}. Run 'gh auth login' or set GH_TOKEN.",
            host
        )))
    }
}

fn token_env_keys(is_github_com: bool) -> &'static [&'static str] {
    if is_github_com {
        &["GH_TOKEN", "GITHUB_TOKEN"]
    } else {
        &["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"]
    }
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    (!value.is_empty()).then_some(value)
}

/// Ask the `gh` CLI for its stored token
fn gh_auth_token(host: &str) -> Option<String> {
    let output = Command::new("gh")
        .args(["auth", "token", "--hostname", host])
        .output();

    match output {
        Ok(out) if out.status.success() => String::from_utf8(out.stdout).ok(),
        Ok(out) => {
            debug!(status = %out.status, "gh auth token failed");
            None
        }
        Err(e) => {
            debug!(error = %e, "gh CLI not available");
            None
        }
    }
}
