//! GitHub API client using octocrab

use crate::{Error, Result};
use octocrab::Octocrab;
use reassign_core::{Config, Credentials, RepoContext};
use tracing::info;

/// User agent sent on every request
pub const USER_AGENT: &str = concat!("reassign-reviewer/", env!("CARGO_PKG_VERSION"));

/// GitHub API client for one host
///
/// REST calls go through octocrab; the GraphQL search goes through reqwest.
pub struct GitHubClient {
    client: Octocrab,
    http: reqwest::Client,
    graphql_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client for the host named in `config`
    pub fn new(config: &Config, credentials: &Credentials) -> Result<Self> {
        Self::with_endpoints(
            config.rest_base_url(),
            config.graphql_url(),
            credentials,
        )
    }

    /// Create a client against explicit REST and GraphQL endpoints
    pub fn with_endpoints(
        rest_base_url: impl Into<String>,
        graphql_url: impl Into<String>,
        credentials: &Credentials,
    ) -> Result<Self> {
        let rest_base_url = rest_base_url.into();
        let graphql_url = graphql_url.into();
        let token = credentials.token().to_string();

        let client = Octocrab::builder()
            .personal_token(token.clone())
            .base_uri(rest_base_url.as_str())
            .map_err(|e| Error::Auth(format!("Invalid API base URL {}: {}", rest_base_url, e)))?
            .build()
            .map_err(|e| Error::Auth(format!("Failed to create GitHub client: {}", e)))?;

        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        info!(rest = %rest_base_url, graphql = %graphql_url, "Created GitHub client");

        Ok(Self {
            client,
            http,
            graphql_url,
            token,
        })
    }

    /// Get the underlying octocrab client
    pub fn client(&self) -> &Octocrab {
        &self.client
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("graphql_url", &self.graphql_url)
            .finish_non_exhaustive()
    }
}

/// REST path prefix for a repository
pub(crate) fn repo_route(repo: &RepoContext) -> String {
    format!("/repos/{}/{}", repo.owner, repo.name)
}
