//! Repository context: which `owner/name` the tool acts on

use std::fmt;
use std::path::Path;

use git2::Repository;
use tracing::debug;

use crate::{Error, Result};

/// Owner and name of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    pub owner: String,
    pub name: String,
}

impl RepoContext {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse a repository reference
    ///
    /// Supports formats:
    /// - owner/repo
    /// - HOST/owner/repo
    /// - https://github.com/owner/repo
    /// - git@github.com:owner/repo.git
    /// - ssh://git@github.com/owner/repo.git
    pub fn parse(reference: &str) -> Result<Self> {
        let (_, repo) = parse_repo_reference(reference)?;
        Ok(repo)
    }

    /// Like [`RepoContext::parse`], also returning the host when the
    /// reference names one
    pub fn parse_with_host(reference: &str) -> Result<(Option<String>, Self)> {
        parse_repo_reference(reference)
    }

    /// Discover the repository from the git remotes around `path`
    ///
    /// Prefers `origin`, then the first remote that has a URL.
    pub fn discover(path: impl AsRef<Path>) -> Result<(Option<String>, Self)> {
        let path = path.as_ref();

        let repo = Repository::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                Error::Config(format!(
                    "Not a git repository: {}. Run inside a clone or pass --repo owner/repo.",
                    path.display()
                ))
            } else {
                Error::from(e)
            }
        })?;

        let url = remote_url(&repo)?;
        debug!(url = %url, "Resolved repository from git remote");
        parse_repo_reference(&url)
    }
}

impl fmt::Display for RepoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

fn remote_url(repo: &Repository) -> Result<String> {
    if let Ok(remote) = repo.find_remote("origin") {
        if let Some(url) = remote.url() {
            return Ok(url.to_string());
        }
    }

    let remotes = repo.remotes()?;
    for remote_name in remotes.iter().flatten() {
        if let Ok(remote) = repo.find_remote(remote_name) {
            if let Some(url) = remote.url() {
                return Ok(url.to_string());
            }
        }
    }

    Err(Error::Config(
        "No git remotes configured. Pass --repo owner/repo.".to_string(),
    ))
}

/// Parse a repository reference into an optional host and the repository
fn parse_repo_reference(reference: &str) -> Result<(Option<String>, RepoContext)> {
    let reference = reference.trim();

    // HTTPS / SSH URL with scheme
    if reference.contains("://") {
        let url = url::Url::parse(reference).map_err(|e| Error::Parse(e.to_string()))?;
        let host = url.host_str().map(str::to_string);
        let path = url.path().trim_start_matches('/').trim_end_matches('/');
        return Ok((host, owner_and_name(path, reference)?));
    }

    // scp-like SSH: git@github.com:owner/repo.git
    if let Some((user_host, path)) = reference.split_once(':') {
        let host = user_host.rsplit('@').next().unwrap_or(user_host);
        return Ok((Some(host.to_string()), owner_and_name(path, reference)?));
    }

    let parts: Vec<&str> = reference.split('/').collect();
    match parts.as_slice() {
        [owner, name] => Ok((None, owner_and_name(&format!("{owner}/{name}"), reference)?)),
        [host, owner, name] => Ok((
            Some(host.to_string()),
            owner_and_name(&format!("{owner}/{name}"), reference)?,
        )),
        _ => Err(Error::Parse(format!(
            "Invalid repository format: {}. Expected owner/repo",
            reference
        ))),
    }
}

fn owner_and_name(path: &str, original: &str) -> Result<RepoContext> {
    let path = path.trim_end_matches(".git");
    let mut parts = path.split('/').filter(|p| !p.is_empty());
    match (parts.next(), parts.next()) {
        (Some(owner), Some(name)) => Ok(RepoContext::new(owner, name)),
        _ => Err(Error::Parse(format!(
            "Invalid repository reference: {}. Expected owner/repo",
            original
        ))),
    }
}
