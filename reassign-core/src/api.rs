//! Capability interface over the remote code host

use async_trait::async_trait;

use crate::{IssueComment, PullRequestInfo, RepoContext, Result, Review};

/// Remote host operations the workflow needs
///
/// The GitHub client backs this in production; tests substitute in-memory
/// fakes.
#[async_trait]
pub trait HostApi: Send + Sync {
    /// Login of the authenticated user
    async fn current_user_login(&self) -> Result<String>;

    /// Open PRs in `repo` assigned to `login`, newest-created first
    async fn assigned_open_prs(&self, repo: &RepoContext, login: &str)
        -> Result<Vec<PullRequestInfo>>;

    /// Submitted reviews on a PR (first page)
    async fn pr_reviews(&self, repo: &RepoContext, pr_number: u64) -> Result<Vec<Review>>;

    /// Conversation comments on a PR (first page)
    async fn issue_comments(&self, repo: &RepoContext, pr_number: u64)
        -> Result<Vec<IssueComment>>;

    /// Request reviews from `reviewers`
    async fn request_reviewers(
        &self,
        repo: &RepoContext,
        pr_number: u64,
        reviewers: &[String],
    ) -> Result<()>;
}
