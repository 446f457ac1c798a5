//! [`HostApi`] implementation backed by the GitHub API

use async_trait::async_trait;
use reassign_core::{HostApi, IssueComment, PullRequestInfo, RepoContext, Review};

use crate::GitHubClient;

#[async_trait]
impl HostApi for GitHubClient {
    async fn current_user_login(&self) -> reassign_core::Result<String> {
        Ok(self.fetch_current_user().await?)
    }

    async fn assigned_open_prs(
        &self,
        repo: &RepoContext,
        login: &str,
    ) -> reassign_core::Result<Vec<PullRequestInfo>> {
        Ok(self.search_assigned_open_prs(repo, login).await?)
    }

    async fn pr_reviews(
        &self,
        repo: &RepoContext,
        pr_number: u64,
    ) -> reassign_core::Result<Vec<Review>> {
        Ok(self.list_reviews(repo, pr_number).await?)
    }

    async fn issue_comments(
        &self,
        repo: &RepoContext,
        pr_number: u64,
    ) -> reassign_core::Result<Vec<IssueComment>> {
        Ok(self.list_issue_comments(repo, pr_number).await?)
    }

    async fn request_reviewers(
        &self,
        repo: &RepoContext,
        pr_number: u64,
        reviewers: &[String],
    ) -> reassign_core::Result<()> {
        Ok(self
            .post_requested_reviewers(repo, pr_number, reviewers)
            .await?)
    }
}
