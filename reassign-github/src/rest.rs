//! REST calls: identity, reviews, comments and review requests

use crate::client::repo_route;
use crate::{GitHubClient, Result};
use reassign_core::{IssueComment, RepoContext, Review};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Page size for list endpoints; only the first page is read
pub const PER_PAGE: u8 = 100;

#[derive(Debug, Serialize)]
struct PageParams {
    per_page: u8,
}

const FIRST_PAGE: PageParams = PageParams { per_page: PER_PAGE };

#[derive(Debug, Deserialize)]
struct AuthenticatedUser {
    login: String,
}

/// Body of `POST .../requested_reviewers`
#[derive(Debug, Serialize)]
pub(crate) struct RequestReviewersBody<'a> {
    pub reviewers: &'a [String],
}

impl GitHubClient {
    /// `GET /user`
    pub async fn fetch_current_user(&self) -> Result<String> {
        debug!("Fetching authenticated user");

        let user: AuthenticatedUser = self.client().get("/user", None::<&()>).await?;
        Ok(user.login)
    }

    /// `GET /repos/{owner}/{repo}/pulls/{n}/reviews`
    pub async fn list_reviews(&self, repo: &RepoContext, pr_number: u64) -> Result<Vec<Review>> {
        debug!(repo = %repo, pr_number, "Fetching reviews");

        let route = format!("{}/pulls/{}/reviews", repo_route(repo), pr_number);
        let reviews: Vec<Review> = self.client().get(route, Some(&FIRST_PAGE)).await?;
        Ok(reviews)
    }

    /// `GET /repos/{owner}/{repo}/issues/{n}/comments`
    pub async fn list_issue_comments(
        &self,
        repo: &RepoContext,
        pr_number: u64,
    ) -> Result<Vec<IssueComment>> {
        debug!(repo = %repo, pr_number, "Fetching issue comments");

        let route = format!("{}/issues/{}/comments", repo_route(repo), pr_number);
        let comments: Vec<IssueComment> = self.client().get(route, Some(&FIRST_PAGE)).await?;
        Ok(comments)
    }

    /// `POST /repos/{owner}/{repo}/pulls/{n}/requested_reviewers`
    ///
    /// Sent once; the response body is not inspected.
    pub async fn post_requested_reviewers(
        &self,
        repo: &RepoContext,
        pr_number: u64,
        reviewers: &[String],
    ) -> Result<()> {
        let route = format!("{}/pulls/{}/requested_reviewers", repo_route(repo), pr_number);
        let body = RequestReviewersBody { reviewers };

        let _: serde_json::Value = self.client().post(route, Some(&body)).await?;

        info!(repo = %repo, pr_number, ?reviewers, "Requested reviewers");
        Ok(())
    }
}
