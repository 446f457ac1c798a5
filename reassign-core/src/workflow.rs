//! The reassignment workflow
//!
//! resolve self → PR number (argument or picker) → candidates → pick →
//! confirm → request review. Every step runs after the previous one
//! finished; the first failure ends the run.

use tracing::{debug, info};

use crate::{collect_candidates, Error, HostApi, Prompter, RepoContext, Result};

/// How a run ended, when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Review was re-requested
    Requested {
        /// PR the request was made on
        pr_number: u64,
        /// Login the review was requested from
        reviewer: String,
    },
    /// The user answered "no" at the confirmation
    Declined {
        /// Login that was picked and then declined
        reviewer: String,
    },
}

/// Validate a PR number argument
pub fn parse_pr_number(arg: &str) -> Result<u64> {
    let trimmed = arg.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| Error::Validation(format!("invalid PR number: '{}'", arg)))?;
    if number <= 0 {
        return Err(Error::Validation(format!(
            "PR number must be positive, got {}",
            number
        )));
    }
    Ok(number as u64)
}

/// Resolve the invoking user's login
pub async fn resolve_current_user(api: &dyn HostApi) -> Result<String> {
    let login = api.current_user_login().await?;
    if login.is_empty() {
        return Err(Error::Auth("Host returned an empty login".to_string()));
    }
    debug!(login = %login, "Resolved current user");
    Ok(login)
}

/// Review and comment authors eligible for a re-request
pub async fn collect_candidate_reviewers(
    api: &dyn HostApi,
    repo: &RepoContext,
    pr_number: u64,
    self_login: &str,
) -> Result<Vec<String>> {
    let reviews = api.pr_reviews(repo, pr_number).await?;
    let comments = api.issue_comments(repo, pr_number).await?;

    let candidates = collect_candidates(&reviews, &comments, self_login);
    info!(
        pr_number,
        reviews = reviews.len(),
        comments = comments.len(),
        candidates = candidates.len(),
        "Collected candidate reviewers"
    );
    Ok(candidates)
}

/// Interactive re-request of a past reviewer
pub struct ReassignWorkflow<'a> {
    api: &'a dyn HostApi,
    prompter: &'a mut dyn Prompter,
    repo: &'a RepoContext,
}

impl<'a> ReassignWorkflow<'a> {
    pub fn new(api: &'a dyn HostApi, prompter: &'a mut dyn Prompter, repo: &'a RepoContext) -> Self {
        Self {
            api,
            prompter,
            repo,
        }
    }

    /// Run the whole workflow
    ///
    /// `pr_arg` is the raw PR number argument; it is validated before any
    /// call to the host.
    pub async fn run(&mut self, pr_arg: Option<&str>) -> Result<Outcome> {
        let pr_from_arg = pr_arg.map(parse_pr_number).transpose()?;

        let self_login = resolve_current_user(self.api).await?;

        let pr_number = match pr_from_arg {
            Some(n) => n,
            None => self.pick_assigned_pr(&self_login).await?,
        };
        info!(repo = %self.repo, pr_number, "Selected pull request");

        let candidates =
            collect_candidate_reviewers(self.api, self.repo, pr_number, &self_login).await?;
        if candidates.is_empty() {
            return Err(Error::EmptyResult(format!(
                "No previous reviewers or commenters to re-request on #{}",
                pr_number
            )));
        }

        let idx = self.prompter.pick_reviewer(&candidates)?;
        let reviewer = candidates
            .get(idx)
            .cloned()
            .ok_or_else(|| Error::Validation(format!("reviewer index {} out of range", idx)))?;

        if !self.prompter.confirm(&reviewer)? {
            info!(reviewer = %reviewer, "Reviewer selection declined");
            return Ok(Outcome::Declined { reviewer });
        }

        self.api
            .request_reviewers(self.repo, pr_number, std::slice::from_ref(&reviewer))
            .await?;
        info!(reviewer = %reviewer, pr_number, "Review re-requested");

        Ok(Outcome::Requested {
            pr_number,
            reviewer,
        })
    }

    async fn pick_assigned_pr(&mut self, self_login: &str) -> Result<u64> {
        let prs = self.api.assigned_open_prs(self.repo, self_login).await?;
        if prs.is_empty() {
            return Err(Error::EmptyResult(format!(
                "No open pull requests in {} are assigned to {}",
                self.repo, self_login
            )));
        }

        let idx = self.prompter.pick_pr(&prs)?;
        prs.get(idx)
            .map(|pr| pr.number)
            .ok_or_else(|| Error::Validation(format!("PR index {} out of range", idx)))
    }
}
