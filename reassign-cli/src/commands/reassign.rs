//! Reassign command - re-request review from a past reviewer

use anyhow::Context;
use clap::Args;
use reassign_core::{
    Config, ConfigOverrides, Credentials, LinePrompter, Outcome, ReassignWorkflow,
};
use reassign_github::GitHubClient;

/// Arguments for re-requesting a review
#[derive(Args, Debug)]
pub struct ReassignArgs {
    /// Pull request number (omit to pick from PRs assigned to you)
    #[arg(value_name = "PR_NUMBER", allow_negative_numbers = true)]
    pub pr_number: Option<String>,

    /// Repository (owner/repo format, uses the current git remote if not specified)
    #[arg(short = 'R', long)]
    pub repo: Option<String>,

    /// GitHub hostname (for GitHub Enterprise)
    #[arg(long)]
    pub hostname: Option<String>,
}

impl ReassignArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            repo: self.repo.clone(),
            host: self.hostname.clone(),
        }
    }

    /// Execute the reassign command
    pub async fn execute(&self) -> anyhow::Result<()> {
        // Reject a malformed PR number before any lookup or remote call
        if let Some(arg) = self.pr_number.as_deref() {
            reassign_core::parse_pr_number(arg)?;
        }

        let workdir = std::env::current_dir().context("Failed to read current directory")?;
        let config = Config::resolve(self.overrides(), &workdir)
            .context("Failed to determine repository")?;

        tracing::debug!(host = %config.host, repo = %config.repo, "Configuration loaded");

        let credentials = Credentials::resolve(&config.host, config.is_github_com())?;
        let client = GitHubClient::new(&config, &credentials)
            .context("Failed to create GitHub client")?;

        let mut prompter = LinePrompter::stdio();
        let outcome = ReassignWorkflow::new(&client, &mut prompter, &config.repo)
            .run(self.pr_number.as_deref())
            .await?;

        match outcome {
            Outcome::Requested {
                pr_number,
                reviewer,
            } => {
                println!(
                    "Successfully re-requested review from {} on #{}",
                    reviewer, pr_number
                );
            }
            Outcome::Declined { .. } => {
                println!("Reviewer selection cancelled");
            }
        }

        Ok(())
    }
}
