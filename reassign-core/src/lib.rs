//! Reassign Core - core library for re-requesting pull request reviews
//!
//! This crate holds the data model, candidate filtering, configuration and
//! the interactive workflow. Network access lives behind [`HostApi`].

pub mod api;
pub mod candidates;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod prompt;
pub mod repo;
pub mod workflow;

pub use api::HostApi;
pub use candidates::{collect_candidates, is_candidate, CandidateSet};
pub use config::{Config, ConfigOverrides};
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use models::{AccountKind, IssueComment, PullRequestInfo, Review, User};
pub use prompt::{LinePrompter, Prompter};
pub use repo::RepoContext;
pub use workflow::{
    collect_candidate_reviewers, parse_pr_number, resolve_current_user, Outcome, ReassignWorkflow,
};
