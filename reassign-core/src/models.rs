//! Read-only snapshots of pull requests and their participants

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pull request row shown in the PR picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Author login (empty for deleted accounts)
    pub author: String,
    /// State as reported by the host ("OPEN", "CLOSED", ...)
    pub state: String,
    /// Whether the PR is a draft
    pub is_draft: bool,
    /// When the PR was created (ISO-8601)
    pub created_at: String,
    /// When the PR was last updated (ISO-8601)
    pub updated_at: String,
}

impl PullRequestInfo {
    /// State label with a draft marker, e.g. `OPEN (Draft)`
    pub fn state_label(&self) -> String {
        if self.is_draft {
            format!("{} (Draft)", self.state)
        } else {
            self.state.clone()
        }
    }

    /// Last update formatted for display
    ///
    /// Falls back to the raw text when it is not RFC 3339.
    pub fn updated_display(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.updated_at) {
            Ok(ts) => ts.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string(),
            Err(_) => self.updated_at.clone(),
        }
    }
}

/// Kind of account behind a login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountKind {
    #[default]
    User,
    Bot,
    Organization,
    #[serde(other)]
    Unknown,
}

/// A user reference as returned by the REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name
    #[serde(default)]
    pub login: String,
    /// Account kind (`type` on the wire)
    #[serde(rename = "type", default)]
    pub kind: AccountKind,
}

impl User {
    pub fn new(login: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            login: login.into(),
            kind,
        }
    }

    /// Shorthand for a human account
    pub fn human(login: impl Into<String>) -> Self {
        Self::new(login, AccountKind::User)
    }
}

/// A submitted pull request review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review author (absent for deleted accounts)
    pub user: Option<User>,
}

/// A conversation comment on the PR's issue thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    /// Comment author (absent for deleted accounts)
    pub user: Option<User>,
}
