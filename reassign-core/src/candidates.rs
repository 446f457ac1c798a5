//! Candidate reviewer collection
//!
//! Candidates are the humans who already reviewed or commented on a PR,
//! minus the invoking user. Order is first appearance, reviews before
//! comments.

use std::collections::HashSet;

use crate::{AccountKind, IssueComment, Review, User};

/// Login suffix GitHub gives to app accounts
pub const BOT_SUFFIX: &str = "[bot]";

/// Whether `user` may be offered as a reviewer to `self_login`
pub fn is_candidate(user: &User, self_login: &str) -> bool {
    let login = user.login.as_str();

    !login.is_empty()
        && !login.eq_ignore_ascii_case(self_login)
        && user.kind != AccountKind::Bot
        && !is_bot_login(login)
}

/// Whether a login carries the bot suffix
pub fn is_bot_login(login: &str) -> bool {
    login.len() >= BOT_SUFFIX.len()
        && login
            .get(login.len() - BOT_SUFFIX.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(BOT_SUFFIX))
}

/// Insertion-ordered set of candidate logins
///
/// Logins compare ASCII-case-insensitively; the first spelling seen is kept.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    self_login: String,
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl CandidateSet {
    /// Create an empty set for the given invoking user
    pub fn new(self_login: impl Into<String>) -> Self {
        Self {
            self_login: self_login.into(),
            ..Self::default()
        }
    }

    /// Add a user if it passes the filter; returns true when newly added
    pub fn insert(&mut self, user: &User) -> bool {
        if !is_candidate(user, &self.self_login)
            || !self.seen.insert(user.login.to_ascii_lowercase())
        {
            return false;
        }
        self.ordered.push(user.login.clone());
        true
    }

    pub fn extend<'a>(&mut self, users: impl IntoIterator<Item = &'a User>) {
        for user in users {
            self.insert(user);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Union review authors and comment authors into candidate logins
pub fn collect_candidates(
    reviews: &[Review],
    comments: &[IssueComment],
    self_login: &str,
) -> Vec<String> {
    let mut set = CandidateSet::new(self_login);
    set.extend(reviews.iter().filter_map(|r| r.user.as_ref()));
    set.extend(comments.iter().filter_map(|c| c.user.as_ref()));
    set.into_vec()
}
