//! Reassign GitHub - GitHub integration for reassign-reviewer
//!
//! This crate provides the production [`reassign_core::HostApi`]: REST calls
//! through octocrab and the assigned-PR search through GraphQL.

mod client;
mod error;
mod graphql;
mod host;
mod rest;
#[cfg(test)]
mod test_server;

pub use client::{GitHubClient, USER_AGENT};
pub use error::{Error, Result};
pub use graphql::{assigned_search_query, SEARCH_PAGE_SIZE};
pub use rest::PER_PAGE;
