//! Error types for reassign-reviewer

use thiserror::Error;

/// Result type alias for reassign operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for reassign operations
#[derive(Error, Debug)]
pub enum Error {
    /// Credentials missing or rejected by the host
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Transport failure talking to the host
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response or GraphQL error payload
    #[error("API error{}: {message}", status_suffix(.status))]
    Api {
        /// HTTP status, when the failure came with one
        status: Option<u16>,
        /// Message reported by the host
        message: String,
    },

    /// Invalid user input, e.g. a malformed PR number
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Nothing to choose from
    #[error("{0}")]
    EmptyResult(String),

    /// The user aborted an interactive prompt
    #[error("Cancelled: {0}")]
    Cancelled(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Git repository error
    #[error("Git error: {0}")]
    Git(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected response shape
    #[error("Parse error: {0}")]
    Parse(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

impl Error {
    /// Build an API error with an HTTP status
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl From<git2::Error> for Error {
    fn from(err: git2::Error) -> Self {
        Error::Git(err.message().to_string())
    }
}
