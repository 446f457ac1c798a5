//! Error types for GitHub operations

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
#[derive(Error, Debug)]
pub enum Error {
    /// REST API error
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// HTTP transport error on the GraphQL endpoint
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL endpoint answered with a non-2xx status
    #[error("GraphQL request failed with status {status}: {body}")]
    GraphQLStatus { status: u16, body: String },

    /// GraphQL response carried an `errors` array
    #[error("GraphQL errors: {0}")]
    GraphQL(String),

    /// Authentication error
    #[error("GitHub authentication error: {0}")]
    Auth(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<Error> for reassign_core::Error {
    fn from(err: Error) -> Self {
        use reassign_core::Error as Core;

        match err {
            Error::Api(octocrab::Error::GitHub { source, .. }) => {
                let status = source.status_code.as_u16();
                if status == 401 {
                    Core::Auth(source.message.clone())
                } else {
                    Core::api(status, source.message.clone())
                }
            }
            Error::Api(e @ (octocrab::Error::Serde { .. } | octocrab::Error::Json { .. })) => {
                Core::Parse(e.to_string())
            }
            Error::Api(other) => Core::Network(other.to_string()),
            Error::Http(e) if e.is_decode() => Core::Parse(e.to_string()),
            Error::Http(e) => Core::Network(e.to_string()),
            Error::GraphQLStatus { status: 401, body } => Core::Auth(body),
            Error::GraphQLStatus { status, body } => Core::api(status, body),
            Error::GraphQL(message) => Core::Api {
                status: None,
                message,
            },
            Error::Auth(message) => Core::Auth(message),
            Error::Parse(message) => Core::Parse(message),
        }
    }
}
