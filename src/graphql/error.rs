//! Field-scoped errors raised by connection resolution

use async_graphql::ErrorExtensions;

use super::global_id::GlobalIdError;

/// Why a connection (or node lookup) could not be resolved.
///
/// Each variant surfaces as a GraphQL field error with an `extensions.code`;
/// sibling fields keep resolving.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// An `after`/`before` cursor or node ID could not be decoded
    #[error("invalid cursor: {0}")]
    InvalidCursor(#[from] GlobalIdError),

    /// Pagination or lookup arguments out of range or missing
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Propagated unchanged from the repository
    #[error("repository error: {0}")]
    Repository(#[from] sqlx::Error),
}

impl ConnectionError {
    pub fn code(&self) -> &'static str {
        match self {
            ConnectionError::InvalidCursor(_) => "INVALID_CURSOR",
            ConnectionError::InvalidArgument(_) => "INVALID_ARGUMENT",
            ConnectionError::Repository(_) => "REPOSITORY_ERROR",
        }
    }
}

impl ErrorExtensions for ConnectionError {
    fn extend(&self) -> async_graphql::Error {
        if let ConnectionError::Repository(e) = self {
            tracing::error!(error = %e, "Repository call failed");
        }
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Map a raw repository failure to a coded field error
pub(crate) fn repository_error(e: sqlx::Error) -> async_graphql::Error {
    ConnectionError::from(e).extend()
}
