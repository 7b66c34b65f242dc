//! Unified error types for the catalog.
//!
//! Every failure the core produces is one of the typed kinds below. Collaborator
//! failures (database, filesystem, environment) are wrapped rather than swallowed,
//! and a storage lookup that finds nothing is reported as `Option::None` by the
//! store functions, never as an error.

use thiserror::Error;

/// Every failure the catalog reports.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity that was looked up.
        entity: &'static str,
        /// Identifier that did not resolve.
        id: i64,
    },

    /// The entity exists but is in a state that forbids the operation.
    #[error("Invalid state: {message}")]
    InvalidState {
        /// What was wrong with the entity's state.
        message: String,
    },

    /// A uniqueness rule was violated.
    #[error("Conflict: {message}")]
    Conflict {
        /// Which value collided.
        message: String,
    },

    /// Caller-supplied data failed a precondition.
    #[error("Validation failed: {message}")]
    Validation {
        /// Which precondition failed.
        message: String,
    },

    /// The session gate rejected the caller.
    #[error("Session is not valid for user {user_id}")]
    Unauthorized {
        /// User whose session was rejected.
        user_id: i64,
    },

    /// Catalog configuration could not be read, parsed or applied.
    #[error("Configuration error: {message}")]
    Config {
        /// What could not be read or applied.
        message: String,
    },

    /// The database rejected a query or could not be reached.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem failure, e.g. creating the SQLite directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used by the transport boundary to pick a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`Error::NotFound`].
    NotFound,
    /// See [`Error::InvalidState`].
    InvalidState,
    /// See [`Error::Conflict`].
    Conflict,
    /// See [`Error::Validation`].
    Validation,
    /// See [`Error::Unauthorized`].
    Unauthorized,
    /// Configuration, database and I/O failures.
    Internal,
}

impl Error {
    /// Shorthand for [`Error::NotFound`].
    #[must_use]
    pub const fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Shorthand for [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Classifies the error for the caller.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::Config { .. } | Self::Database(_) | Self::Io(_) => ErrorKind::Internal,
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            Error::not_found("project", 7).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(Error::validation("empty").kind(), ErrorKind::Validation);
        assert_eq!(
            Error::Conflict {
                message: "sku".to_string()
            }
            .kind(),
            ErrorKind::Conflict
        );
        assert_eq!(
            Error::Database(sea_orm::DbErr::Custom("boom".to_string())).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_not_found_message_names_entity() {
        let err = Error::not_found("shared product", 42);
        assert_eq!(err.to_string(), "shared product not found: 42");
    }
}
