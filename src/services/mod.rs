//! Service layer sitting between HTTP handlers and the repository.

use serde::Serialize;
use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod health;
pub mod search;

/// Error categories reported to API callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    MissingQuery,
    StoreUnavailable,
    InternalError,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Search query is required")]
    MissingQuery,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::MissingQuery => ErrorKind::MissingQuery,
            ServiceError::StoreUnavailable(_) => ErrorKind::StoreUnavailable,
            ServiceError::Internal(_) => ErrorKind::InternalError,
        }
    }

    /// Message safe to show to any caller.
    pub fn public_message(&self) -> &'static str {
        match self {
            ServiceError::MissingQuery => "Search query is required",
            ServiceError::StoreUnavailable(_) => "Database unavailable",
            ServiceError::Internal(_) => "Internal server error",
        }
    }

    /// Underlying cause, if any; only shown in development mode.
    pub fn details(&self) -> Option<&str> {
        match self {
            ServiceError::MissingQuery => None,
            ServiceError::StoreUnavailable(msg) | ServiceError::Internal(msg) => Some(msg),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::ConnectionError(msg) => ServiceError::StoreUnavailable(msg),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        match val {
            TypeConstraintError::EmptyString => ServiceError::MissingQuery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_errors_become_store_unavailable() {
        let err = ServiceError::from(RepositoryError::ConnectionError("timed out".to_string()));
        assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
        assert_eq!(err.details(), Some("timed out"));
    }

    #[test]
    fn other_repository_errors_are_internal() {
        let err = ServiceError::from(RepositoryError::DatabaseError("syntax".to_string()));
        assert_eq!(err.kind(), ErrorKind::InternalError);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn empty_term_is_missing_query() {
        let err = ServiceError::from(TypeConstraintError::EmptyString);
        assert_eq!(err.kind(), ErrorKind::MissingQuery);
        assert_eq!(err.details(), None);
    }

    #[test]
    fn kinds_serialize_by_name() {
        assert_eq!(
            serde_json::to_value(ErrorKind::StoreUnavailable).expect("serializable"),
            serde_json::json!("StoreUnavailable")
        );
    }
}
