//! Error types for the LightBnB database layer
//!
//! This module provides a unified error type using thiserror. Lookups that
//! can legitimately miss return `Ok(None)` rather than an error, so callers
//! can always tell "no such row" apart from "the query failed".

use thiserror::Error;

/// Database layer error type
#[derive(Error, Debug)]
pub enum DbError {
    /// Requested resource not found
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Request arguments cannot be turned into a valid statement
    #[error("validation error: {0}")]
    Validation(String),

    /// Database query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error (bad or missing environment settings)
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl DbError {
    /// Create a not found error for a specific resource
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// Short stable code for logging and client-side matching
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Log the error with severity matched to its kind
    pub fn log(&self) {
        match self {
            Self::Database(_) | Self::Configuration(_) => {
                tracing::error!(error = %self, code = self.code(), "database layer error");
            }
            Self::NotFound { .. } | Self::Validation(_) => {
                tracing::debug!(error = %self, code = self.code(), "client error");
            }
        }
    }
}

impl From<anyhow::Error> for DbError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<DbError>() {
            Ok(db_err) => db_err,
            Err(err) => Self::Configuration(err.to_string()),
        }
    }
}

/// Result type alias for database operations
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_not_found_display() {
        let err = DbError::not_found("reservation", "42");
        assert_eq!(err.to_string(), "reservation not found: 42");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_validation_display() {
        let err = DbError::Validation("no fields to update".to_string());
        assert_eq!(err.to_string(), "validation error: no fields to update");
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_sqlx_error_converts() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert_matches!(err, DbError::Database(_));
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_anyhow_roundtrip_preserves_variant() {
        let original = DbError::not_found("user", "7");
        let through: DbError = anyhow::Error::new(original).into();
        assert_matches!(through, DbError::NotFound { .. });
    }

    #[test]
    fn test_anyhow_foreign_error_becomes_configuration() {
        let err: DbError = anyhow::anyhow!("bad PORT value").into();
        assert_matches!(err, DbError::Configuration(_));
    }
}
