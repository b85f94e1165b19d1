//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use gym_common::AppError;
use gym_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation, including policy denials and guard conflicts
    Domain(DomainError),

    /// Application error (auth, configuration)
    App(AppError),

    /// Resource not found or hidden from the caller
    NotFound { resource: &'static str, id: String },

    /// Request-level validation that needs more than one field
    Validation(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use gym_core::Snowflake;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::not_found("WorkoutPlan", 123);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.to_string().contains("WorkoutPlan not found: 123"));
    }

    #[test]
    fn test_domain_taxonomy() {
        let forbidden = ServiceError::from(DomainError::forbidden("not allowed to create WorkoutPlan"));
        assert_eq!(forbidden.status_code(), 403);
        assert_eq!(forbidden.error_code(), "FORBIDDEN");

        let conflict = ServiceError::from(DomainError::ActiveMembershipExists(Snowflake::new(3)));
        assert_eq!(conflict.status_code(), 409);

        let invalid = ServiceError::from(DomainError::invalid_field("member_id", "user 9 does not exist"));
        assert_eq!(invalid.status_code(), 400);

        let db = ServiceError::from(DomainError::DatabaseError("connection reset".to_string()));
        assert_eq!(db.status_code(), 500);
    }

    #[test]
    fn test_unknown_caller_is_unauthenticated() {
        let err = ServiceError::from(AppError::UnknownCaller);
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("end_date must be after start_date");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
