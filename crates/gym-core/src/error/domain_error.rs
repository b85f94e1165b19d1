//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Snowflake, UnknownChoice};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    /// The row does not exist or is outside the caller's visible set
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: Snowflake },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    UnknownChoice(#[from] UnknownChoice),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Forbidden: {0}")]
    Forbidden(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Member {0} already has an active membership")]
    ActiveMembershipExists(Snowflake),

    #[error("{field} must reference a {expected}")]
    RoleMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{field} references a deleted account")]
    DeletedActor { field: &'static str },

    #[error("A trainer cannot be assigned to themselves")]
    SelfAssignment,

    #[error("Member is already assigned to this trainer")]
    DuplicateAssignment,

    #[error("This exercise already occupies that order in the plan")]
    DuplicatePlanSlot,

    #[error("Username already in use")]
    UsernameTaken,

    #[error("Email already in use")]
    EmailTaken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn not_found(resource: &'static str, id: Snowflake) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",

            Self::ValidationError(_) | Self::InvalidField { .. } => "VALIDATION_ERROR",
            Self::UnknownChoice(_) => "INVALID_CHOICE",

            Self::Forbidden(_) => "FORBIDDEN",

            Self::ActiveMembershipExists(_) => "ACTIVE_MEMBERSHIP_EXISTS",
            Self::RoleMismatch { .. } => "ROLE_MISMATCH",
            Self::DeletedActor { .. } => "DELETED_ACTOR",
            Self::SelfAssignment => "SELF_ASSIGNMENT",
            Self::DuplicateAssignment => "DUPLICATE_ASSIGNMENT",
            Self::DuplicatePlanSlot => "DUPLICATE_PLAN_SLOT",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidField { .. } | Self::UnknownChoice(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::ActiveMembershipExists(_)
                | Self::RoleMismatch { .. }
                | Self::DeletedActor { .. }
                | Self::SelfAssignment
                | Self::DuplicateAssignment
                | Self::DuplicatePlanSlot
                | Self::UsernameTaken
                | Self::EmailTaken
        )
    }
}
