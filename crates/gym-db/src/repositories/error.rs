//! Error handling utilities for repositories

use gym_core::error::DomainError;
use sqlx::error::ErrorKind;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Foreign-key and check violations are input problems and surface as
/// validation errors; everything else is a database error.
pub fn map_db_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.kind() {
            ErrorKind::ForeignKeyViolation => {
                let field = db_err
                    .constraint()
                    .and_then(|c| fk_field(c, db_err.table()))
                    .unwrap_or("reference");
                return DomainError::ValidationError(format!(
                    "{field} references a record that does not exist"
                ));
            }
            ErrorKind::CheckViolation => {
                return DomainError::ValidationError(format!(
                    "value violates constraint {}",
                    db_err.constraint().unwrap_or("check")
                ));
            }
            _ => {}
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
///
/// `on_unique` receives the violated constraint name when the driver reports one.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    map_db_error(e)
}

/// Column name from a default `{table}_{column}_fkey` constraint name
fn fk_field<'a>(constraint: &'a str, table: Option<&str>) -> Option<&'a str> {
    let rest = constraint.strip_suffix("_fkey")?;
    match table {
        Some(table) => rest
            .strip_prefix(table)
            .and_then(|r| r.strip_prefix('_'))
            .or(Some(rest)),
        None => Some(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fk_field() {
        assert_eq!(
            fk_field("workout_logs_exercise_id_fkey", Some("workout_logs")),
            Some("exercise_id")
        );
        assert_eq!(
            fk_field("custom_fkey", Some("workout_logs")),
            Some("custom")
        );
        assert_eq!(fk_field("users_email_key", Some("users")), None);
    }

    #[test]
    fn test_non_database_error_maps_to_database_error() {
        let err = map_db_error(SqlxError::RowNotFound);
        assert!(matches!(err, DomainError::DatabaseError(_)));

        let err = map_unique_violation(SqlxError::RowNotFound, |_| DomainError::EmailTaken);
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
