//! Usecase error type.

use dine_core::errors::CoreError;
use dine_db::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before any write was attempted.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl AppError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Database(e) if e.is_not_found())
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<CoreError> for AppError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(msg) => Self::Validation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use dine_core::enums::EntityKind;
    use dine_core::errors::validate_visit_date;

    use super::*;

    #[test]
    fn core_validation_stays_validation() {
        let error: AppError = validate_visit_date("2024-1-10").unwrap_err().into();
        assert!(error.is_validation());
        assert!(!error.is_not_found());
    }

    #[test]
    fn database_not_found_is_reported_as_not_found() {
        let error = AppError::from(DatabaseError::NotFound {
            entity: EntityKind::Visit,
            id: "visit_missing".into(),
        });
        assert!(error.is_not_found());
        assert!(!error.is_validation());
    }
}
