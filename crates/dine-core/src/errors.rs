//! Cross-cutting error types for Dine.
//!
//! Storage errors (`DatabaseError`) and usecase errors (`AppError`) live in
//! their own crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised by the domain checks in this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (missing fields, bad formats).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Check that a visit date is a `YYYY-MM-DD` calendar date.
///
/// Date filters and sorts compare these strings lexicographically, which is
/// only correct for zero-padded ISO dates.
///
/// # Errors
///
/// Returns `CoreError::Validation` if the string is blank or not a valid date.
pub fn validate_visit_date(date: &str) -> Result<(), CoreError> {
    if date.trim().is_empty() {
        return Err(CoreError::Validation("visit date is required".into()));
    }
    if date.len() != 10 {
        return Err(CoreError::Validation(format!(
            "visit date '{date}' is not YYYY-MM-DD"
        )));
    }
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|e| CoreError::Validation(format!("visit date '{date}' is not YYYY-MM-DD: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso_date() {
        assert!(validate_visit_date("2024-01-10").is_ok());
    }

    #[test]
    fn rejects_blank_and_unpadded() {
        assert!(matches!(validate_visit_date("  "), Err(CoreError::Validation(_))));
        assert!(matches!(validate_visit_date("2024-1-10"), Err(CoreError::Validation(_))));
        assert!(matches!(validate_visit_date("10/01/2024"), Err(CoreError::Validation(_))));
    }
}
