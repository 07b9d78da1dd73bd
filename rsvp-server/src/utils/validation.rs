//! Input validation helpers
//!
//! Length limits for values organizers and guests can write.

use crate::utils::AppError;

/// Record ids
pub const MAX_ID_LEN: usize = 128;

/// Short free-text values: payment status, shirt size and type
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Setting names
pub const MAX_SETTING_NAME_LEN: usize = 100;

/// Serialized setting values
pub const MAX_SETTING_VALUE_LEN: usize = 16 * 1024;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must not be empty"),
        ));
    }
    if value.len() > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", v.len()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("paid", "status", MAX_SHORT_TEXT_LEN).is_ok());

        let err = validate_required_text("  ", "status", MAX_SHORT_TEXT_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "status must not be empty");

        let long = "x".repeat(MAX_ID_LEN + 1);
        let err = validate_required_text(&long, "id", MAX_ID_LEN).unwrap_err();
        assert!(err.message.starts_with("id is too long"));
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(None, "method", MAX_SHORT_TEXT_LEN).is_ok());
        assert!(validate_optional_text(Some("card"), "method", MAX_SHORT_TEXT_LEN).is_ok());

        let long = "x".repeat(MAX_SHORT_TEXT_LEN + 1);
        assert!(validate_optional_text(Some(&long), "method", MAX_SHORT_TEXT_LEN).is_err());
    }
}
