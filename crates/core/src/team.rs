//! Team member field rules.

use crate::error::{codes, CoreError};

/// Normalize an email for storage and uniqueness checks.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Validate and normalize an email address.
///
/// Blank input fails with `INVALID_EMAIL` here; callers that treat the
/// field as required check for absence first.
pub fn validate_email(raw: &str) -> Result<String, CoreError> {
    let email = normalize_email(raw);
    if email.is_empty() {
        return Err(CoreError::invalid(codes::INVALID_EMAIL, "Email must not be empty"));
    }
    if !email.contains('@') {
        return Err(CoreError::invalid(codes::INVALID_EMAIL, "Invalid email format"));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert_matches!(
            validate_email("ada.example.com"),
            Err(CoreError::Invalid { code: "INVALID_EMAIL", .. })
        );
    }

    #[test]
    fn rejects_blank() {
        assert!(validate_email("   ").is_err());
    }

    #[test]
    fn accepts_minimal_address() {
        assert_eq!(validate_email("a@b").unwrap(), "a@b");
    }
}
