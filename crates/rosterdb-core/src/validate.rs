//! Field checks for the presentation layer.
//!
//! The registry's own constraint checks cover uniqueness and references;
//! required-field and email-shape validation belong to the caller's forms.
//! These helpers keep those checks in one place.

use crate::error::ValidationError;

/// Check that a required field is non-blank (not empty, not whitespace-only).
pub fn non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

/// Check that a value has the shape of an email address.
///
/// Accepts `local@domain.tld` where the local part and both domain segments
/// are nonempty and contain no whitespace or extra `@`. Matches the common
/// form-level pattern `^[^\s@]+@[^\s@]+\.[^\s@]+$`; this is a shape check,
/// not RFC 5322 validation.
pub fn email_format(value: &str) -> Result<(), ValidationError> {
    let reject = || ValidationError::InvalidEmail {
        value: value.to_string(),
    };

    let (local, domain) = value.split_once('@').ok_or_else(reject)?;
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return Err(reject());
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return Err(reject());
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) if !head.is_empty() && !tail.is_empty() => Ok(()),
        _ => Err(reject()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert!(non_blank("name", "Hindi").is_ok());
        assert_eq!(
            non_blank("name", "   "),
            Err(ValidationError::Required { field: "name" })
        );
        assert!(non_blank("name", "").is_err());
    }

    #[test]
    fn test_email_format_accepts_plain_addresses() {
        assert!(email_format("ann@x.com").is_ok());
        assert!(email_format("first.last@sub.example.org").is_ok());
    }

    #[test]
    fn test_email_format_rejects_malformed_addresses() {
        for bad in [
            "",
            "ann",
            "ann@",
            "@x.com",
            "ann@xcom",
            "ann@x.",
            "ann@.com",
            "a nn@x.com",
            "ann@x. com",
            "ann@@x.com",
            "ann@x@y.com",
        ] {
            assert!(email_format(bad).is_err(), "accepted {bad:?}");
        }
    }
}
