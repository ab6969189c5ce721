//! Field-level validation contract for report registration.
//!
//! Input capture (the interactive shell) must run these checks and
//! re-prompt on failure before constructing a [`Report`](crate::Report);
//! the store trusts registered records and does not re-validate.

use thiserror::Error;

/// Maximum accepted length for any report text field, in characters.
pub const MAX_FIELD_LEN: usize = 256;

/// A field-level validation failure. Never fatal: the capture layer
/// re-prompts with the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was empty.
    #[error("{field} must not be empty")]
    Empty {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A text field exceeded [`MAX_FIELD_LEN`].
    #[error("{field} is too long: {len} characters (max {MAX_FIELD_LEN})")]
    TooLong {
        /// Name of the offending field.
        field: &'static str,
        /// Actual length in characters.
        len: usize,
    },

    /// Phone was not 10 or 11 digits.
    #[error("phone must contain only digits (10 or 11 of them)")]
    Phone,

    /// Email lacked an `@` followed later by a `.`.
    #[error("email must look like name@domain.tld")]
    Email,

    /// Date was not `YYYY-MM-DD` within the accepted ranges.
    #[error("date must be YYYY-MM-DD (year 1900-2100, month 01-12, day 01-31)")]
    Date,
}

/// Checks that a free-text field is non-empty and within [`MAX_FIELD_LEN`].
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] or [`ValidationError::TooLong`],
/// tagged with `field` for the re-prompt message.
pub fn text_field(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let len = value.chars().count();
    if len > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong { field, len });
    }
    Ok(())
}

/// Checks that a phone number is exactly 10 or 11 ASCII digits.
///
/// # Errors
///
/// Returns [`ValidationError::Phone`] otherwise.
pub fn phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.len();
    if (digits == 10 || digits == 11) && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::Phone)
    }
}

/// Checks that an email contains an `@` followed later by a `.`.
///
/// Deliberately shallow; real deliverability is out of scope.
///
/// # Errors
///
/// Returns [`ValidationError::Email`] otherwise.
pub fn email(value: &str) -> Result<(), ValidationError> {
    text_field("email", value)?;
    let mut has_at = false;
    let mut dot_after_at = false;
    for ch in value.chars() {
        if ch == '@' {
            has_at = true;
        } else if has_at && ch == '.' {
            dot_after_at = true;
        }
    }
    if has_at && dot_after_at {
        Ok(())
    } else {
        Err(ValidationError::Email)
    }
}

/// Checks that a date string is `YYYY-MM-DD` with year 1900-2100,
/// month 1-12, and day 1-31.
///
/// No days-in-month or leap-year cross-check is performed; `2024-02-31`
/// passes. That matches the data already on disk.
///
/// # Errors
///
/// Returns [`ValidationError::Date`] otherwise.
pub fn date(value: &str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(ValidationError::Date);
    }

    let year: u32 = value[0..4].parse().map_err(|_| ValidationError::Date)?;
    let month: u32 = value[5..7].parse().map_err(|_| ValidationError::Date)?;
    let day: u32 = value[8..10].parse().map_err(|_| ValidationError::Date)?;

    if (1900..=2100).contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day) {
        Ok(())
    } else {
        Err(ValidationError::Date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_rejects_empty_and_oversized() {
        assert_eq!(
            text_field("name", ""),
            Err(ValidationError::Empty { field: "name" })
        );
        let long = "x".repeat(MAX_FIELD_LEN + 1);
        assert_eq!(
            text_field("name", &long),
            Err(ValidationError::TooLong {
                field: "name",
                len: MAX_FIELD_LEN + 1
            })
        );
        assert!(text_field("name", "Maria Silva").is_ok());
    }

    #[test]
    fn phone_accepts_ten_or_eleven_digits() {
        assert!(phone("1187654321").is_ok());
        assert!(phone("11987654321").is_ok());
    }

    #[test]
    fn phone_rejects_other_shapes() {
        assert!(phone("123456789").is_err());
        assert!(phone("123456789012").is_err());
        assert!(phone("11-98765432").is_err());
        assert!(phone("").is_err());
    }

    #[test]
    fn email_requires_at_then_dot() {
        assert!(email("maria@example.com").is_ok());
        assert!(email("maria.silva@example.com").is_ok());
        assert!(email("maria.example@com").is_err());
        assert!(email("maria@examplecom").is_err());
        assert!(email("mariaexample.com").is_err());
        assert!(email("").is_err());
    }

    #[test]
    fn date_accepts_iso_shape_within_ranges() {
        assert!(date("2024-03-12").is_ok());
        assert!(date("1900-01-01").is_ok());
        assert!(date("2100-12-31").is_ok());
        // No days-in-month cross-check.
        assert!(date("2024-02-31").is_ok());
    }

    #[test]
    fn date_rejects_bad_shapes_and_ranges() {
        assert!(date("2024-3-12").is_err());
        assert!(date("12/03/2024").is_err());
        assert!(date("2024-13-01").is_err());
        assert!(date("2024-00-01").is_err());
        assert!(date("2024-01-32").is_err());
        assert!(date("1899-12-31").is_err());
        assert!(date("2101-01-01").is_err());
        assert!(date("2024-03-12x").is_err());
    }
}
