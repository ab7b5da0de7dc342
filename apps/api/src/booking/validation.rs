//! Contact validation — deliberately superficial, matching the widget's
//! submit gate: a real name has more than one character, a real phone has
//! at least five consecutive digits somewhere in it.

use crate::errors::AppError;

/// Minimum run of consecutive digits for a phone number to count.
const MIN_PHONE_DIGIT_RUN: usize = 5;

pub fn name_is_valid(name: &str) -> bool {
    name.trim().chars().count() > 1
}

pub fn phone_is_valid(phone: &str) -> bool {
    let mut run = 0;
    for c in phone.chars() {
        if c.is_ascii_digit() {
            run += 1;
            if run >= MIN_PHONE_DIGIT_RUN {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// Gate for booking submission. Failure rejects the submit — nothing is
/// partially committed.
pub fn validate_contact(name: &str, phone: &str) -> Result<(), AppError> {
    if !name_is_valid(name) {
        return Err(AppError::Validation(
            "Name must be at least 2 characters".to_string(),
        ));
    }
    if !phone_is_valid(phone) {
        return Err(AppError::Validation(
            "Phone must contain at least 5 consecutive digits".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_requires_two_chars_after_trim() {
        assert!(name_is_valid("Ali"));
        assert!(name_is_valid("  Bo  "));
        assert!(!name_is_valid("A"));
        assert!(!name_is_valid("   "));
        assert!(!name_is_valid(""));
    }

    #[test]
    fn test_phone_needs_five_consecutive_digits() {
        assert!(phone_is_valid("0501234567"));
        assert!(phone_is_valid("+971 56778 999"));
        assert!(!phone_is_valid("123"));
        assert!(!phone_is_valid("1-2-3-4-5"));
        assert!(!phone_is_valid("call me"));
    }

    #[test]
    fn test_fully_spaced_numbers_never_reach_five_in_a_row() {
        // Every group here is shorter than 5, so the run requirement fails
        // even though the string has 12 digits total.
        assert!(!phone_is_valid("+971 56 778 999 00"));
    }

    #[test]
    fn test_digit_run_resets_on_separator() {
        // 4 digits, break, 4 digits — never reaches 5 in a row
        assert!(!phone_is_valid("1234-5678"));
        assert!(phone_is_valid("1234-56789"));
    }

    #[test]
    fn test_validate_contact_accepts_reference_pair() {
        assert!(validate_contact("Ali", "0501234567").is_ok());
    }

    #[test]
    fn test_validate_contact_rejects_short_phone() {
        let err = validate_contact("Ali", "123").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_validate_contact_rejects_empty_name() {
        assert!(validate_contact("", "0501234567").is_err());
    }
}
