//! Pure field validators for user input.
//!
//! The presentation layer calls these on every change event and renders
//! the returned error inline; no form-binding state lives down here. All
//! of these are user-input states, not failures: nothing is logged,
//! nothing propagates past the current screen.

use std::sync::LazyLock;

use regex::Regex;

/// Registration-grade email pattern. The reservation wizard uses the
/// weaker [`email`] rule instead.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a fixed literal; it cannot fail to compile.
    Regex::new("^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\\.[A-Za-z]{2,}$").unwrap()
});

/// Length of the SMS one-time code.
pub const OTP_CODE_LEN: usize = 6;

/// Validation failure for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field is empty
    #[error("this field is required")]
    Required,

    /// Fewer characters than the field's minimum
    #[error("must be at least {min} characters")]
    TooShort { min: usize },

    /// Not enough digits for a phone number
    #[error("enter a valid phone number")]
    InvalidPhone,

    /// Not a plausible email address
    #[error("enter a valid email address")]
    InvalidEmail,

    /// Confirmation does not match the password
    #[error("passwords do not match")]
    PasswordMismatch,

    /// One-time code is not exactly the expected digits
    #[error("code must be {expected} digits")]
    InvalidCode { expected: usize },
}

/// Full name: required, at least 3 characters.
///
/// Lengths are counted in characters and the value is not trimmed first,
/// so a name of three spaces passes.
pub fn full_name(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if value.chars().count() < 3 {
        return Err(FieldError::TooShort { min: 3 });
    }
    Ok(())
}

/// Phone number: required, at least 10 digits. No other format checks.
pub fn phone(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if value.chars().filter(char::is_ascii_digit).count() < 10 {
        return Err(FieldError::InvalidPhone);
    }
    Ok(())
}

/// The reservation wizard's weak email rule: both `@` and `.` present.
pub fn email(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if !value.contains('@') || !value.contains('.') {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// The registration screen's strict email rule.
pub fn email_strict(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

/// Password: required, at least 8 characters.
pub fn password(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if value.chars().count() < 8 {
        return Err(FieldError::TooShort { min: 8 });
    }
    Ok(())
}

/// Password confirmation: required, must equal the password.
pub fn password_confirmation(password: &str, confirmation: &str) -> Result<(), FieldError> {
    if confirmation.is_empty() {
        return Err(FieldError::Required);
    }
    if password != confirmation {
        return Err(FieldError::PasswordMismatch);
    }
    Ok(())
}

/// SMS one-time code: exactly [`OTP_CODE_LEN`] ASCII digits.
pub fn otp_code(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let all_digits = value.chars().all(|c| c.is_ascii_digit());
    if value.chars().count() != OTP_CODE_LEN || !all_digits {
        return Err(FieldError::InvalidCode {
            expected: OTP_CODE_LEN,
        });
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Any string with ten or more digits is an acceptable phone.
        #[test]
        fn phone_accepts_ten_digits(s in "[0-9]{10,15}") {
            prop_assert_eq!(phone(&s), Ok(()));
        }

        /// Six-digit strings always pass the OTP rule.
        #[test]
        fn otp_accepts_six_digits(s in "[0-9]{6}") {
            prop_assert_eq!(otp_code(&s), Ok(()));
        }

        /// Everything the strict email rule accepts, the weak rule accepts too.
        #[test]
        fn strict_implies_weak(s in "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,4}") {
            prop_assert_eq!(email_strict(&s), Ok(()));
            prop_assert_eq!(email(&s), Ok(()));
        }
    }
}
