use super::ValidationError;
use super::ValidationResult;
use crate::constants::PASSWORD_MAX_LENGTH;
use crate::constants::PASSWORD_MIN_LENGTH;

/// Checks a new password against the account policy.
///
/// Rules run in a fixed order and the first failure is reported: required,
/// length in `[8, 20]`, a digit, a lowercase letter, an uppercase letter, and
/// finally nothing outside `[A-Za-z0-9]`.
pub fn validate_password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }

    let length = value.chars().count();
    if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) {
        return Err(ValidationError::PasswordLength {
            min: PASSWORD_MIN_LENGTH,
            max: PASSWORD_MAX_LENGTH,
        });
    }

    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordDigit);
    }

    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordLowercase);
    }

    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordUppercase);
    }

    if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::PasswordSymbol);
    }

    Ok(())
}

/// Password rules first, then the confirmation field.
pub fn validate_password_confirmation(password: &str, confirm: &str) -> ValidationResult {
    validate_password(password)?;

    if confirm.is_empty() {
        return Err(ValidationError::ConfirmRequired);
    }

    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

/// Sign-in only needs a password to be present; existing accounts may predate the policy.
pub fn validate_password_present(value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(())
}
