use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;
use super::ValidationResult;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn validate_email(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }

    if !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::EmailInvalid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_input_as_required() {
        assert_eq!(validate_email(""), Err(ValidationError::EmailRequired));
        assert_eq!(validate_email("   "), Err(ValidationError::EmailRequired));
    }

    #[test]
    fn needs_a_dot_after_the_at_sign() {
        assert_eq!(validate_email("invalid-email"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("user@localhost"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("first.last@localhost"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("test@example.com"), Ok(()));
    }

    #[test]
    fn has_no_length_cap() {
        let local = "a".repeat(500);
        assert_eq!(validate_email(&format!("{local}@example.co.jp")), Ok(()));
    }
}
