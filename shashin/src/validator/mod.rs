//! Pure field checks shared by every form.
//!
//! Each validator reports at most one error, and never touches I/O, so a form
//! can re-run them on every keystroke and again on submit.

mod email;
mod password;
mod strength;

pub use email::validate_email;
pub use password::validate_password;
pub use password::validate_password_confirmation;
pub use password::validate_password_present;
pub use strength::PasswordStrength;
pub use strength::password_strength;

pub use crate::error::ValidationError;

pub type ValidationResult = std::result::Result<(), ValidationError>;

/// `{ isValid, errorMessage }` view over a [`ValidationResult`].
pub trait ValidationResultExt {
    fn is_valid(&self) -> bool;
    fn error_message(&self) -> Option<String>;
}

impl ValidationResultExt for ValidationResult {
    fn is_valid(&self) -> bool {
        self.is_ok()
    }

    fn error_message(&self) -> Option<String> {
        self.as_ref().err().map(ToString::to_string)
    }
}
