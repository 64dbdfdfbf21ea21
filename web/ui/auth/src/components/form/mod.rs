pub mod email_input;
pub mod password_input;

pub use email_input::EmailInput;
pub use password_input::PasswordInput;
