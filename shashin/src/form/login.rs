use futures_signals::signal::Mutable;
use serde::Deserialize;
use serde::Serialize;

use super::FormFields;
use super::Flow;
use crate::validator::ValidationResult;
use crate::validator::validate_email;
use crate::validator::validate_password_present;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoginFields {
    pub email: Mutable<String>,
    pub password: Mutable<String>,
}

impl LoginFields {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormFields for LoginFields {
    type Request = LoginRequest;

    const FLOW: Flow = Flow::LOGIN;

    fn validate(&self) -> ValidationResult {
        validate_email(&self.email.lock_ref())?;
        validate_password_present(&self.password.lock_ref())
    }

    fn request_body(&self) -> Self::Request {
        LoginRequest {
            email: self.email.get_cloned(),
            password: self.password.get_cloned(),
        }
    }

    fn clear(&self) {
        self.email.set_neq(String::new());
        self.password.set_neq(String::new());
    }
}
