use futures_signals::signal::Mutable;
use serde::Deserialize;
use serde::Serialize;

use super::FormFields;
use super::Flow;
use crate::validator::ValidationResult;
use crate::validator::validate_email;
use crate::validator::validate_password_confirmation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default)]
pub struct SignupFields {
    pub email: Mutable<String>,
    pub password: Mutable<String>,
    pub confirm_password: Mutable<String>,
}

impl SignupFields {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormFields for SignupFields {
    type Request = SignupRequest;

    const FLOW: Flow = Flow::SIGNUP;

    fn validate(&self) -> ValidationResult {
        validate_email(&self.email.lock_ref())?;
        validate_password_confirmation(&self.password.lock_ref(), &self.confirm_password.lock_ref())
    }

    fn request_body(&self) -> Self::Request {
        SignupRequest {
            email: self.email.get_cloned(),
            password: self.password.get_cloned(),
            confirm_password: self.confirm_password.get_cloned(),
        }
    }

    fn clear(&self) {
        self.email.set_neq(String::new());
        self.password.set_neq(String::new());
        self.confirm_password.set_neq(String::new());
    }
}
