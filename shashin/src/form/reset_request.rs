use futures_signals::signal::Mutable;
use serde::Deserialize;
use serde::Serialize;

use super::FormFields;
use super::Flow;
use crate::validator::ValidationResult;
use crate::validator::validate_email;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetRequestRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default)]
pub struct ResetRequestFields {
    pub email: Mutable<String>,
}

impl ResetRequestFields {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormFields for ResetRequestFields {
    type Request = ResetRequestRequest;

    const FLOW: Flow = Flow::PASSWORD_RESET_REQUEST;

    fn validate(&self) -> ValidationResult {
        validate_email(&self.email.lock_ref())
    }

    fn request_body(&self) -> Self::Request {
        ResetRequestRequest {
            email: self.email.get_cloned(),
        }
    }

    fn clear(&self) {
        self.email.set_neq(String::new());
    }
}
