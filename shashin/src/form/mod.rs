//! Field stores for each form and the fixed flow each one submits through.

mod login;
mod reset_password;
mod reset_request;
mod signup;

use std::time::Duration;

use serde::Serialize;

pub use login::LoginFields;
pub use login::LoginRequest;
pub use reset_password::ResetPasswordFields;
pub use reset_password::ResetPasswordPage;
pub use reset_password::ResetPasswordRequest;
pub use reset_request::ResetRequestFields;
pub use reset_request::ResetRequestRequest;
pub use signup::SignupFields;
pub use signup::SignupRequest;

use crate::constants::HOME_ROUTE;
use crate::constants::LOGIN_PATH;
use crate::constants::LOGIN_REDIRECT_DELAY;
use crate::constants::LOGIN_ROUTE;
use crate::constants::LOGIN_SUCCESS;
use crate::constants::PASSWORD_RESET_REQUEST_PATH;
use crate::constants::PASSWORD_RESET_REQUEST_SUCCESS;
use crate::constants::RESET_PASSWORD_PATH;
use crate::constants::RESET_PASSWORD_REDIRECT_DELAY;
use crate::constants::RESET_PASSWORD_SUCCESS;
use crate::constants::SIGNUP_PATH;
use crate::constants::SIGNUP_REDIRECT_DELAY;
use crate::constants::SIGNUP_SUCCESS;
use crate::validator::ValidationResult;

/// What happens after the server accepts a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    /// The inputs are replaced by the success text until the form is reset.
    ReplaceForm,
    /// The success text stays up, then the page navigates once.
    Redirect { target: &'static str, delay: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flow {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub success_message: &'static str,
    pub follow_up: FollowUp,
}

impl Flow {
    pub const PASSWORD_RESET_REQUEST: Flow = Flow {
        name: "password_reset_request",
        endpoint: PASSWORD_RESET_REQUEST_PATH,
        success_message: PASSWORD_RESET_REQUEST_SUCCESS,
        follow_up: FollowUp::ReplaceForm,
    };

    pub const RESET_PASSWORD: Flow = Flow {
        name: "reset_password",
        endpoint: RESET_PASSWORD_PATH,
        success_message: RESET_PASSWORD_SUCCESS,
        follow_up: FollowUp::Redirect {
            target: LOGIN_ROUTE,
            delay: RESET_PASSWORD_REDIRECT_DELAY,
        },
    };

    pub const LOGIN: Flow = Flow {
        name: "login",
        endpoint: LOGIN_PATH,
        success_message: LOGIN_SUCCESS,
        follow_up: FollowUp::Redirect {
            target: HOME_ROUTE,
            delay: LOGIN_REDIRECT_DELAY,
        },
    };

    pub const SIGNUP: Flow = Flow {
        name: "signup",
        endpoint: SIGNUP_PATH,
        success_message: SIGNUP_SUCCESS,
        follow_up: FollowUp::Redirect {
            target: LOGIN_ROUTE,
            delay: SIGNUP_REDIRECT_DELAY,
        },
    };
}

/// The values a form collects. Owned by its controller, edited by the view.
pub trait FormFields: Send + Sync + 'static {
    type Request: Serialize;

    const FLOW: Flow;

    /// Local checks, run before any request is made.
    fn validate(&self) -> ValidationResult;

    fn request_body(&self) -> Self::Request;

    /// Back to the values the form started with.
    fn clear(&self);
}
