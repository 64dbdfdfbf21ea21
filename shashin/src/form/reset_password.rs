use futures_signals::signal::Mutable;
use serde::Deserialize;
use serde::Serialize;
use url::Url;
use url::form_urlencoded;

use super::FormFields;
use super::Flow;
use crate::constants::INVALID_RESET_LINK;
use crate::constants::RESET_TOKEN_PARAM;
use crate::validator::ValidationResult;
use crate::validator::validate_password_confirmation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// The token comes from the emailed link and is fixed for the page's lifetime.
#[derive(Debug, Clone)]
pub struct ResetPasswordFields {
    token: String,
    pub new_password: Mutable<String>,
    pub confirm_password: Mutable<String>,
}

impl ResetPasswordFields {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            new_password: Mutable::new(String::new()),
            confirm_password: Mutable::new(String::new()),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FormFields for ResetPasswordFields {
    type Request = ResetPasswordRequest;

    const FLOW: Flow = Flow::RESET_PASSWORD;

    fn validate(&self) -> ValidationResult {
        validate_password_confirmation(&self.new_password.lock_ref(), &self.confirm_password.lock_ref())
    }

    fn request_body(&self) -> Self::Request {
        ResetPasswordRequest {
            token: self.token.clone(),
            new_password: self.new_password.get_cloned(),
            confirm_password: self.confirm_password.get_cloned(),
        }
    }

    fn clear(&self) {
        self.new_password.set_neq(String::new());
        self.confirm_password.set_neq(String::new());
    }
}

/// Whether the reset page can show its form at all.
#[derive(Debug, Clone)]
pub enum ResetPasswordPage {
    Ready(ResetPasswordFields),
    /// No usable `token` in the link: only the invalid-link text is shown.
    InvalidLink,
}

impl ResetPasswordPage {
    /// `query` is the raw query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let token = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == RESET_TOKEN_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|token| !token.is_empty());

        match token {
            Some(token) => ResetPasswordPage::Ready(ResetPasswordFields::new(token)),
            None => ResetPasswordPage::InvalidLink,
        }
    }

    pub fn from_url(url: &Url) -> Self {
        Self::from_query(url.query().unwrap_or_default())
    }

    pub fn invalid_link_message(&self) -> Option<&'static str> {
        match self {
            ResetPasswordPage::Ready(_) => None,
            ResetPasswordPage::InvalidLink => Some(INVALID_RESET_LINK),
        }
    }
}
