use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use tracing::error;
use tracing::warn;

use super::HttpClient;
use super::HttpRequest;
use crate::constants::NETWORK_ERROR;
use crate::constants::SERVER_ERROR_FALLBACK;
use crate::model::ServerOutcome;

#[derive(Clone)]
pub struct TransportAdapter {
    client: Arc<dyn HttpClient>,
    base_url: String,
}

impl TransportAdapter {
    pub fn new(client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Issues exactly one JSON POST. Never retries; a retry is a new submission.
    pub async fn post<B>(&self, path: &str, body: &B) -> ServerOutcome
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path);
        let body = match serde_json::to_vec(body) {
            Ok(body) => body,
            Err(e) => {
                error!("transport::post::encode_failed::{}::{}", url, e);
                return ServerOutcome::Unreachable {
                    message: NETWORK_ERROR.to_string(),
                };
            },
        };

        debug!("transport::post::sending::{}", url);
        match self.client.execute(HttpRequest::post_json(url.clone(), body)).await {
            Ok(response) if response.is_success() => {
                debug!("transport::post::accepted::{}::{}", url, response.status);
                ServerOutcome::Accepted {
                    message: extract_message(&response.body),
                }
            },
            Ok(response) => {
                warn!("transport::post::rejected::{}::{}", url, response.status);
                ServerOutcome::Rejected {
                    status: response.status,
                    message: extract_message(&response.body).unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string()),
                }
            },
            Err(e) => {
                warn!("transport::post::unreachable::{}::{}", url, e);
                ServerOutcome::Unreachable {
                    message: NETWORK_ERROR.to_string(),
                }
            },
        }
    }
}

/// Reads `message` from a JSON body. Anything other than a non-blank string counts as absent.
fn extract_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let message = value.get("message")?.as_str()?;
    if message.trim().is_empty() {
        return None;
    }
    Some(message.to_string())
}
