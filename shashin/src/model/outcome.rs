use serde::Deserialize;
use serde::Serialize;

/// Normalized result of one request issued by the transport adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerOutcome {
    /// 2xx. The body message is kept for logging; forms show their own text.
    Accepted { message: Option<String> },
    /// Non-2xx. `message` is the body's `message` field, or the fallback text.
    Rejected { status: u16, message: String },
    /// No response at all (DNS, connect, timeout).
    Unreachable { message: String },
}

impl ServerOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ServerOutcome::Accepted { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ServerOutcome::Accepted { message } => message.as_deref(),
            ServerOutcome::Rejected { message, .. } | ServerOutcome::Unreachable { message } => Some(message),
        }
    }
}
