// ABOUTME: Structured error kinds for generative AI calls
// ABOUTME: Classifies Gemini API failures from status codes and error details

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenAIError {
    #[error("No API key configured")]
    MissingCredential,

    #[error("API key rejected: {0}")]
    InvalidCredential(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("Connection failed: {0}")]
    Transport(String),

    #[error("API returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
}

pub type GenAIResult<T> = Result<T, GenAIError>;

/// Coarse classification callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenAIErrorKind {
    Credential,
    RateLimited,
    Blocked,
    Transport,
    Upstream,
    EmptyResponse,
}

impl fmt::Display for GenAIErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GenAIErrorKind::Credential => "credential",
            GenAIErrorKind::RateLimited => "rate_limited",
            GenAIErrorKind::Blocked => "blocked",
            GenAIErrorKind::Transport => "transport",
            GenAIErrorKind::Upstream => "upstream",
            GenAIErrorKind::EmptyResponse => "empty_response",
        };
        f.write_str(s)
    }
}

impl GenAIError {
    pub fn kind(&self) -> GenAIErrorKind {
        match self {
            GenAIError::MissingCredential | GenAIError::InvalidCredential(_) => {
                GenAIErrorKind::Credential
            }
            GenAIError::RateLimited(_) => GenAIErrorKind::RateLimited,
            GenAIError::Blocked(_) => GenAIErrorKind::Blocked,
            GenAIError::Transport(_) => GenAIErrorKind::Transport,
            GenAIError::Upstream { .. } | GenAIError::InvalidResponse(_) => GenAIErrorKind::Upstream,
            GenAIError::EmptyResponse => GenAIErrorKind::EmptyResponse,
        }
    }

    pub fn is_credential_error(&self) -> bool {
        self.kind() == GenAIErrorKind::Credential
    }

    /// Classify a non-success Gemini response
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorEnvelope>(body).ok().map(|e| e.error);
        let message = detail
            .as_ref()
            .and_then(|d| d.message.clone())
            .unwrap_or_else(|| body.trim().chars().take(500).collect());

        let rpc_status = detail.as_ref().and_then(|d| d.status.as_deref()).unwrap_or("");
        let credential_reason = detail
            .as_ref()
            .map(|d| {
                d.details.iter().any(|info| {
                    matches!(
                        info.reason.as_deref(),
                        Some("API_KEY_INVALID") | Some("API_KEY_EXPIRED") | Some("API_KEY_SERVICE_BLOCKED")
                    )
                })
            })
            .unwrap_or(false);

        if status == 401
            || status == 403
            || credential_reason
            || matches!(rpc_status, "UNAUTHENTICATED" | "PERMISSION_DENIED")
        {
            GenAIError::InvalidCredential(message)
        } else if status == 429 || rpc_status == "RESOURCE_EXHAUSTED" {
            GenAIError::RateLimited(message)
        } else {
            GenAIError::Upstream { status, message }
        }
    }
}

impl From<reqwest::Error> for GenAIError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GenAIError::InvalidResponse(err.to_string())
        } else {
            GenAIError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<ErrorInfo>,
}

#[derive(Debug, Deserialize)]
struct ErrorInfo {
    #[serde(default)]
    reason: Option<String>,
}
