use thiserror::Error;

/// Top-level application error.
/// Every variant carries a human-readable message for display/logging.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Transport errors ─────────────────────────────────────────────────────
    #[error("Network response was not ok (status {status})")]
    ResponseNotOk { status: u16 },

    #[error("Request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid reply from chat service: {message}")]
    InvalidReply { message: String },

    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

    // ── Conversation errors ──────────────────────────────────────────────────
    #[error("A message is already being sent")]
    SubmissionInFlight,

    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidConfig { key: String, message: String },
}

impl AppError {
    pub fn request_failed(url: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::RequestFailed { url: url.into(), source }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyField { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::ResponseNotOk { .. }
                | AppError::RequestFailed { .. }
                | AppError::InvalidReply { .. }
        )
    }
}
