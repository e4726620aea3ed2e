//! Typed errors for configuration and request dispatch.

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config load: {0}")]
    Load(String),
    #[error("config parse: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("validation: {0}")]
    Validation(String),
    #[error("invalid env var {name}: {message}")]
    Env { name: &'static str, message: String },
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("transport: {0}")]
    Transport(String),
    #[error("http status {status}")]
    Status {
        status: u16,
        body: String,
        detail: Option<ErrorDetail>,
    },
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("unknown service: {0}")]
    UnknownService(String),
}

impl ApiError {
    /// HTTP status for `Status` errors, `None` for everything else.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Builds a `Status` error, parsing the standard error envelope out of the body if present.
    pub fn from_status(status: u16, body: String) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(&body).ok().map(|b| b.error);
        ApiError::Status { status, body, detail }
    }
}

/// `{"error": {...}}` envelope returned by servers on failure.
#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}
