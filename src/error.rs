use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompassError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CompassError {
    pub fn validation(message: impl Into<String>) -> Self {
        CompassError::Validation(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        CompassError::InvalidArgument(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            CompassError::Validation(msg) => ErrorPayload::new(
                ErrorCategory::Validation,
                msg.to_string(),
                "Check axis labels, multipliers (±1) and answer values (-2..2) in the input data.",
            ),
            CompassError::InvalidArgument(msg) => ErrorPayload::new(
                ErrorCategory::Argument,
                msg.to_string(),
                "Use a positive --max-diff and hex colors like #abc or #aabbcc.",
            ),
            CompassError::Config(msg) => ErrorPayload::new(
                ErrorCategory::Config,
                msg.to_string(),
                "Check the config file and flags (e.g., max_diff_per_question > 0).",
            ),
            CompassError::Io(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            CompassError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check JSON inputs; run with --verbose for details.",
            ),
            CompassError::Yaml(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check YAML inputs; run with --verbose for details.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompassError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Validation,
    Argument,
    Config,
    Input,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
