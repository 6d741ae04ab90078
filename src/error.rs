use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum FigxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("Figma API error (status: {status:?}): {message}")]
    FigmaApi {
        status: Option<StatusCode>,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl FigxError {
    pub fn figma_api(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        FigxError::FigmaApi {
            status,
            message: message.into(),
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        FigxError::Generation(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            FigxError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            FigxError::Network(e) => ErrorPayload::new(
                ErrorCategory::Network,
                e.to_string(),
                "Check connectivity/proxy/VPN and retry.",
            ),
            FigxError::InvalidUrl(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Verify URL/format (e.g., https://www.figma.com/file/<FILE_KEY>/...).",
            ),
            FigxError::FigmaApi { status, message } => {
                let remediation = match status.map(|s| s.as_u16()) {
                    Some(401) | Some(403) => {
                        "Check FIGMA_TOKEN; the token may be invalid or lack file access."
                    }
                    Some(404) => "Check the file key and that the file is shared with the token.",
                    Some(429) => "Figma rate limit reached; wait and retry.",
                    _ => "Check FIGMA_TOKEN/URL and rate limits; retry after waiting.",
                };
                ErrorPayload::new(
                    ErrorCategory::Figma,
                    format!("Figma API error (status {:?}): {}", status, message),
                    remediation,
                )
            }
            FigxError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check the input JSON; run with --verbose for details.",
            ),
            FigxError::Generation(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("timed out") {
                    ErrorPayload::new(
                        ErrorCategory::Generation,
                        msg.to_string(),
                        "Increase the generation timeout or use the minimal format for large documents.",
                    )
                } else if lower.contains("no document") {
                    ErrorPayload::new(
                        ErrorCategory::Generation,
                        msg.to_string(),
                        "The API response has no document node; fetch the file again or pass a node-id that exists.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Generation,
                        msg.to_string(),
                        "Try a different output format or check the Figma data structure.",
                    )
                }
            }
            FigxError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("figma_token") || lower.contains("figma token") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Set FIGMA_TOKEN (or FIGMA_OAUTH_TOKEN) before fetching from the Figma API.",
                    )
                } else if lower.contains("node-id") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Include a Figma node-id in the URL (e.g., ?node-id=1-2) or pass --node-id explicitly.",
                    )
                } else if lower.contains("file key") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use a Figma URL with a file key: https://www.figma.com/file/<FILE_KEY>/...",
                    )
                } else if lower.contains("snapshot") || lower.contains("not found") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Verify the snapshot path exists and contains a saved Figma API response (.json).",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags/paths (e.g., --input, --css) and required tokens.",
                    )
                }
            }
            FigxError::Unknown(msg) => ErrorPayload::new(
                ErrorCategory::Unknown,
                msg.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, FigxError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Network,
    Figma,
    Generation,
    Unknown,
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
