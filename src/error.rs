use serde_json::{Value, json};

/// Errors surfaced by the pipeline.
///
/// Each variant carries a human-readable message plus a structured `details`
/// payload that ends up in the log line for the failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("source unavailable: {message}")]
    SourceUnavailable { message: String, details: Value },
    #[error("validation error: {message}")]
    Validation { message: String, details: Value },
    #[error("storage error: {message}")]
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn source_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::SourceUnavailable { details, .. }
            | AppError::Validation { details, .. }
            | AppError::Storage { details, .. } => details,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::storage("I/O failure", json!({ "reason": e.to_string() }))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::storage(
            "Malformed JSON document",
            json!({ "reason": e.to_string(), "line": e.line(), "column": e.column() }),
        )
    }
}

pub fn map_reqwest_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        return AppError::source_unavailable(
            "Request timed out",
            json!({ "url": e.url().map(|u| u.as_str()) }),
        );
    }

    if let Some(status) = e.status() {
        return AppError::source_unavailable(
            "Unexpected response status",
            json!({ "status": status.as_u16(), "url": e.url().map(|u| u.as_str()) }),
        );
    }

    AppError::source_unavailable("Request failed", json!({ "reason": e.to_string() }))
}
