//! Shared JSON file helpers for the persistence layer.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tokio::fs;

use crate::error::AppError;

/// Reads and parses `path`, returning `None` if the file does not exist.
pub async fn read_json_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, AppError> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(storage_error("Failed to read file", path, e)),
    };

    serde_json::from_str(&text).map(Some).map_err(|e| {
        AppError::storage(
            "Malformed JSON document",
            json!({
                "path": path.display().to_string(),
                "reason": e.to_string(),
                "line": e.line(),
            }),
        )
    })
}

/// Serializes `value` as pretty JSON and swaps it into place.
///
/// The document is written to a temporary sibling first and then renamed over
/// `path`, so readers never observe a half-written file.
pub async fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| storage_error("Failed to create directory", parent, e))?;
    }

    let mut body = serde_json::to_string_pretty(value)?;
    body.push('\n');

    let tmp = tmp_path(path);
    fs::write(&tmp, body)
        .await
        .map_err(|e| storage_error("Failed to write file", &tmp, e))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| storage_error("Failed to replace file", path, e))?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn storage_error(message: &str, path: &Path, e: std::io::Error) -> AppError {
    AppError::storage(
        message,
        json!({ "path": path.display().to_string(), "reason": e.to_string() }),
    )
}
