// SPDX-License-Identifier: MIT

//! Saved-post dataset intake.

use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::models::RawPost;

/// Load saved posts from a JSON file.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<RawPost>, AppError> {
    let json_data = fs::read_to_string(path.as_ref())
        .map_err(|e| AppError::Load(format!("{}: {}", path.as_ref().display(), e)))?;
    load_from_json(&json_data)
}

/// Load saved posts from a JSON string.
///
/// The payload must be a JSON array of `{text, created_at}` objects.
/// Anything else is fatal to intake: no partial classification happens.
pub fn load_from_json(json_data: &str) -> Result<Vec<RawPost>, AppError> {
    let value: serde_json::Value = serde_json::from_str(json_data)
        .map_err(|e| AppError::Load(format!("invalid JSON: {}", e)))?;

    if !value.is_array() {
        return Err(AppError::Load("payload is not an array".to_string()));
    }

    let posts: Vec<RawPost> = serde_json::from_value(value)
        .map_err(|e| AppError::Load(format!("malformed post entry: {}", e)))?;

    tracing::info!(count = posts.len(), "Loaded saved posts");
    Ok(posts)
}
