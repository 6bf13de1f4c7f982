//! Validation of raw flag values, done before any file is touched.

use crate::errors::{AppError, AppResult};
use crate::models::Assembly;

pub fn parse_assembly(raw: &str) -> AppResult<Assembly> {
    raw.parse()
}

/// Optional single-line title; an empty value means no title.
pub fn parse_title(raw: Option<&str>) -> AppResult<Option<String>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(title) if title.chars().any(char::is_control) => Err(AppError::Validation(
            "Title must be a single line of text (no newlines)".into(),
        )),
        Some(title) => Ok(Some(title.to_string())),
    }
}

/// Comma separated tags. Duplicates collapse, first occurrence wins the order.
pub fn parse_tags(raw: Option<&str>) -> AppResult<Vec<String>> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(Vec::new());
    };

    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim) {
        if tag.is_empty() {
            return Err(AppError::Validation("Tags must not be empty strings".into()));
        }
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    Ok(tags)
}
