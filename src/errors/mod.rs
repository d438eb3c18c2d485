use anyhow::Context as _;
use std::path::Path;

/// Add context to dataset read errors
pub fn read_context(path: &Path) -> String {
    format!("Failed to read dataset from: {}", path.display())
}

/// Add context to dataset parse errors
pub fn parse_context(path: &Path, json: &str) -> String {
    format!(
        "Failed to parse dataset {}. First 200 chars: {}",
        path.display(),
        preview(json, 200)
    )
}

/// Message for a player id with no roster entry
pub fn player_not_found(id: &str) -> String {
    format!("Player not found: {}", id)
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &Path) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| read_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, path: &Path, json: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.with_context(|| parse_context(path, json))
}

fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
