//! Text measurements derived from generated content.

/// Characters kept in a history preview before the ellipsis.
pub const PREVIEW_CHARS: usize = 200;

/// Number of whitespace-delimited tokens.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Number of Unicode scalar values.
pub fn character_count(content: &str) -> usize {
    content.chars().count()
}

/// First [`PREVIEW_CHARS`] characters, with `...` appended when truncated.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}
