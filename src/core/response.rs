//! Platform message limits
//!
//! Truncation helpers for outbound reply content. Embed descriptions and
//! plain message content have different platform limits.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Truncation helpers for outbound replies

/// Discord embed description limit
pub const EMBED_LIMIT: usize = 4096;
/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Truncate text to fit the embed limit, adding ellipsis if needed
pub fn truncate_for_embed(text: &str) -> String {
    truncate(text, EMBED_LIMIT)
}

/// Truncate text to fit the message limit, adding ellipsis if needed
pub fn truncate_for_message(text: &str) -> String {
    truncate(text, MESSAGE_LIMIT)
}

fn truncate(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }

    // Find a safe UTF-8 boundary, leaving room for "..."
    let mut end = limit - 3;
    while !text.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_for_embed("short text"), "short text");
        assert_eq!(truncate_for_message("short text"), "short text");
    }

    #[test]
    fn test_truncates_long_embed_text() {
        let text = "a".repeat(5000);
        let result = truncate_for_embed(&text);
        assert!(result.len() <= EMBED_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_truncates_long_message_text() {
        let text = "a".repeat(3000);
        let result = truncate_for_message(&text);
        assert!(result.len() <= MESSAGE_LIMIT);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_exactly_at_limit() {
        let text = "a".repeat(MESSAGE_LIMIT);
        assert_eq!(truncate_for_message(&text), text);
    }

    #[test]
    fn test_utf8_safety() {
        // Multi-byte characters must not be split mid-character
        let text = "世界".repeat(2000);
        let result = truncate_for_message(&text);
        assert!(result.len() <= MESSAGE_LIMIT);
        assert!(result.ends_with("..."));
    }
}
