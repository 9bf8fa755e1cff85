//! Validation and normalization for wishlist input fields.
//!
//! Titles must survive trimming; optional free-text fields collapse to
//! absent when they trim to nothing, so the store never holds empty
//! strings.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an item title in characters.
pub const MAX_TITLE_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate an external chat identifier: must be non-empty after trimming.
pub fn validate_chat_id(chat_id: &str) -> Result<(), String> {
    if chat_id.trim().is_empty() {
        return Err("chatId is required".to_string());
    }
    Ok(())
}

/// Validate an item title and return the trimmed form.
pub fn validate_title(title: &str) -> Result<String, String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Item title required".to_string());
    }
    if trimmed.len() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Item title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional free-text field, mapping empty-after-trim to `None`.
pub fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_chat_id ----------------------------------------------------

    #[test]
    fn chat_id_accepted() {
        assert!(validate_chat_id("chat-123").is_ok());
    }

    #[test]
    fn empty_chat_id_rejected() {
        let result = validate_chat_id("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("chatId is required"));
    }

    #[test]
    fn whitespace_chat_id_rejected() {
        assert!(validate_chat_id("   ").is_err());
    }

    // -- validate_title ------------------------------------------------------

    #[test]
    fn title_is_trimmed() {
        assert_eq!(validate_title("  Book  ").unwrap(), "Book");
    }

    #[test]
    fn empty_title_rejected() {
        let result = validate_title("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("title required"));
    }

    #[test]
    fn whitespace_only_title_rejected() {
        assert!(validate_title(" \t\n ").is_err());
    }

    #[test]
    fn title_at_max_length_accepted() {
        let title = "a".repeat(MAX_TITLE_LENGTH);
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn title_over_max_length_rejected() {
        let title = "a".repeat(MAX_TITLE_LENGTH + 1);
        let result = validate_title(&title);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("exceeds maximum length"));
    }

    // -- normalize_optional_text ---------------------------------------------

    #[test]
    fn absent_text_stays_absent() {
        assert_eq!(normalize_optional_text(None), None);
    }

    #[test]
    fn empty_text_becomes_absent() {
        assert_eq!(normalize_optional_text(Some(String::new())), None);
        assert_eq!(normalize_optional_text(Some("   ".to_string())), None);
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(
            normalize_optional_text(Some("  https://example.com  ".to_string())),
            Some("https://example.com".to_string())
        );
    }
}
