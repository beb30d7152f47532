//! Word validation.

use crate::error::{PikeError, Result};

/// Returns false if `text` contains a control character (code point below 0x20).
pub fn is_valid_word(text: &str) -> bool {
    !text.chars().any(|c| c < ' ')
}

/// Fails with `InvalidArgument` if `text` contains a control character.
pub fn validate_word(text: &str) -> Result<()> {
    if is_valid_word(text) {
        Ok(())
    } else {
        Err(PikeError::invalid_argument(format!(
            "invalid symbol in word {text:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_words_are_valid() {
        assert!(is_valid_word("fluffy cat"));
        assert!(is_valid_word(""));
        assert!(is_valid_word("ёжик-42"));
    }

    #[test]
    fn test_control_characters_are_rejected() {
        assert!(!is_valid_word("fluffy\u{12}cat"));
        assert!(!is_valid_word("tab\there"));
        assert!(!is_valid_word("\n"));

        let err = validate_word("bad\u{1}").unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
