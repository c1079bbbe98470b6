//! ASCII whitespace tokenizer: splits a text span into non-empty word
//! views and validates them, without allocating owned words.

use crate::core::error::{Error, ErrorKind};

fn is_split_byte(b: u8) -> bool {
    b <= b' '
}

/// A word is valid if none of its bytes is `< 0x20`.
pub fn is_valid_word(word: &str) -> bool {
    word.bytes().all(|b| b >= 0x20)
}

/// Split `text` on ASCII whitespace-or-control bytes, returning non-empty
/// sub-spans in order. Performs no allocation.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_ascii() && is_split_byte(c as u8))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Split `text` into words, validating each one. Fails with
/// `ErrorKind::InvalidWord` naming the first invalid word encountered.
pub fn split_into_valid_words(text: &str) -> Result<Vec<&str>, Error> {
    split_into_words(text)
        .into_iter()
        .map(|w| {
            if is_valid_word(w) {
                Ok(w)
            } else {
                Err(Error::new(
                    ErrorKind::InvalidWord,
                    format!("word {:?} contains an invalid character", w),
                ))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split_into_words("cat in  the\tcity\n"), vec!["cat", "in", "the", "city"]);
    }

    #[test]
    fn empty_and_blank_text() {
        assert!(split_into_words("").is_empty());
        assert!(split_into_words("   \t\n").is_empty());
    }

    #[test]
    fn rejects_control_bytes() {
        assert!(!is_valid_word("ca\u{0007}t"));
        assert!(is_valid_word("cat"));
    }

    #[test]
    fn split_into_valid_words_reports_the_bad_word() {
        let err = split_into_valid_words("cat \u{0007}bad dog").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidWord);
    }
}
