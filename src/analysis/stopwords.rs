//! The stop-word set: established once at construction, immutable
//! thereafter, and consulted on both ingest and query parsing.

use std::collections::HashSet;

use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, ErrorKind};

#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<Box<str>>,
}

impl StopWords {
    /// Build from any container of strings. Empty words are dropped
    /// silently; a word containing a control byte fails construction.
    pub fn from_strings<I, S>(words: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for w in words {
            let w = w.as_ref();
            if w.is_empty() {
                continue;
            }
            if !is_valid_word(w) {
                return Err(Error::new(
                    ErrorKind::InvalidStopWords,
                    format!("stop word {:?} contains an invalid character", w),
                ));
            }
            set.insert(w.to_owned().into_boxed_str());
        }
        Ok(StopWords { words: set })
    }

    /// Build from a single whitespace-separated string.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        Self::from_strings(split_into_words(text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedups_and_drops_empty() {
        let sw = StopWords::from_text("in the   the in").unwrap();
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("in"));
        assert!(sw.contains("the"));
    }

    #[test]
    fn rejects_control_bytes() {
        let err = StopWords::from_strings(["go\u{0007}od"]).unwrap_err();
        assert_eq!(err.kind(), crate::core::error::ErrorKind::InvalidStopWords);
    }
}
