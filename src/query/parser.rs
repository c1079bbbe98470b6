//! Free-text query parsing (§4.3): classify words into plus/minus terms,
//! drop stop-words, optionally sort+dedup.

use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::error::{Error, ErrorKind};
use crate::query::types::ParsedQuery;

/// The raw query text itself, before splitting, must contain no byte
/// `< 0x20` (a plain space, `0x20`, is the only whitespace byte allowed as
/// a separator in a query; tabs and newlines are rejected outright).
pub fn validate_raw_query(raw_query: &str) -> Result<(), Error> {
    if raw_query.bytes().any(|b| b < 0x20) {
        return Err(Error::new(
            ErrorKind::InvalidQuery,
            "query contains a control byte",
        ));
    }
    Ok(())
}

/// Parse `raw_query` against `stop_words`. The sequential match/top-k path
/// requires `dedup = true`; the parallel path runs with `dedup = false`.
pub fn parse_query<'a>(
    raw_query: &'a str,
    stop_words: &StopWords,
    dedup: bool,
) -> Result<ParsedQuery<'a>, Error> {
    let mut query = ParsedQuery::default();

    for word in split_into_words(raw_query) {
        let is_minus = word.starts_with('-');
        let stripped = if is_minus { &word[1..] } else { word };

        if stripped.is_empty() || stripped.starts_with('-') {
            return Err(Error::new(
                ErrorKind::InvalidQueryWord,
                format!("invalid query word {:?}", word),
            ));
        }
        if !is_valid_word(stripped) {
            return Err(Error::new(
                ErrorKind::InvalidQueryWord,
                format!("invalid query word {:?}", word),
            ));
        }
        if stop_words.contains(stripped) {
            continue;
        }

        if is_minus {
            query.minus.push(stripped);
        } else {
            query.plus.push(stripped);
        }
    }

    if dedup {
        query.plus.sort_unstable();
        query.plus.dedup();
        query.minus.sort_unstable();
        query.minus.dedup();
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_words() -> StopWords {
        StopWords::from_text("in the").unwrap()
    }

    #[test]
    fn classifies_plus_and_minus() {
        let q = parse_query("-in cat", &stop_words(), true).unwrap();
        assert_eq!(q.plus, vec!["cat"]);
        assert!(q.minus.is_empty(), "minus-term 'in' is a stop-word, dropped entirely");
    }

    #[test]
    fn drops_stop_words_on_both_sides() {
        let q = parse_query("cat -the city", &stop_words(), true).unwrap();
        assert_eq!(q.plus, vec!["cat", "city"]);
        assert!(q.minus.is_empty());
    }

    #[test]
    fn rejects_bare_dash_and_double_dash() {
        assert_eq!(
            parse_query("--foo", &stop_words(), true).unwrap_err().kind(),
            ErrorKind::InvalidQueryWord
        );
        assert_eq!(
            parse_query("-", &stop_words(), true).unwrap_err().kind(),
            ErrorKind::InvalidQueryWord
        );
    }

    #[test]
    fn dedup_flag_controls_order_and_duplicates() {
        let sorted = parse_query("dog cat dog", &stop_words(), true).unwrap();
        assert_eq!(sorted.plus, vec!["cat", "dog"]);

        let insertion_order = parse_query("dog cat dog", &stop_words(), false).unwrap();
        assert_eq!(insertion_order.plus, vec!["dog", "cat", "dog"]);
    }

    #[test]
    fn raw_query_rejects_control_bytes() {
        assert!(validate_raw_query("cat in the city").is_ok());
        assert_eq!(
            validate_raw_query("cat\tin the city").unwrap_err().kind(),
            ErrorKind::InvalidQuery
        );
    }

    #[test]
    fn only_stop_words_yields_empty_query() {
        let q = parse_query("in the", &stop_words(), true).unwrap();
        assert!(q.plus.is_empty() && q.minus.is_empty());
    }
}
