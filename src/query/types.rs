/// A query split into plus-terms and minus-terms, with stop-words and the
/// leading `-` already removed.
///
/// When `dedup` was requested, both lists are sorted and deduplicated;
/// otherwise they retain insertion order and may repeat a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery<'a> {
    pub plus: Vec<&'a str>,
    pub minus: Vec<&'a str>,
}
