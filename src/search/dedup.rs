//! Exact-duplicate removal (§4.6): two documents are duplicates if they
//! share the same set of distinct words, ignoring term frequency. The
//! document with the smallest id in each duplicate class is kept.

use std::collections::{HashMap, HashSet};
use std::io::Write;

use crate::search::server::SearchServer;

/// Scan `server` in ascending id order, remove every document whose word
/// set was already seen under a smaller id, and report each removal to
/// `sink` as `"Found duplicate document id {id}"`.
pub fn remove_duplicates(server: &mut SearchServer, sink: &mut impl Write) {
    let mut seen: HashMap<Vec<std::sync::Arc<str>>, _> = HashMap::new();
    let mut duplicates = Vec::new();

    for id in server.iter() {
        let freqs = server.word_frequencies(id);
        let mut words: Vec<_> = freqs.into_keys().collect::<HashSet<_>>().into_iter().collect();
        words.sort();
        if seen.contains_key(&words) {
            duplicates.push(id);
        } else {
            seen.insert(words, id);
        }
    }

    for id in duplicates {
        let _ = writeln!(sink, "Found duplicate document id {}", id);
        server.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DocId, Status};

    #[test]
    fn removes_later_duplicate_and_reports_it() {
        let mut s = SearchServer::from_text("").unwrap();
        s.add(DocId(1), "cat city", Status::Actual, &[1]).unwrap();
        s.add(DocId(2), "city cat cat", Status::Actual, &[1]).unwrap();
        s.add(DocId(3), "dog home", Status::Actual, &[1]).unwrap();

        let mut sink = Vec::new();
        remove_duplicates(&mut s, &mut sink);

        assert_eq!(String::from_utf8(sink).unwrap(), "Found duplicate document id 2\n");
        assert_eq!(s.document_count(), 2);
        assert!(s.iter().eq([DocId(1), DocId(3)]));
    }

    #[test]
    fn distinct_word_sets_are_untouched() {
        let mut s = SearchServer::from_text("").unwrap();
        s.add(DocId(1), "cat", Status::Actual, &[1]).unwrap();
        s.add(DocId(2), "cat dog", Status::Actual, &[1]).unwrap();

        let mut sink = Vec::new();
        remove_duplicates(&mut s, &mut sink);
        assert!(sink.is_empty());
        assert_eq!(s.document_count(), 2);
    }
}
