//! Word interning plus the mirrored forward/inverted index pair (§3).
//!
//! Words are interned as `Arc<str>` so that both the forward index
//! (document → word → term-frequency) and the inverted index (word →
//! document → term-frequency) can share the same allocation as a key or a
//! value without unsafe stable-address bookkeeping, the `Arc` alternative
//! the design notes call out.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rayon::prelude::*;

use crate::core::types::DocId;

#[derive(Debug, Default)]
pub struct WordIndex {
    words: HashSet<Arc<str>>,
    forward: HashMap<DocId, HashMap<Arc<str>, f64>>,
    inverted: HashMap<Arc<str>, HashMap<DocId, f64>>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, word: &str) -> Arc<str> {
        if let Some(existing) = self.words.get(word) {
            return existing.clone();
        }
        let interned: Arc<str> = Arc::from(word);
        self.words.insert(interned.clone());
        interned
    }

    /// Weave `tokens` into the forward and inverted index for `id`.
    /// `tokens` are already stop-word-filtered and validated; repeated
    /// occurrences accumulate the same `1 / tokens.len()` term-frequency
    /// increment.
    pub fn index_document(&mut self, id: DocId, tokens: &[&str]) {
        if tokens.is_empty() {
            self.forward.entry(id).or_default();
            return;
        }
        let inv_count = 1.0 / tokens.len() as f64;
        let forward_entry = self.forward.entry(id).or_default();
        for &token in tokens {
            let word = self.intern(token);
            *forward_entry.entry(word.clone()).or_insert(0.0) += inv_count;
            *self
                .inverted
                .entry(word)
                .or_default()
                .entry(id)
                .or_insert(0.0) += inv_count;
        }
    }

    /// Sequential removal: look up every word this document contributed
    /// via the forward index, then erase the back-reference from each
    /// corresponding inverted entry. Inverted entries are left in place
    /// even if they become empty.
    pub fn remove_document(&mut self, id: DocId) {
        let Some(forward_entry) = self.forward.remove(&id) else {
            return;
        };
        for word in forward_entry.keys() {
            if let Some(postings) = self.inverted.get_mut(word.as_ref()) {
                postings.remove(&id);
            }
        }
    }

    /// Parallel removal: materialize the word list in parallel, then
    /// update the affected inverted-index entries in parallel. Each
    /// entry is an independently owned `HashMap`, so mutating them
    /// concurrently (after extracting them from the outer map) is safe;
    /// the outer map itself is only ever touched by this thread.
    pub fn remove_document_par(&mut self, id: DocId) {
        let Some(forward_entry) = self.forward.remove(&id) else {
            return;
        };
        let words: Vec<Arc<str>> = forward_entry.into_par_iter().map(|(w, _)| w).collect();

        let mut extracted: Vec<(Arc<str>, HashMap<DocId, f64>)> = words
            .into_iter()
            .filter_map(|w| self.inverted.remove(&w).map(|postings| (w, postings)))
            .collect();
        extracted.par_iter_mut().for_each(|(_, postings)| {
            postings.remove(&id);
        });
        for (word, postings) in extracted {
            self.inverted.insert(word, postings);
        }
    }

    pub fn document_frequency(&self, word: &str) -> usize {
        self.inverted.get(word).map_or(0, |m| m.len())
    }

    pub fn postings(&self, word: &str) -> Option<&HashMap<DocId, f64>> {
        self.inverted.get(word)
    }

    /// The canonical interned allocation backing `word`, if it has ever
    /// been indexed.
    pub fn interned(&self, word: &str) -> Option<Arc<str>> {
        self.words.get(word).cloned()
    }

    /// Returns the forward entry for `id`, or an empty mapping if the
    /// document has none (including when the forward index holds nothing
    /// at all).
    pub fn word_frequencies(&self, id: DocId) -> HashMap<Arc<str>, f64> {
        self.forward.get(&id).cloned().unwrap_or_default()
    }

    pub fn contains_document(&self, id: DocId) -> bool {
        self.forward.contains_key(&id)
    }
}
