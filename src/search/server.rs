//! The index core (§4.4): owns all stored state and implements add,
//! remove, match, top-k search, word-frequency lookup, and identifier
//! iteration, each with a sequential and a parallel form.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer::{is_valid_word, split_into_words};
use crate::core::config::SearchServerConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{average_rating, DocId, DocumentRecord, FoundDocument, Status, MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON};
use crate::index::concurrent_map::ConcurrentMap;
use crate::index::store::WordIndex;
use crate::query::parser::{parse_query, validate_raw_query};
use crate::scoring::tfidf::inverse_document_frequency;

pub struct SearchServer {
    stop_words: StopWords,
    index: WordIndex,
    documents: HashMap<DocId, DocumentRecord>,
    ids: BTreeSet<DocId>,
    config: SearchServerConfig,
    pool: rayon::ThreadPool,
}

impl SearchServer {
    pub fn new(stop_words: StopWords) -> Self {
        Self::with_config(stop_words, SearchServerConfig::default())
    }

    pub fn with_config(stop_words: StopWords, config: SearchServerConfig) -> Self {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.resolved_worker_threads())
            .build()
            .expect("failed to build search server worker pool");
        SearchServer {
            stop_words,
            index: WordIndex::new(),
            documents: HashMap::new(),
            ids: BTreeSet::new(),
            config,
            pool,
        }
    }

    /// Construct from any container of stop-word strings.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(StopWords::from_strings(words)?))
    }

    /// Construct from a single whitespace-separated stop-words string.
    pub fn from_text(stop_words_text: &str) -> Result<Self> {
        Ok(Self::new(StopWords::from_text(stop_words_text)?))
    }

    pub fn config(&self) -> &SearchServerConfig {
        &self.config
    }

    // ---- add / remove --------------------------------------------------

    /// Tokenizes `body`, drops stop-words, validates the rest, and weaves
    /// them into the forward/inverted index. Leaves state bit-identical to
    /// its pre-call state on failure.
    pub fn add(&mut self, id: DocId, body: &str, status: Status, ratings: &[i64]) -> Result<()> {
        if !id.is_valid() || self.documents.contains_key(&id) {
            return Err(Error::new(
                ErrorKind::InvalidDocumentId,
                format!("document id {} is invalid or already exists", id.0),
            ));
        }

        let retained: Vec<&str> = split_into_words(body)
            .into_iter()
            .filter(|w| !self.stop_words.contains(w))
            .collect();
        for &word in &retained {
            if !is_valid_word(word) {
                return Err(Error::new(
                    ErrorKind::InvalidWord,
                    format!("word {:?} contains an invalid character", word),
                ));
            }
        }

        self.index.index_document(id, &retained);
        self.documents.insert(
            id,
            DocumentRecord {
                rating: average_rating(ratings),
                status,
            },
        );
        self.ids.insert(id);
        Ok(())
    }

    /// Catches `add`'s error and reports it to `sink` instead of
    /// propagating, per the convenience-wrapper contract.
    pub fn add_document_reporting(
        &mut self,
        id: DocId,
        body: &str,
        status: Status,
        ratings: &[i64],
        sink: &mut impl std::io::Write,
    ) {
        if let Err(e) = self.add(id, body, status, ratings) {
            let _ = writeln!(sink, "Error in adding document {}: {}", id.0, e);
        }
    }

    /// Returns silently if `id` is absent.
    pub fn remove(&mut self, id: DocId) {
        if self.documents.remove(&id).is_none() {
            return;
        }
        self.ids.remove(&id);
        self.index.remove_document(id);
    }

    /// Same contract as `remove`, but the word list and the inverted-index
    /// updates are computed with `rayon`.
    pub fn remove_par(&mut self, id: DocId) {
        if self.documents.remove(&id).is_none() {
            return;
        }
        self.ids.remove(&id);
        self.pool.install(|| self.index.remove_document_par(id));
    }

    // ---- match -----------------------------------------------------------

    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<(Vec<Arc<str>>, Status)> {
        let record = self.document_record_for_match(id)?;
        validate_raw_query(raw_query)?;
        let parsed = parse_query(raw_query, &self.stop_words, true)?;

        for &word in &parsed.minus {
            if self.word_contains(word, id) {
                return Ok((Vec::new(), record.status));
            }
        }
        let mut matched = Vec::new();
        for &word in &parsed.plus {
            if self.word_contains(word, id) {
                if let Some(w) = self.index.interned(word) {
                    matched.push(w);
                }
            }
        }
        Ok((matched, record.status))
    }

    pub fn match_document_par(&self, raw_query: &str, id: DocId) -> Result<(Vec<Arc<str>>, Status)> {
        let record = self.document_record_for_match(id)?;
        validate_raw_query(raw_query)?;
        let parsed = parse_query(raw_query, &self.stop_words, false)?;

        let (matched, status) = self.pool.install(|| {
            let has_minus = parsed.minus.par_iter().any(|&word| self.word_contains(word, id));
            if has_minus {
                return (Vec::new(), record.status);
            }
            let mut matched: Vec<Arc<str>> = parsed
                .plus
                .par_iter()
                .filter_map(|&word| {
                    if self.word_contains(word, id) {
                        self.index.interned(word)
                    } else {
                        None
                    }
                })
                .collect();
            matched.sort();
            matched.dedup();
            (matched, record.status)
        });
        Ok((matched, status))
    }

    pub fn match_document_reporting(
        &self,
        raw_query: &str,
        id: DocId,
        sink: &mut impl std::io::Write,
    ) -> (Vec<Arc<str>>, Option<Status>) {
        match self.match_document(raw_query, id) {
            Ok((words, status)) => (words, Some(status)),
            Err(e) => {
                let _ = writeln!(sink, "Error in matchig request {}: {}", raw_query, e);
                (Vec::new(), None)
            }
        }
    }

    fn document_record_for_match(&self, id: DocId) -> Result<DocumentRecord> {
        if !id.is_valid() {
            return Err(Error::new(ErrorKind::OutOfRange, format!("document id {} is negative", id.0)));
        }
        self.documents
            .get(&id)
            .copied()
            .ok_or_else(|| Error::new(ErrorKind::OutOfRange, format!("document id {} not found", id.0)))
    }

    fn word_contains(&self, word: &str, id: DocId) -> bool {
        self.index.postings(word).is_some_and(|m| m.contains_key(&id))
    }

    // ---- top-k search ------------------------------------------------------

    pub fn find_top_documents<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<FoundDocument>>
    where
        P: Fn(DocId, Status, i64) -> bool,
    {
        validate_raw_query(raw_query)?;
        let parsed = parse_query(raw_query, &self.stop_words, true)?;
        let total_docs = self.documents.len();

        let mut scores: HashMap<DocId, f64> = HashMap::new();
        for &word in &parsed.plus {
            let Some(postings) = self.index.postings(word) else {
                continue;
            };
            let idf = inverse_document_frequency(total_docs, postings.len());
            for (&id, &tf) in postings {
                let record = self.documents[&id];
                if predicate(id, record.status, record.rating) {
                    *scores.entry(id).or_insert(0.0) += tf * idf;
                }
            }
        }
        for &word in &parsed.minus {
            if let Some(postings) = self.index.postings(word) {
                for &id in postings.keys() {
                    scores.remove(&id);
                }
            }
        }

        let mut results = self.build_results(scores);
        sort_and_truncate(&mut results);
        Ok(results)
    }

    pub fn find_top_documents_status(&self, raw_query: &str, status: Status) -> Result<Vec<FoundDocument>> {
        self.find_top_documents(raw_query, move |_, doc_status, _| doc_status == status)
    }

    pub fn find_top_documents_default(&self, raw_query: &str) -> Result<Vec<FoundDocument>> {
        self.find_top_documents_status(raw_query, Status::Actual)
    }

    pub fn find_top_documents_par<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<FoundDocument>>
    where
        P: Fn(DocId, Status, i64) -> bool + Sync,
    {
        validate_raw_query(raw_query)?;
        let parsed = parse_query(raw_query, &self.stop_words, true)?;
        let total_docs = self.documents.len();

        let mut results = self.pool.install(|| {
            let scores = ConcurrentMap::<DocId, f64>::new(self.config.shard_count);
            parsed.plus.par_iter().for_each(|&word| {
                let Some(postings) = self.index.postings(word) else {
                    return;
                };
                let idf = inverse_document_frequency(total_docs, postings.len());
                for (&id, &tf) in postings {
                    let record = self.documents[&id];
                    if predicate(id, record.status, record.rating) {
                        scores.accumulate(id, tf * idf);
                    }
                }
            });
            let mut scores = scores.build_ordered_snapshot();

            let to_remove: HashSet<DocId> = parsed
                .minus
                .par_iter()
                .filter_map(|&word| self.index.postings(word))
                .flat_map_iter(|postings| postings.keys().copied())
                .collect();
            scores.retain(|id, _| !to_remove.contains(id));

            self.build_results(scores.into_iter().collect())
        });

        sort_and_truncate(&mut results);
        Ok(results)
    }

    pub fn find_top_documents_status_par(&self, raw_query: &str, status: Status) -> Result<Vec<FoundDocument>> {
        self.find_top_documents_par(raw_query, move |_, doc_status, _| doc_status == status)
    }

    pub fn find_top_documents_default_par(&self, raw_query: &str) -> Result<Vec<FoundDocument>> {
        self.find_top_documents_status_par(raw_query, Status::Actual)
    }

    pub fn find_top_documents_reporting(&self, raw_query: &str, sink: &mut impl std::io::Write) -> Vec<FoundDocument> {
        match self.find_top_documents_default(raw_query) {
            Ok(results) => results,
            Err(e) => {
                let _ = writeln!(sink, "Error is seaching: {}", e);
                Vec::new()
            }
        }
    }

    fn build_results(&self, scores: HashMap<DocId, f64>) -> Vec<FoundDocument> {
        scores
            .into_iter()
            .map(|(id, relevance)| FoundDocument {
                id,
                relevance,
                rating: self.documents[&id].rating,
            })
            .collect()
    }

    // ---- introspection -----------------------------------------------------

    /// Returns the forward entry for `id`, or an empty mapping if absent.
    pub fn word_frequencies(&self, id: DocId) -> HashMap<Arc<str>, f64> {
        self.index.word_frequencies(id)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn status_of(&self, id: DocId) -> Option<Status> {
        self.documents.get(&id).map(|r| r.status)
    }

    pub fn rating_of(&self, id: DocId) -> Option<i64> {
        self.documents.get(&id).map(|r| r.rating)
    }

    /// Ascending iteration over currently held identifiers.
    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.ids.iter().copied()
    }
}

fn sort_and_truncate(results: &mut Vec<FoundDocument>) {
    results.sort_by(|a, b| {
        if (a.relevance - b.relevance).abs() < RELEVANCE_EPSILON {
            b.rating.cmp(&a.rating)
        } else {
            b.relevance.partial_cmp(&a.relevance).unwrap_or(std::cmp::Ordering::Equal)
        }
    });
    results.truncate(MAX_RESULT_DOCUMENT_COUNT);
}
