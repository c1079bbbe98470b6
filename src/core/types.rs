use serde::{Deserialize, Serialize};

/// Document identifier. Signed so that `id < 0` is representable and
/// rejected by `SearchServer::add`, rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub i64);

impl DocId {
    pub fn new(id: i64) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 >= 0
    }
}

impl From<i64> for DocId {
    fn from(id: i64) -> Self {
        DocId(id)
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata tag carried by a document; not a lifecycle state inside the
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

impl Default for Status {
    fn default() -> Self {
        Status::Actual
    }
}

/// Everything stored about a document besides its words: never mutated
/// after `add`, destroyed by `remove`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub rating: i64,
    pub status: Status,
}

/// One row of a top-k result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoundDocument {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i64,
}

/// Truncated-toward-zero integer average, as the original implementation
/// computes it (`sum(ratings) / ratings.len()` using C++ integer division).
pub fn average_rating(ratings: &[i64]) -> i64 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().sum();
    sum / ratings.len() as i64
}

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
pub const BUCKETS_COUNT: usize = 100;
pub const MIN_IN_DAY: u64 = 1440;
/// Tie tolerance used when comparing relevance scores (§4.4).
pub const RELEVANCE_EPSILON: f64 = 1e-6;
