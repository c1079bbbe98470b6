//! Bulk query execution (§4.5): run many queries against one server
//! concurrently, each query independent of the others.

use rayon::prelude::*;

use crate::core::types::FoundDocument;
use crate::search::server::SearchServer;

/// Run every query in `queries` against `server` in parallel, preserving
/// input order: `result[i]` corresponds to `queries[i]`. A query that
/// fails to parse yields an empty result for that slot rather than
/// aborting the batch.
pub fn process_queries(server: &SearchServer, queries: &[String]) -> Vec<Vec<FoundDocument>> {
    queries
        .par_iter()
        .map(|query| server.find_top_documents_default(query).unwrap_or_default())
        .collect()
}

/// Same as `process_queries`, flattened into one document stream in
/// query order (results of query 0, then query 1, ...).
pub fn process_queries_joined(server: &SearchServer, queries: &[String]) -> Vec<FoundDocument> {
    process_queries(server, queries).into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DocId, Status};

    fn server() -> SearchServer {
        let mut s = SearchServer::from_text("").unwrap();
        s.add(DocId(1), "cat in the city", Status::Actual, &[1]).unwrap();
        s.add(DocId(2), "dog in the home", Status::Actual, &[1]).unwrap();
        s
    }

    #[test]
    fn preserves_query_order() {
        let s = server();
        let queries = vec!["cat".to_string(), "dog".to_string(), "zebra".to_string()];
        let results = process_queries(&s, &queries);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0][0].id, DocId(1));
        assert_eq!(results[1][0].id, DocId(2));
        assert!(results[2].is_empty());
    }

    #[test]
    fn joined_concatenates_in_query_order() {
        let s = server();
        let queries = vec!["cat".to_string(), "dog".to_string()];
        let joined = process_queries_joined(&s, &queries);
        assert_eq!(joined.iter().map(|d| d.id).collect::<Vec<_>>(), vec![DocId(1), DocId(2)]);
    }
}
