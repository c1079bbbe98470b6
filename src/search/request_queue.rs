//! Sliding-window request log (§4.7): remembers how many of the last
//! `MIN_IN_DAY` queries against a server returned no results.

use std::collections::VecDeque;

use crate::core::types::{DocId, FoundDocument, Status, MIN_IN_DAY};
use crate::search::server::SearchServer;

struct QueryResult {
    timestamp: u64,
    result_count: usize,
}

/// Wraps a `&SearchServer`, logging the result-count of every query routed
/// through it and evicting entries older than `MIN_IN_DAY` ticks.
pub struct RequestQueue<'a> {
    server: &'a SearchServer,
    requests: VecDeque<QueryResult>,
    no_result_requests: usize,
    current_time: u64,
}

impl<'a> RequestQueue<'a> {
    pub fn new(server: &'a SearchServer) -> Self {
        RequestQueue {
            server,
            requests: VecDeque::new(),
            no_result_requests: 0,
            current_time: 0,
        }
    }

    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Vec<FoundDocument>
    where
        P: Fn(DocId, Status, i64) -> bool,
    {
        let result = self.server.find_top_documents(raw_query, predicate).unwrap_or_default();
        self.record(result.len());
        result
    }

    pub fn add_find_request_status(&mut self, raw_query: &str, status: Status) -> Vec<FoundDocument> {
        let result = self.server.find_top_documents_status(raw_query, status).unwrap_or_default();
        self.record(result.len());
        result
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Vec<FoundDocument> {
        let result = self.server.find_top_documents_default(raw_query).unwrap_or_default();
        self.record(result.len());
        result
    }

    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    fn record(&mut self, result_count: usize) {
        self.current_time += 1;
        while let Some(front) = self.requests.front() {
            if self.current_time - front.timestamp < MIN_IN_DAY {
                break;
            }
            if front.result_count == 0 {
                self.no_result_requests -= 1;
            }
            self.requests.pop_front();
        }
        self.requests.push_back(QueryResult {
            timestamp: self.current_time,
            result_count,
        });
        if result_count == 0 {
            self.no_result_requests += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocId;

    fn server() -> SearchServer {
        let mut s = SearchServer::from_text("").unwrap();
        s.add(DocId(1), "cat city", Status::Actual, &[1]).unwrap();
        s
    }

    #[test]
    fn counts_empty_results() {
        let s = server();
        let mut q = RequestQueue::new(&s);
        q.add_find_request("cat");
        q.add_find_request("zebra");
        q.add_find_request("zebra");
        assert_eq!(q.no_result_requests(), 2);
    }

    #[test]
    fn window_evicts_after_min_in_day_requests() {
        let s = server();
        let mut q = RequestQueue::new(&s);
        q.add_find_request("zebra");
        assert_eq!(q.no_result_requests(), 1);
        for _ in 0..MIN_IN_DAY {
            q.add_find_request("cat");
        }
        assert_eq!(q.no_result_requests(), 0);
    }
}
