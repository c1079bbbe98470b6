/// Drusdenx search server demo
///
/// Demonstrates the core operations end to end:
/// - building a server with stop-words
/// - adding documents with ratings and statuses
/// - top-k search, status-filtered search, and matching
/// - bulk query execution
/// - duplicate removal
/// - the sliding-window request queue

use drusdenx::core::types::{DocId, Status};
use drusdenx::search::bulk::process_queries;
use drusdenx::search::dedup::remove_duplicates;
use drusdenx::search::request_queue::RequestQueue;
use drusdenx::search::server::SearchServer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║   Drusdenx Search Server - Console Demo      ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    println!("Creating server with stop-words \"and in the on\"...");
    let mut server = SearchServer::from_text("and in the on")?;
    println!("Done!\n");

    println!("Adding documents...");
    for (id, body, status, ratings) in sample_documents() {
        server.add_document_reporting(DocId(id), body, status, ratings, &mut std::io::stdout());
    }
    println!("  Indexed {} documents\n", server.document_count());

    println!("Searching for \"fluffy well-groomed cat\"...");
    for doc in server.find_top_documents_reporting("fluffy well-groomed cat", &mut std::io::stdout()) {
        print_document(&doc);
    }
    println!();

    println!("Searching banned documents for \"curly cat\"...");
    for doc in server.find_top_documents_status("curly cat", Status::Banned)? {
        print_document(&doc);
    }
    println!();

    println!("Matching document 1 against \"curly nasty cat\"...");
    let (words, status) = server.match_document("curly nasty cat", DocId(1))?;
    println!("  words = {:?}, status = {:?}\n", words, status);

    println!("Running a bulk query batch...");
    let queries = vec![
        "nasty rat -not".to_string(),
        "not very nasty rat".to_string(),
        "curly hair".to_string(),
    ];
    for (query, results) in queries.iter().zip(process_queries(&server, &queries)) {
        println!("  {:?} -> {} result(s)", query, results.len());
    }
    println!();

    println!("Removing duplicate documents...");
    remove_duplicates(&mut server, &mut std::io::stdout());
    println!("  {} documents remain\n", server.document_count());

    println!("Exercising the request queue...");
    let mut queue = RequestQueue::new(&server);
    for query in ["curly dog", "big collar", "sparrow"] {
        queue.add_find_request(query);
    }
    println!("  no-result requests seen so far: {}\n", queue.no_result_requests());

    println!("╔════════════════════════════════════════╗");
    println!("║    Demo complete                      ║");
    println!("╚════════════════════════════════════════╝\n");

    Ok(())
}

fn print_document(doc: &drusdenx::core::types::FoundDocument) {
    println!(
        "  {{ document_id = {}, relevance = {:.6}, rating = {} }}",
        doc.id, doc.relevance, doc.rating
    );
}

fn sample_documents() -> Vec<(i64, &'static str, Status, &'static [i64])> {
    vec![
        (0, "white cat and fashionable collar", Status::Actual, &[8, -3]),
        (1, "fluffy cat fluffy tail", Status::Actual, &[7, 2, 7]),
        (2, "groomed dog expressive eyes", Status::Actual, &[5, -12, 2, 1]),
        (3, "groomed starling eugene", Status::Banned, &[9]),
    ]
}
