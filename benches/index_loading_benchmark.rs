use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drusdenx::core::types::{DocId, Status};
use drusdenx::search::server::SearchServer;
use rand::Rng;

const WORDS: [&str; 8] = ["rust", "programming", "search", "engine", "database", "index", "query", "document"];

fn random_body(rng: &mut impl Rng, word_count: usize) -> String {
    (0..word_count)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the forward/inverted index from scratch for `doc_count` documents.
fn bench_index_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_loading");

    for doc_count in [100usize, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("build_from_scratch", doc_count), doc_count, |b, &doc_count| {
            b.iter(|| {
                let mut server = SearchServer::from_text("").unwrap();
                let mut rng = rand::thread_rng();
                for id in 0..doc_count {
                    let body = random_body(&mut rng, 30);
                    server.add(DocId(id as i64), black_box(&body), Status::Actual, &[5]).unwrap();
                }
                black_box(server);
            });
        });
    }
    group.finish();
}

/// Compares sequential vs. parallel document ingestion at a fixed shard
/// count once the concurrent-map based top-k path is warmed up.
fn bench_parallel_search_after_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_search_after_load");

    for doc_count in [1_000usize, 10_000].iter() {
        let mut server = SearchServer::from_text("").unwrap();
        let mut rng = rand::thread_rng();
        for id in 0..*doc_count {
            let body = random_body(&mut rng, 30);
            server.add(DocId(id as i64), &body, Status::Actual, &[5]).unwrap();
        }

        group.bench_with_input(BenchmarkId::new("sequential", doc_count), &server, |b, server| {
            b.iter(|| {
                let _ = server.find_top_documents_default(black_box("rust database -engine")).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", doc_count), &server, |b, server| {
            b.iter(|| {
                let _ = server.find_top_documents_default_par(black_box("rust database -engine")).unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index_loading, bench_parallel_search_after_load);
criterion_main!(benches);
