pub mod analysis;
pub mod core;
pub mod index;
pub mod query;
pub mod scoring;
pub mod search;

/*
┌────────────────────────────────────────────────────────────────────────────────────────────┐
│                               DRUSDENX STRUCT ARCHITECTURE                                  │
└────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────────── CORE LAYER ──────────────────────────────────────────┐
│                                                                                              │
│  struct SearchServerConfig      struct Error / enum ErrorKind      struct DocId(i64)        │
│  • shard_count: usize           • InvalidDocumentId                struct DocumentRecord     │
│  • worker_threads: Option<>     • OutOfRange                       • rating: i64             │
│                                 • InvalidQuery / InvalidQueryWord   • status: Status          │
│                                 • InvalidStopWords / InvalidWord    enum Status               │
│                                                                      • Actual/Irrelevant/      │
│                                                                        Banned/Removed          │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────────── ANALYSIS LAYER ───────────────────────────────────────┐
│                                                                                              │
│  fn split_into_words() / is_valid_word()          struct StopWords                          │
│  • ASCII whitespace tokenizer, no allocation       • words: HashSet<Box<str>>                │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────────── INDEX LAYER ─────────────────────────────────────────┐
│                                                                                              │
│  struct WordIndex                                  struct ConcurrentMap<K, V>               │
│  • words: HashSet<Arc<str>>                        • shards: Vec<Mutex<BTreeMap<K, V>>>     │
│  • forward: HashMap<DocId, HashMap<Arc<str>, f64>> • accumulate() / build_ordered_snapshot() │
│  • inverted: HashMap<Arc<str>, HashMap<DocId, f64>>                                          │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────────────── QUERY LAYER ─────────────────────────────────────────┐
│                                                                                              │
│  struct ParsedQuery<'a>                            fn parse_query() / validate_raw_query()  │
│  • plus: Vec<&'a str>                               • classifies plus/minus, drops stop-words│
│  • minus: Vec<&'a str>                                                                       │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────────── SCORING LAYER ────────────────────────────────────────┐
│                                                                                              │
│  fn inverse_document_frequency(total_docs, docs_containing_term) -> f64                     │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────────── SEARCH LAYER ─────────────────────────────────────────┐
│                                                                                              │
│  struct SearchServer                               fn process_queries() / _joined()         │
│  • stop_words: StopWords                           fn remove_duplicates()                   │
│  • index: WordIndex                                struct RequestQueue<'a>                   │
│  • documents: HashMap<DocId, DocumentRecord>        • requests: VecDeque<QueryResult>         │
│  • ids: BTreeSet<DocId>                             • no_result_requests: usize               │
│  • pool: rayon::ThreadPool                                                                    │
└──────────────────────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────────── RELATIONSHIPS ──────────────────────────────────────────┐
│                                                                                              │
│  SearchServer ──owns──> WordIndex ──interns──> Arc<str> ──shared by──> forward & inverted    │
│       │                                                                                      │
│       ├──owns──> StopWords ──consulted by──> add() and parse_query()                        │
│       │                                                                                      │
│       ├──owns──> rayon::ThreadPool ──drives──> _par methods ──accumulates via──> ConcurrentMap│
│       │                                                                                      │
│       └──scores_with──> inverse_document_frequency() ──weights──> term-frequency sums        │
│                                                                                              │
│  RequestQueue ──wraps──> &SearchServer ──logs──> FoundDocument counts over a sliding window  │
│  process_queries() ──fans out over──> &SearchServer ──independent per query──> rayon         │
└──────────────────────────────────────────────────────────────────────────────────────────────┘
*/
