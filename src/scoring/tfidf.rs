//! TF-IDF relevance (GLOSSARY): `relevance(d) = sum over plus-terms w of
//! tf(w, d) * idf(w)`.

/// `idf(w) = ln(total_docs / docs_containing_term)`.
pub fn inverse_document_frequency(total_docs: usize, docs_containing_term: usize) -> f64 {
    (total_docs as f64 / docs_containing_term as f64).ln()
}
