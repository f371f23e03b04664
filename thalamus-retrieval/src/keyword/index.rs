//! Inverted index backing the BM25 keyword retriever.
//!
//! Maps terms to postings lists (document ordinal + term frequency) and
//! tracks document lengths for BM25 length normalization. The index is
//! rebuilt wholesale from a corpus snapshot, never mutated in place.

use std::collections::HashMap;

use super::tokenizer::tokenize;

/// One entry in a term's postings list.
#[derive(Debug, Clone)]
pub struct Posting {
    /// Ordinal of the document in the indexed corpus.
    pub doc: usize,
    /// Times the term appears in that document.
    pub term_frequency: u32,
}

/// Term → postings map over a fixed corpus.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Posting>>,
    doc_lengths: Vec<u32>,
    total_doc_length: u64,
}

impl InvertedIndex {
    /// Index a document's content; ordinals are assigned in call order.
    pub fn add_document(&mut self, content: &str) -> usize {
        let tokens = tokenize(content);
        let ordinal = self.doc_lengths.len();
        self.doc_lengths.push(tokens.len() as u32);
        self.total_doc_length += tokens.len() as u64;

        let mut frequencies: HashMap<String, u32> = HashMap::new();
        for token in tokens {
            *frequencies.entry(token).or_insert(0) += 1;
        }
        for (term, term_frequency) in frequencies {
            self.postings.entry(term).or_default().push(Posting {
                doc: ordinal,
                term_frequency,
            });
        }
        ordinal
    }

    pub fn doc_count(&self) -> usize {
        self.doc_lengths.len()
    }

    pub fn doc_length(&self, doc: usize) -> u32 {
        self.doc_lengths.get(doc).copied().unwrap_or(0)
    }

    /// Average document length across the corpus, 0 when empty.
    pub fn average_doc_length(&self) -> f64 {
        if self.doc_lengths.is_empty() {
            return 0.0;
        }
        self.total_doc_length as f64 / self.doc_lengths.len() as f64
    }

    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(Vec::as_slice)
    }
}
