//! Shared fixtures and mock collaborators for Thalamus tests.
//!
//! Mocks here panic freely on misuse; this crate is test support only and
//! is never published.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use thalamus_core::errors::{GenerationError, RetrievalError, ThalamusResult};
use thalamus_core::models::{Document, Message, ScoredDocument};
use thalamus_core::traits::{ICorpusProvider, IEmbeddingSearch, ITextGenerator};

/// Small customer-support FAQ corpus used across integration tests.
pub fn faq_corpus() -> Vec<Document> {
    vec![
        Document::new(
            "Our return policy allows returns within 30 days of purchase for a full refund. \
             Items must be unused and in their original packaging.",
        )
        .with_metadata("source", "faq.md")
        .with_metadata("category", "returns")
        .with_metadata("chunk_id", "faq-returns-1"),
        Document::new(
            "Shipping is free for orders over $50. Standard delivery takes 3 to 5 business \
             days; express delivery arrives in 1 to 2 business days.",
        )
        .with_metadata("source", "faq.md")
        .with_metadata("category", "shipping")
        .with_metadata("chunk_id", "faq-shipping-1"),
        Document::new(
            "To track an order, sign in to the account area and open the Orders page. \
             Tracking numbers appear once the package ships.",
        )
        .with_metadata("source", "faq.md")
        .with_metadata("category", "orders")
        .with_metadata("chunk_id", "faq-orders-1"),
        Document::new(
            "We accept Visa, Mastercard, American Express, and PayPal. Payment gets \
             charged when the order ships.",
        )
        .with_metadata("source", "faq.md")
        .with_metadata("category", "payment")
        .with_metadata("chunk_id", "faq-payment-1"),
        Document::new(
            "The wireless headphones pair over Bluetooth and offer 30 hours of battery \
             life with the charging case included.",
        )
        .with_metadata("source", "products.md")
        .with_metadata("category", "products")
        .with_metadata("chunk_id", "prod-headphones-1"),
        Document::new(
            "The wireless headphones come with a 2 year manufacturer warranty covering \
             defects in materials and workmanship.",
        )
        .with_metadata("source", "products.md")
        .with_metadata("category", "warranty")
        .with_metadata("chunk_id", "prod-warranty-1"),
    ]
}

fn normalized_tokens(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Deterministic embedding-search stand-in scoring by token overlap.
///
/// Distance is `1 - overlap`, where overlap is the fraction of distinct
/// query tokens present in the document. Topical matches sort first
/// without real embeddings, and results are stable across runs.
pub struct MockEmbeddingSearch {
    documents: Vec<Document>,
}

impl MockEmbeddingSearch {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn with_faq_corpus() -> Self {
        Self::new(faq_corpus())
    }
}

#[async_trait]
impl IEmbeddingSearch for MockEmbeddingSearch {
    async fn search(&self, query: &str, k: usize) -> ThalamusResult<Vec<ScoredDocument>> {
        let query_tokens = normalized_tokens(query);
        let mut hits: Vec<ScoredDocument> = self
            .documents
            .iter()
            .map(|doc| {
                let doc_tokens = normalized_tokens(&doc.content);
                let distance = if query_tokens.is_empty() {
                    1.0
                } else {
                    let shared = query_tokens.intersection(&doc_tokens).count();
                    1.0 - shared as f64 / query_tokens.len() as f64
                };
                ScoredDocument::new(doc.clone(), distance)
            })
            .collect();
        // Stable sort keeps corpus order for equal distances.
        hits.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(k);
        Ok(hits)
    }

    fn name(&self) -> &str {
        "mock-embedding-search"
    }
}

/// Embedding search that always errors, for degradation tests.
pub struct FailingEmbeddingSearch;

#[async_trait]
impl IEmbeddingSearch for FailingEmbeddingSearch {
    async fn search(&self, _query: &str, _k: usize) -> ThalamusResult<Vec<ScoredDocument>> {
        Err(RetrievalError::SearchFailed {
            retriever: self.name().to_string(),
            reason: "index offline".to_string(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "failing-embedding-search"
    }
}

/// One recorded `generate` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system_prompt: String,
    pub messages: Vec<Message>,
}

impl RecordedCall {
    /// Content of the last user message in the call, panicking if absent.
    pub fn last_user_content(&self) -> &str {
        self.messages
            .last()
            .map(|m| m.content.as_str())
            .expect("recorded call had no messages")
    }
}

/// Generator returning one fixed response, recording every call.
pub struct MockGenerator {
    response: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGenerator {
    pub fn fixed(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ITextGenerator for MockGenerator {
    async fn generate(&self, system_prompt: &str, messages: &[Message]) -> ThalamusResult<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_prompt: system_prompt.to_string(),
            messages: messages.to_vec(),
        });
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "mock-generator"
    }
}

/// Generator replaying a fixed script of responses, one per call.
///
/// Panics when the script runs out; exhaustion means the test made more
/// generation calls than it planned for.
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGenerator {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Mutex::new(responses.into_iter().map(Into::into).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ITextGenerator for ScriptedGenerator {
    async fn generate(&self, system_prompt: &str, messages: &[Message]) -> ThalamusResult<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_prompt: system_prompt.to_string(),
            messages: messages.to_vec(),
        });
        Ok(self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("scripted generator ran out of responses"))
    }

    fn name(&self) -> &str {
        "scripted-generator"
    }
}

/// Generator that always fails, for retry and fallback tests.
pub struct FailingGenerator {
    calls: Mutex<usize>,
}

impl FailingGenerator {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl Default for FailingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ITextGenerator for FailingGenerator {
    async fn generate(&self, _: &str, _: &[Message]) -> ThalamusResult<String> {
        *self.calls.lock().unwrap() += 1;
        Err(GenerationError::RequestFailed {
            reason: "connection reset".to_string(),
        }
        .into())
    }

    fn name(&self) -> &str {
        "failing-generator"
    }
}

/// Generator that sleeps before answering, for timeout tests.
///
/// Pair with `#[tokio::test(start_paused = true)]` so the sleep elapses
/// instantly on the test clock.
pub struct SlowGenerator {
    delay: Duration,
    response: String,
}

impl SlowGenerator {
    pub fn new(delay: Duration, response: impl Into<String>) -> Self {
        Self {
            delay,
            response: response.into(),
        }
    }
}

#[async_trait]
impl ITextGenerator for SlowGenerator {
    async fn generate(&self, _: &str, _: &[Message]) -> ThalamusResult<String> {
        tokio::time::sleep(self.delay).await;
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "slow-generator"
    }
}

/// Corpus provider backed by an in-memory document list.
pub struct StaticCorpus {
    documents: Vec<Document>,
}

impl StaticCorpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_faq_corpus() -> Self {
        Self::new(faq_corpus())
    }
}

impl ICorpusProvider for StaticCorpus {
    fn snapshot(&self) -> ThalamusResult<Vec<Document>> {
        Ok(self.documents.clone())
    }
}

/// Corpus provider whose contents can be replaced mid-test, for exercising
/// index rebuilds.
pub struct SwappableCorpus {
    documents: Mutex<Vec<Document>>,
}

impl SwappableCorpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents: Mutex::new(documents),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn set(&self, documents: Vec<Document>) {
        *self.documents.lock().unwrap() = documents;
    }
}

impl ICorpusProvider for SwappableCorpus {
    fn snapshot(&self) -> ThalamusResult<Vec<Document>> {
        Ok(self.documents.lock().unwrap().clone())
    }
}
