use crate::errors::ThalamusResult;
use crate::models::Document;

/// Source of corpus documents for building keyword indexes.
pub trait ICorpusProvider: Send + Sync {
    /// A point-in-time copy of every document in the corpus.
    fn snapshot(&self) -> ThalamusResult<Vec<Document>>;
}
