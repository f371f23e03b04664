pub mod corpus;
pub mod embedding_search;
pub mod generator;
pub mod retriever;

pub use corpus::ICorpusProvider;
pub use embedding_search::IEmbeddingSearch;
pub use generator::ITextGenerator;
pub use retriever::IRetriever;
