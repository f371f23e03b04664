pub mod assessment;
pub mod document;
pub mod evidence;
pub mod message;
pub mod outcome;
pub mod quality;
pub mod retrieval;
pub mod scored_document;

pub use assessment::{GroundingAssessment, RiskLabel, RiskReason};
pub use document::{Document, MetadataValue};
pub use evidence::EvidenceMetadata;
pub use message::{Message, Role};
pub use outcome::QueryOutcome;
pub use quality::ResponseQuality;
pub use retrieval::{DocumentFilter, FusionWeights, RetrievalSource};
pub use scored_document::ScoredDocument;
