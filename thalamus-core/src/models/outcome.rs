use serde::{Deserialize, Serialize};

use super::assessment::GroundingAssessment;
use super::evidence::EvidenceMetadata;

/// The answer envelope returned for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub answer: String,
    pub session_id: String,
    pub evidence: Vec<EvidenceMetadata>,
    /// Whether any evidence reached the generation prompt.
    pub context_used: bool,
    /// Present only when the risk band is medium or above.
    pub assessment: Option<GroundingAssessment>,
}
