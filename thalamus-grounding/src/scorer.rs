//! Additive hallucination-risk scoring.
//!
//! Eight independent lexical signals accumulate into a score clamped to
//! [0, 1]. The signals are deliberately shallow; the score is a triage
//! hint for surfacing a caveat to the user, not a verdict.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use thalamus_core::config::GroundingConfig;
use thalamus_core::models::{GroundingAssessment, RiskLabel, RiskReason, ScoredDocument};

use crate::phrases::{
    CONTRADICTION_PAIRS, FABRICATION_MARKERS, HEDGING_PHRASES, REFUSAL_PHRASES, STOPWORDS,
};

const NO_CONTEXT_WEIGHT: f64 = 0.4;
const LOW_RELEVANCE_WEIGHT: f64 = 0.3;
const HEDGING_WEIGHT: f64 = 0.1;
const HEDGING_CAP: f64 = 0.3;
const FABRICATION_WEIGHT: f64 = 0.15;
const FABRICATION_CAP: f64 = 0.4;
const UNSUPPORTED_SPECIFICS_WEIGHT: f64 = 0.5;
const CONTRADICTION_WEIGHT: f64 = 0.6;
const GENERIC_WEIGHT: f64 = 0.2;
const REFUSAL_WEIGHT: f64 = 0.1;

/// Mean evidence relevance below this counts as poorly supported.
const LOW_RELEVANCE_THRESHOLD: f64 = 0.5;
/// Answers shorter than this many words count as generic.
const GENERIC_WORD_FLOOR: usize = 10;

/// Prices like `$12.99`.
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d+\.\d{2}").unwrap());

/// Clock times like `9:30 AM`.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d{1,2}:\d{2}\s*(am|pm)").unwrap());

/// ISO dates like `2024-06-01`.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// Phone numbers like `555-123-4567`.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}-\d{3}-\d{4}").unwrap());

/// Street addresses like `12 Main Street`.
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\d+ (main|street|avenue|road|boulevard)\b").unwrap());

/// Stateless grounding scorer.
///
/// `assess` is pure: the same inputs always produce the same assessment,
/// so scores can be recomputed for stored answers after threshold changes.
pub struct GroundingScorer {
    config: GroundingConfig,
}

impl GroundingScorer {
    pub fn new(config: GroundingConfig) -> Self {
        Self { config }
    }

    /// Risk threshold at which an assessment surfaces to the caller.
    pub fn surface_threshold(&self) -> f64 {
        self.config.surface_threshold
    }

    /// Score how likely `answer` is ungrounded given what retrieval found.
    ///
    /// `evidence` is the fused context that reached the generation prompt;
    /// `context_used` is false when that context was empty.
    pub fn assess(
        &self,
        answer: &str,
        query: &str,
        evidence: &[ScoredDocument],
        context_used: bool,
    ) -> GroundingAssessment {
        let mut score = 0.0;
        let mut reasons = Vec::new();
        let answer_lower = answer.to_lowercase();

        if !context_used {
            score += NO_CONTEXT_WEIGHT;
            reasons.push(RiskReason::NoContext);
        }

        if !evidence.is_empty() && mean_relevance(evidence) < LOW_RELEVANCE_THRESHOLD {
            score += LOW_RELEVANCE_WEIGHT;
            reasons.push(RiskReason::LowRelevance);
        }

        let hedging = distinct_matches(&answer_lower, &HEDGING_PHRASES);
        if hedging > 0 {
            score += (hedging as f64 * HEDGING_WEIGHT).min(HEDGING_CAP);
            reasons.push(RiskReason::Hedging { count: hedging });
        }

        let fabrication = distinct_matches(&answer_lower, &FABRICATION_MARKERS);
        if fabrication > 0 {
            score += (fabrication as f64 * FABRICATION_WEIGHT).min(FABRICATION_CAP);
            reasons.push(RiskReason::FabricationMarkers {
                count: fabrication,
            });
        }

        if evidence.is_empty() && contains_specifics(answer) {
            score += UNSUPPORTED_SPECIFICS_WEIGHT;
            reasons.push(RiskReason::UnsupportedSpecifics);
        }

        if !evidence.is_empty() && contradicts_evidence(&answer_lower, evidence) {
            score += CONTRADICTION_WEIGHT;
            reasons.push(RiskReason::Contradiction);
        }

        if is_generic(answer, query) {
            score += GENERIC_WEIGHT;
            reasons.push(RiskReason::GenericAnswer);
        }

        if REFUSAL_PHRASES
            .iter()
            .any(|phrase| answer_lower.contains(phrase))
        {
            score += REFUSAL_WEIGHT;
            reasons.push(RiskReason::Refusal);
        }

        let risk_score = score.min(1.0);
        let assessment = GroundingAssessment {
            risk_score,
            label: RiskLabel::from_score(risk_score),
            reasons,
            is_risky: risk_score >= self.config.risk_threshold,
        };
        debug!(
            risk_score = assessment.risk_score,
            is_risky = assessment.is_risky,
            reasons = assessment.reasons.len(),
            "grounding assessed"
        );
        assessment
    }
}

pub(crate) fn mean_relevance(evidence: &[ScoredDocument]) -> f64 {
    if evidence.is_empty() {
        return 0.0;
    }
    evidence.iter().map(|hit| hit.relevance()).sum::<f64>() / evidence.len() as f64
}

/// How many phrases from the table occur in `text` (each counted once).
fn distinct_matches(text: &str, phrases: &[&str]) -> usize {
    phrases.iter().filter(|phrase| text.contains(**phrase)).count()
}

fn contains_specifics(answer: &str) -> bool {
    [&PRICE_RE, &TIME_RE, &DATE_RE, &PHONE_RE, &ADDRESS_RE]
        .iter()
        .any(|re| re.is_match(answer))
}

/// Coarse polarity check: an answer term whose opposite occurs anywhere in
/// the joined evidence text (or vice versa) counts as a contradiction.
fn contradicts_evidence(answer_lower: &str, evidence: &[ScoredDocument]) -> bool {
    let evidence_text = evidence
        .iter()
        .map(|hit| hit.document.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    if evidence_text.is_empty() {
        return false;
    }
    CONTRADICTION_PAIRS.iter().any(|&(positive, negative)| {
        (answer_lower.contains(positive) && evidence_text.contains(negative))
            || (answer_lower.contains(negative) && evidence_text.contains(positive))
    })
}

/// Too short, or sharing no content words with the question.
fn is_generic(answer: &str, query: &str) -> bool {
    if answer.split_whitespace().count() < GENERIC_WORD_FLOOR {
        return true;
    }

    let stopwords: HashSet<&str> = STOPWORDS.iter().copied().collect();
    let content_words = |text: &str| -> HashSet<String> {
        text.to_lowercase()
            .split_whitespace()
            .filter(|token| !stopwords.contains(token))
            .map(str::to_string)
            .collect()
    };

    let query_words = content_words(query);
    if query_words.is_empty() {
        return false;
    }
    query_words.is_disjoint(&content_words(answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specifics_patterns_match_expected_shapes() {
        assert!(contains_specifics("That costs $19.99 today"));
        assert!(contains_specifics("We open at 9:30 AM"));
        assert!(contains_specifics("Delivered on 2024-06-01"));
        assert!(contains_specifics("Call 555-123-4567"));
        assert!(contains_specifics("Visit 12 Main Street"));
        assert!(!contains_specifics("Standard delivery takes 3 to 5 business days"));
    }

    #[test]
    fn distinct_matches_counts_phrases_not_occurrences() {
        let text = "i think this works. i think it probably does.";
        // "i think" appears twice but counts once; "probably" adds a second.
        assert_eq!(distinct_matches(text, &HEDGING_PHRASES), 2);
    }

    #[test]
    fn generic_check_fires_on_short_or_disjoint_answers() {
        assert!(is_generic("Happy to help!", "What is your return policy?"));
        assert!(is_generic(
            "There are many things we handle here every single day for customers",
            "What is your return policy?"
        ));
        assert!(!is_generic(
            "Our return policy allows returns within 30 days of purchase for a refund",
            "What is your return policy?"
        ));
    }

    #[test]
    fn query_of_only_stopwords_is_never_disjoint() {
        assert!(!is_generic(
            "This answer has more than ten words so the floor does not apply",
            "what do you have"
        ));
    }
}
