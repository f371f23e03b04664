use proptest::prelude::*;
use thalamus_core::config::GroundingConfig;
use thalamus_core::models::{Document, RiskLabel, ScoredDocument};
use thalamus_grounding::GroundingScorer;

fn evidence_strategy() -> impl Strategy<Value = Vec<ScoredDocument>> {
    prop::collection::vec(("[a-z ]{0,40}", 0.0f64..10.0), 0..4).prop_map(|raw| {
        raw.into_iter()
            .map(|(content, distance)| ScoredDocument::new(Document::new(content), distance))
            .collect()
    })
}

proptest! {
    #[test]
    fn risk_score_is_always_clamped(
        answer in ".{0,200}",
        query in ".{0,80}",
        evidence in evidence_strategy(),
        context_used in any::<bool>(),
    ) {
        let scorer = GroundingScorer::new(GroundingConfig::default());
        let assessment = scorer.assess(&answer, &query, &evidence, context_used);
        prop_assert!(assessment.risk_score >= 0.0);
        prop_assert!(assessment.risk_score <= 1.0);
    }

    #[test]
    fn label_always_matches_the_score_band(
        answer in ".{0,200}",
        query in ".{0,80}",
        evidence in evidence_strategy(),
        context_used in any::<bool>(),
    ) {
        let scorer = GroundingScorer::new(GroundingConfig::default());
        let assessment = scorer.assess(&answer, &query, &evidence, context_used);
        prop_assert_eq!(assessment.label, RiskLabel::from_score(assessment.risk_score));
    }

    #[test]
    fn risky_flag_mirrors_the_threshold(
        answer in ".{0,200}",
        query in ".{0,80}",
        evidence in evidence_strategy(),
        context_used in any::<bool>(),
    ) {
        let config = GroundingConfig::default();
        let threshold = config.risk_threshold;
        let assessment =
            GroundingScorer::new(config).assess(&answer, &query, &evidence, context_used);
        prop_assert_eq!(assessment.is_risky, assessment.risk_score >= threshold);
    }

    #[test]
    fn assessment_is_deterministic(
        answer in ".{0,200}",
        query in ".{0,80}",
        evidence in evidence_strategy(),
        context_used in any::<bool>(),
    ) {
        let scorer = GroundingScorer::new(GroundingConfig::default());
        let first = scorer.assess(&answer, &query, &evidence, context_used);
        let second = scorer.assess(&answer, &query, &evidence, context_used);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn missing_context_never_lowers_the_score(
        answer in ".{0,200}",
        query in ".{0,80}",
        evidence in evidence_strategy(),
    ) {
        let scorer = GroundingScorer::new(GroundingConfig::default());
        let with_context = scorer.assess(&answer, &query, &evidence, true);
        let without_context = scorer.assess(&answer, &query, &evidence, false);
        prop_assert!(without_context.risk_score >= with_context.risk_score);
    }
}
