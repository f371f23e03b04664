use proptest::prelude::*;
use thalamus_core::models::{Document, RiskLabel, ScoredDocument};

proptest! {
    #[test]
    fn relevance_stays_in_unit_interval(distance in 0.0f64..1e9) {
        let hit = ScoredDocument::new(Document::new("x"), distance);
        let relevance = hit.relevance();
        prop_assert!(relevance > 0.0);
        prop_assert!(relevance <= 1.0);
    }

    #[test]
    fn relevance_decreases_with_distance(a in 0.0f64..1e6, delta in 1e-6f64..1e6) {
        let near = ScoredDocument::new(Document::new("x"), a);
        let far = ScoredDocument::new(Document::new("x"), a + delta);
        prop_assert!(near.relevance() > far.relevance());
    }

    #[test]
    fn content_hash_is_deterministic(content in ".*") {
        let a = Document::new(content.clone());
        let b = Document::new(content);
        prop_assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn distinct_contents_hash_differently(content in ".+", suffix in ".+") {
        let a = Document::new(content.clone());
        let b = Document::new(format!("{content}{suffix}"));
        prop_assert_ne!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn every_score_gets_a_label(score in 0.0f64..=1.0) {
        // from_score is total over [0, 1]; banding must not panic or gap.
        let label = RiskLabel::from_score(score);
        let expected = if score >= 0.8 {
            RiskLabel::VeryHigh
        } else if score >= 0.6 {
            RiskLabel::High
        } else if score >= 0.4 {
            RiskLabel::Medium
        } else if score >= 0.2 {
            RiskLabel::Low
        } else {
            RiskLabel::VeryLow
        };
        prop_assert_eq!(label, expected);
    }
}
