use proptest::prelude::*;
use thalamus_core::models::{Document, RetrievalSource, ScoredDocument};
use thalamus_retrieval::{fuse, SourceList};

fn hits_strategy() -> impl Strategy<Value = Vec<ScoredDocument>> {
    prop::collection::vec(("[a-f]{1,4}", 0.0f64..=1.0), 0..12).prop_map(|raw| {
        raw.into_iter()
            .map(|(content, distance)| ScoredDocument::new(Document::new(content), distance))
            .collect()
    })
}

fn lists_strategy() -> impl Strategy<Value = Vec<SourceList>> {
    let sources = [
        RetrievalSource::SemanticOriginal,
        RetrievalSource::Keyword,
        RetrievalSource::SemanticReformulated,
    ];
    prop::collection::vec((0.0f64..=1.0, hits_strategy()), 1..=3).prop_map(move |raw| {
        raw.into_iter()
            .zip(sources)
            .map(|((weight, hits), source)| SourceList::new(source, weight, hits))
            .collect()
    })
}

proptest! {
    #[test]
    fn output_is_bounded_by_limit(lists in lists_strategy(), limit in 0usize..10) {
        let fused = fuse(lists, limit);
        prop_assert!(fused.len() <= limit);
    }

    #[test]
    fn output_documents_come_from_the_inputs(lists in lists_strategy(), limit in 1usize..10) {
        let inputs: Vec<String> = lists
            .iter()
            .flat_map(|l| l.hits.iter().map(|h| h.document.content.clone()))
            .collect();
        let fused = fuse(lists, limit);
        for f in &fused {
            prop_assert!(inputs.contains(&f.hit.document.content));
        }
    }

    #[test]
    fn scores_are_sorted_descending(lists in lists_strategy(), limit in 1usize..10) {
        let fused = fuse(lists, limit);
        for pair in fused.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn single_list_passes_through_in_order(
        weight in 0.0f64..=1.0,
        hits in hits_strategy(),
        limit in 1usize..10,
    ) {
        let expected: Vec<String> = hits
            .iter()
            .take(limit)
            .map(|h| h.document.content.clone())
            .collect();
        let fused = fuse(
            vec![SourceList::new(RetrievalSource::Keyword, weight, hits)],
            limit,
        );
        let got: Vec<String> = fused.iter().map(|f| f.hit.document.content.clone()).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn fusion_is_deterministic(lists in lists_strategy(), limit in 1usize..10) {
        let first = fuse(lists.clone(), limit);
        let second = fuse(lists, limit);
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(&a.hit, &b.hit);
            prop_assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn merged_output_never_repeats_an_identity(lists in lists_strategy(), limit in 1usize..10) {
        // Merging only happens across lists; a lone list passes through as-is.
        prop_assume!(lists.len() >= 2);
        let fused = fuse(lists, limit);
        let mut hashes: Vec<String> = fused
            .iter()
            .map(|f| f.hit.document.content_hash())
            .collect();
        hashes.sort();
        hashes.dedup();
        prop_assert_eq!(hashes.len(), fused.len());
    }
}
