//! Cheap lexical check deciding whether a query is worth an LLM rewrite.

/// Queries this short are assumed to be follow-ups.
const SHORT_QUERY_TOKENS: usize = 3;

/// Question-prefixed queries up to this long often lack an explicit subject.
const SHORT_QUESTION_TOKENS: usize = 5;

/// Pronouns and references that only resolve against earlier turns.
const REFERENCE_WORDS: [&str; 20] = [
    "it", "this", "that", "these", "those", "them", "they", "he", "she", "his", "her", "their",
    "same", "also", "too", "either", "what about", "how about", "and the", "or the",
];

/// Interrogative openers; short questions starting with one tend to lean on
/// context for their subject.
const QUESTION_WORDS: [&str; 8] = ["what", "how", "when", "where", "why", "can", "does", "is"];

/// Whether `query` likely depends on conversation context.
///
/// Fires on very short queries, on queries containing a reference word as a
/// whole whitespace-delimited token, and on short queries opening with a
/// question word. Empty queries never fire; there is nothing to resolve.
pub fn needs_reformulation(query: &str) -> bool {
    let token_count = query.split_whitespace().count();
    if token_count == 0 {
        return false;
    }
    if token_count <= SHORT_QUERY_TOKENS {
        return true;
    }

    let lower = query.to_lowercase();
    let padded = format!(" {lower} ");
    for word in REFERENCE_WORDS {
        if padded.contains(&format!(" {word} ")) || lower.starts_with(&format!("{word} ")) {
            return true;
        }
    }

    for word in QUESTION_WORDS {
        if lower.starts_with(&format!("{word} ")) && token_count <= SHORT_QUESTION_TOKENS {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_queries_fire() {
        assert!(needs_reformulation("the warranty?"));
        assert!(needs_reformulation("and shipping"));
        assert!(needs_reformulation("ok but why"));
    }

    #[test]
    fn pronoun_as_standalone_token_fires() {
        assert!(needs_reformulation("how long does it take to arrive"));
        assert!(needs_reformulation("do they come with a charging cable"));
    }

    #[test]
    fn leading_reference_word_fires() {
        assert!(needs_reformulation("that one looks nice to me today"));
        assert!(needs_reformulation("This policy seems stricter than I expected"));
    }

    #[test]
    fn multiword_reference_fires() {
        assert!(needs_reformulation("what about the shipping cost for orders"));
        assert!(needs_reformulation(
            "the delivery fee seems high and the tax seems wrong"
        ));
    }

    #[test]
    fn short_question_without_subject_fires() {
        assert!(needs_reformulation("where is my order today"));
        assert!(needs_reformulation("How do I return it?"));
    }

    #[test]
    fn long_question_with_subject_passes() {
        // Six tokens, so the question-opener rule no longer applies.
        assert!(!needs_reformulation(
            "what payment methods does your store accept"
        ));
    }

    #[test]
    fn standalone_query_passes() {
        assert!(!needs_reformulation(
            "please describe the complete warranty coverage offered for wireless headphones"
        ));
    }

    #[test]
    fn reference_word_inside_another_word_does_not_fire() {
        // "items" contains "it" but is not the token "it".
        assert!(!needs_reformulation(
            "are returned items inspected before refunds get issued"
        ));
    }

    #[test]
    fn empty_and_blank_queries_never_fire() {
        assert!(!needs_reformulation(""));
        assert!(!needs_reformulation("   "));
    }
}
