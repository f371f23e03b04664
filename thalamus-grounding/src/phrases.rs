//! Phrase tables behind the grounding signals.
//!
//! Matching is plain substring containment on lowercased text, so entries
//! must be lowercase. Multi-word entries match across whitespace as
//! written.

/// Phrases that hedge a claim.
pub(crate) const HEDGING_PHRASES: [&str; 9] = [
    "i think",
    "i believe",
    "probably",
    "maybe",
    "perhaps",
    "it seems",
    "it appears",
    "might be",
    "could be",
];

/// Phrases that flag the model is filling gaps rather than citing.
pub(crate) const FABRICATION_MARKERS: [&str; 6] = [
    "as far as i know",
    "to the best of my knowledge",
    "i'm not entirely sure",
    "i don't have access",
    "i cannot confirm",
    "i'm unable to verify",
];

/// Phrases that declare inability to answer.
pub(crate) const REFUSAL_PHRASES: [&str; 5] = [
    "i cannot help",
    "i'm unable to",
    "i don't have information",
    "i cannot provide",
    "sorry, i don't know",
];

/// Lexical polarity opposites checked between answer and evidence,
/// in both directions.
pub(crate) const CONTRADICTION_PAIRS: [(&str, &str); 8] = [
    ("yes", "no"),
    ("can", "cannot"),
    ("will", "will not"),
    ("does", "does not"),
    ("is", "is not"),
    ("available", "unavailable"),
    ("accept", "not accept"),
    ("offer", "not offer"),
];

/// Function words ignored when comparing answer and query vocabulary.
pub(crate) const STOPWORDS: [&str; 49] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "what", "when", "where", "who", "which", "why", "how", "can", "could",
    "would", "should", "may", "might", "will", "i", "you", "your", "my", "our",
];
