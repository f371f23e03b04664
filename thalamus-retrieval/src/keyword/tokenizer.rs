//! Case-folding whitespace tokenizer.
//!
//! Used identically on the index and query sides. No stemming and no
//! stop-word removal; known limitation: "return" and "returns" are
//! distinct terms, and punctuation stays attached ("policy?" ≠ "policy").
//! The semantic pass covers synonymy, so the keyword side stays exact.

/// Lowercase the text and split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
