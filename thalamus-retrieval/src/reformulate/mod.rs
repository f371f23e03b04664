//! History-aware query reformulation.
//!
//! Follow-up questions retrieve poorly when their subject lives in an
//! earlier turn ("how do I return it?"). When history is present and the
//! query looks context-dependent, an LLM rewrites it into a standalone
//! question. The rewrite path is best-effort: generator errors, timeouts,
//! and implausible rewrites all fall back to the original query.

mod heuristic;

pub use heuristic::needs_reformulation;

use std::sync::Arc;
use std::time::Duration;

use thalamus_core::config::ReformulationConfig;
use thalamus_core::constants::{REFORMULATION_MAX_GROWTH, REFORMULATION_MIN_TOKENS};
use thalamus_core::models::{Message, Role};
use thalamus_core::traits::ITextGenerator;
use tokio::time::timeout;
use tracing::{debug, info, warn};

pub const REFORMULATION_SYSTEM_PROMPT: &str = r#"You are a query reformulation assistant. Your task is to take a user's question that may contain pronouns or references to previous conversation, and reformulate it into a clear, standalone question that can be understood without context.

Rules:
1. Keep the intent and meaning of the original question
2. Replace pronouns (it, this, that, etc.) with specific nouns from the conversation
3. Make the question self-contained and clear
4. Keep it concise and natural
5. Output ONLY the reformulated question, nothing else
6. Do not add explanations or extra text
7. If the original question is already clear and standalone, you may return it as-is

Examples:
Original: "What about the warranty?"
Previous context: User asked about laptop specifications
Reformulated: "What is the warranty for the laptop?"

Original: "How do I return it?"
Previous context: User asked about a product
Reformulated: "How do I return the product?"

Original: "What is your return policy?"
Reformulated: "What is your return policy?"
"#;

/// Result of a reformulation attempt.
///
/// `text` is always usable as a retrieval query; `was_rewritten` tells the
/// caller whether a second semantic pass over the rewrite is worthwhile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReformulationOutcome {
    pub text: String,
    pub was_rewritten: bool,
}

impl ReformulationOutcome {
    fn pass_through(query: &str) -> Self {
        Self {
            text: query.to_string(),
            was_rewritten: false,
        }
    }
}

/// Rewrites context-dependent queries into standalone ones.
pub struct QueryReformulator {
    generator: Arc<dyn ITextGenerator>,
    config: ReformulationConfig,
}

impl QueryReformulator {
    pub fn new(generator: Arc<dyn ITextGenerator>, config: ReformulationConfig) -> Self {
        Self { generator, config }
    }

    /// Reformulate `query` against conversation `history`.
    ///
    /// Returns a pass-through outcome when reformulation is disabled, when
    /// there is no history to resolve references against, when the query
    /// already stands alone, or when the rewrite path fails in any way.
    pub async fn reformulate(&self, query: &str, history: &[Message]) -> ReformulationOutcome {
        if !self.config.enabled || history.is_empty() {
            return ReformulationOutcome::pass_through(query);
        }
        if !needs_reformulation(query) {
            debug!(%query, "query already standalone, skipping rewrite");
            return ReformulationOutcome::pass_through(query);
        }

        let prompt = build_prompt(query, history, self.config.history_window);
        let turn = [Message::now(Role::User, prompt)];
        let budget = Duration::from_millis(self.config.timeout_ms);

        let raw = match timeout(
            budget,
            self.generator.generate(REFORMULATION_SYSTEM_PROMPT, &turn),
        )
        .await
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!(%query, error = %e, "rewrite generation failed, keeping original query");
                return ReformulationOutcome::pass_through(query);
            }
            Err(_) => {
                warn!(
                    %query,
                    budget_ms = self.config.timeout_ms,
                    "rewrite generation timed out, keeping original query"
                );
                return ReformulationOutcome::pass_through(query);
            }
        };

        let cleaned = raw.trim().trim_matches('"').trim_matches('\'').to_string();
        if !is_valid_rewrite(query, &cleaned) {
            warn!(%query, rewrite = %cleaned, "implausible rewrite, keeping original query");
            return ReformulationOutcome::pass_through(query);
        }
        if cleaned == query {
            return ReformulationOutcome::pass_through(query);
        }

        info!(%query, rewrite = %cleaned, "query reformulated");
        ReformulationOutcome {
            text: cleaned,
            was_rewritten: true,
        }
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }
}

/// Render the rewrite prompt from the most recent history window.
fn build_prompt(query: &str, history: &[Message], window: usize) -> String {
    let start = history.len().saturating_sub(window);
    let mut history_text = String::new();
    for message in &history[start..] {
        let role = match message.role {
            Role::User => "User",
            Role::Assistant => "Assistant",
        };
        history_text.push_str(role);
        history_text.push_str(": ");
        history_text.push_str(&message.content);
        history_text.push('\n');
    }

    format!(
        "Given the following conversation history and a new user question, \
         reformulate the question to be a standalone question that can be \
         understood without the conversation context.\n\
         \n\
         Conversation History:\n\
         {history_text}\n\
         New User Question: {query}\n\
         \n\
         Reformulated Standalone Question:"
    )
}

/// Sanity checks on the generator's output.
///
/// Rejects rewrites that ballooned past `REFORMULATION_MAX_GROWTH` times the
/// original length, collapsed below `REFORMULATION_MIN_TOKENS` tokens,
/// reduced to punctuation, or echoed the prompt's own vocabulary back.
fn is_valid_rewrite(original: &str, rewrite: &str) -> bool {
    if rewrite.chars().count() > original.chars().count() * REFORMULATION_MAX_GROWTH {
        return false;
    }
    if rewrite.split_whitespace().count() < REFORMULATION_MIN_TOKENS {
        return false;
    }
    if rewrite
        .trim_matches(|c: char| matches!(c, '?' | '.' | '!' | ' '))
        .is_empty()
    {
        return false;
    }
    let lower = rewrite.to_lowercase();
    if lower.contains("reformulated") || lower.contains("standalone") {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_history_lines_and_query() {
        let history = vec![
            Message::now(Role::User, "Tell me about the wireless headphones"),
            Message::now(Role::Assistant, "They have a 30 hour battery."),
        ];
        let prompt = build_prompt("How do I return it?", &history, 6);
        assert!(prompt.contains("User: Tell me about the wireless headphones\n"));
        assert!(prompt.contains("Assistant: They have a 30 hour battery.\n"));
        assert!(prompt.contains("New User Question: How do I return it?"));
        assert!(prompt.ends_with("Reformulated Standalone Question:"));
    }

    #[test]
    fn prompt_window_keeps_only_recent_turns() {
        let history: Vec<Message> = (0..10)
            .map(|i| Message::now(Role::User, format!("turn {i}")))
            .collect();
        let prompt = build_prompt("and the price?", &history, 6);
        assert!(!prompt.contains("turn 3"));
        assert!(prompt.contains("turn 4"));
        assert!(prompt.contains("turn 9"));
    }

    #[test]
    fn rewrite_validation_rejects_degenerate_outputs() {
        let original = "How do I return it?";
        assert!(!is_valid_rewrite(original, ""));
        assert!(!is_valid_rewrite(original, "?!."));
        assert!(!is_valid_rewrite(original, "the product"));
        assert!(!is_valid_rewrite(
            original,
            "Reformulated: How do I return the product?"
        ));
        assert!(!is_valid_rewrite(
            original,
            "Here is a standalone version of the question you asked"
        ));
        let bloated = "word ".repeat(40);
        assert!(!is_valid_rewrite(original, &bloated));
    }

    #[test]
    fn rewrite_validation_accepts_plausible_outputs() {
        assert!(is_valid_rewrite(
            "How do I return it?",
            "How do I return the wireless headphones?"
        ));
        assert!(is_valid_rewrite(
            "what about shipping",
            "What are the shipping options?"
        ));
    }
}
