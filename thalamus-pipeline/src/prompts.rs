//! Prompt assets for answer generation.
//!
//! The system prompt and the user-turn template are fixed strings; the only
//! dynamic part is the evidence context block assembled per query.

use thalamus_core::models::ScoredDocument;

/// System instructions for the answer generator.
pub const ANSWER_SYSTEM_PROMPT: &str = r#"You are a helpful customer support assistant for our company. Your role is to:

1. Answer customer questions accurately and professionally
2. Use the provided context from our documentation to inform your responses
3. If the context doesn't contain relevant information, politely say so and offer to help in other ways
4. Be concise but thorough in your answers
5. Maintain a friendly and empathetic tone
6. If you're unsure about something, acknowledge it rather than guessing

Guidelines:
- Always prioritize information from the provided context
- If the question is unclear, ask for clarification
- For account-specific issues, guide users to contact support directly
- Never make up information not present in the context
- Format your responses clearly with bullet points or paragraphs as appropriate"#;

/// Context block stand-in when retrieval produced nothing.
pub const NO_CONTEXT_FALLBACK: &str = "No relevant information found.";

/// Render fused evidence as numbered document blocks.
///
/// Blocks are separated by blank lines; the category header is omitted for
/// documents without one.
pub fn format_context(evidence: &[ScoredDocument]) -> String {
    if evidence.is_empty() {
        return NO_CONTEXT_FALLBACK.to_string();
    }

    let mut blocks = Vec::with_capacity(evidence.len());
    for (i, hit) in evidence.iter().enumerate() {
        let category = hit.document.category();
        let header = if category.is_empty() {
            format!("[Document {}]", i + 1)
        } else {
            format!("[Document {}] Category: {}", i + 1, category)
        };
        blocks.push(format!("{header}\n{}", hit.document.content));
    }
    blocks.join("\n\n")
}

/// Render the final user turn: context block plus the customer question.
pub fn format_user_query(query: &str, context: &str) -> String {
    format!(
        "Context from our documentation:\n\
         \n\
         {context}\n\
         \n\
         ---\n\
         \n\
         Customer Question: {query}\n\
         \n\
         Please provide a helpful and accurate response based on the context above. \
         If the context doesn't contain relevant information for this question, \
         politely let the customer know and suggest alternative ways to get help."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use thalamus_core::models::Document;

    fn hit(content: &str, category: Option<&str>) -> ScoredDocument {
        let mut doc = Document::new(content).with_metadata("source", "faq.md");
        if let Some(category) = category {
            doc = doc.with_metadata("category", category);
        }
        ScoredDocument::new(doc, 0.5)
    }

    #[test]
    fn documents_are_numbered_with_their_categories() {
        let evidence = vec![
            hit("Returns are accepted within 30 days.", Some("returns")),
            hit("Shipping is free over $50.", Some("shipping")),
        ];
        let context = format_context(&evidence);
        assert_eq!(
            context,
            "[Document 1] Category: returns\nReturns are accepted within 30 days.\n\n\
             [Document 2] Category: shipping\nShipping is free over $50."
        );
    }

    #[test]
    fn category_header_is_omitted_when_absent() {
        let context = format_context(&[hit("Plain text chunk.", None)]);
        assert_eq!(context, "[Document 1]\nPlain text chunk.");
    }

    #[test]
    fn empty_evidence_falls_back_to_placeholder() {
        assert_eq!(format_context(&[]), NO_CONTEXT_FALLBACK);
    }

    #[test]
    fn user_turn_embeds_context_and_question() {
        let turn = format_user_query("What is your return policy?", "[Document 1]\nReturns.");
        assert!(turn.starts_with("Context from our documentation:\n\n[Document 1]\nReturns.\n\n---\n\n"));
        assert!(turn.contains("Customer Question: What is your return policy?\n\n"));
        assert!(turn.ends_with("suggest alternative ways to get help."));
    }
}
