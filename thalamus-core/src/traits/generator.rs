use async_trait::async_trait;

use crate::errors::ThalamusResult;
use crate::models::Message;

/// Hosted language model producing answer text.
///
/// Calls may be slow or fail outright; callers bound them with timeouts.
#[async_trait]
pub trait ITextGenerator: Send + Sync {
    /// Generate a completion for the system prompt plus conversation.
    async fn generate(&self, system_prompt: &str, messages: &[Message]) -> ThalamusResult<String>;

    /// Human-readable generator name.
    fn name(&self) -> &str;
}
