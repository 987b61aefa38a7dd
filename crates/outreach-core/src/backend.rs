//! Generation backend trait.
//!
//! Defines the seam between the composer's conversation protocol and the
//! concrete text-generation service behind it. The HTTP implementation
//! lives in the interaction crate; tests drive the composer with a
//! scripted backend.

use crate::error::Result;
use crate::session::ConversationMessage;

/// An opaque conversational text-generation capability.
///
/// The chat protocol is stateless on the wire: each call receives the full
/// turn history so far (oldest first, ending with the newest user turn) and
/// returns the assistant's reply to it.
#[async_trait::async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Identifier used in logs and error messages.
    fn name(&self) -> &str;

    /// Generates the next assistant reply for the given history.
    async fn generate(&self, history: &[ConversationMessage]) -> Result<String>;
}
