//! Conversational email composer.
//!
//! Drives the fixed two-turn protocol against a [`GenerationBackend`]:
//! one instruction turn establishing the assistant's role, then one turn
//! carrying the live user intent plus the aggregated context. The reply to
//! the second turn is the produced email.

use tracing::debug;

use crate::backend::GenerationBackend;
use crate::context::AggregatedContext;
use crate::error::{OutreachError, Result};
use crate::session::{ConversationMessage, MessageRole, SessionState};

/// The fixed instruction issued as the session's first turn.
///
/// It scopes the assistant to email writing only and explicitly grants use
/// of any contact URLs or phone numbers present in the context.
pub const EMAIL_INSTRUCTION: &str = "You are a helpful assistant and your main job is to \
write emails for me. I will give you the context and you will write an email for me. \
The context includes GitHub, LinkedIn and resume information; tailor a single good email \
to it. I do not need any explanations or suggestions, just the email itself - whatever \
you write goes straight to the recipient. You have access to all the URLs and phone \
numbers in the context and you are absolutely free to use any of them in the email. \
Do not respond with much now; this is just the instruction. The request and the context \
arrive in the next message.";

/// The result of a completed compose session.
#[derive(Debug, Clone)]
pub struct ComposedEmail {
    /// The backend's reply to the instruction turn. Display only.
    pub acknowledgement: String,
    /// The produced email text.
    pub email: String,
}

/// Owns one conversation session with the generation backend.
///
/// The session moves strictly `Created` → `InstructionSent` → `ContextSent`;
/// issuing a turn out of order is a [`OutreachError::Session`] error.
pub struct EmailComposer<B: GenerationBackend> {
    backend: B,
    transcript: Vec<ConversationMessage>,
    state: SessionState,
}

impl<B: GenerationBackend> EmailComposer<B> {
    /// Opens a new session. Nothing is sent until a turn is issued.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            transcript: Vec::new(),
            state: SessionState::Created,
        }
    }

    /// Current position in the session lifecycle.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The full role-tagged turn history so far.
    pub fn transcript(&self) -> &[ConversationMessage] {
        &self.transcript
    }

    /// Issues the fixed instruction turn.
    ///
    /// Returns the backend's acknowledgement, which callers only display.
    pub async fn send_instruction(&mut self) -> Result<String> {
        if self.state != SessionState::Created {
            return Err(OutreachError::session(
                "instruction turn already issued for this session",
            ));
        }
        let reply = self.exchange(EMAIL_INSTRUCTION.to_string()).await?;
        self.state = SessionState::InstructionSent;
        Ok(reply)
    }

    /// Issues the request turn: the live user intent plus the full context.
    ///
    /// The reply is the produced email text. The session is terminal after
    /// this call.
    pub async fn send_request(
        &mut self,
        intent: &str,
        context: &AggregatedContext,
    ) -> Result<String> {
        match self.state {
            SessionState::Created => {
                return Err(OutreachError::session(
                    "the instruction turn must be issued before the request turn",
                ));
            }
            SessionState::ContextSent => {
                return Err(OutreachError::session("this session is already complete"));
            }
            SessionState::InstructionSent => {}
        }
        let content = format!("{intent}\n\nHere is the context:\n{context}");
        let reply = self.exchange(content).await?;
        self.state = SessionState::ContextSent;
        Ok(reply)
    }

    /// Runs the full protocol in order and returns both replies.
    pub async fn compose(
        &mut self,
        intent: &str,
        context: &AggregatedContext,
    ) -> Result<ComposedEmail> {
        let acknowledgement = self.send_instruction().await?;
        let email = self.send_request(intent, context).await?;
        Ok(ComposedEmail {
            acknowledgement,
            email,
        })
    }

    /// Records the outgoing user turn, calls the backend with the full
    /// history, and records the reply.
    async fn exchange(&mut self, content: String) -> Result<String> {
        self.transcript
            .push(ConversationMessage::now(MessageRole::User, content));
        debug!(
            backend = self.backend.name(),
            turns = self.transcript.len(),
            "sending turn to generation backend"
        );
        let reply = self.backend.generate(&self.transcript).await?;
        self.transcript
            .push(ConversationMessage::now(MessageRole::Assistant, reply.clone()));
        Ok(reply)
    }
}
