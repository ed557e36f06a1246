//! agents::traits
//!
//! The agent contract.
//!
//! # Design
//!
//! `Agent` is async because execution will involve model calls. Agents are
//! stateless with respect to the conversation: history lives in the
//! [`AgentContext`] owned by an [`AgentSession`](super::AgentSession), which
//! also enforces capability and token limits.
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use terminal221b::agents::{Agent, AgentContext, AgentError, AgentResult};
//! use tokio::sync::mpsc;
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl Agent for Echo {
//!     fn name(&self) -> &str { "echo" }
//!     fn description(&self) -> &str { "repeats the prompt" }
//!
//!     async fn execute(&self, _ctx: &AgentContext, prompt: &str) -> Result<AgentResult, AgentError> {
//!         Ok(AgentResult::ok(prompt, 1))
//!     }
//!
//!     async fn stream(
//!         &self,
//!         ctx: &AgentContext,
//!         prompt: &str,
//!         tokens: mpsc::Sender<String>,
//!     ) -> Result<AgentResult, AgentError> {
//!         tokens.send(prompt.to_string()).await.map_err(|_| AgentError::StreamClosed)?;
//!         self.execute(ctx, prompt).await
//!     }
//! }
//!
//! assert_eq!(Echo.system_prompt(), "You are echo, repeats the prompt.");
//! ```

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use super::capabilities::AgentCapability;
use super::types::{AgentContext, AgentResult};

/// Errors from agent sessions and execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error(
        "Agent '{agent}' requires capability '{capability}' which is not available in current license tier."
    )]
    MissingCapability {
        agent: String,
        capability: AgentCapability,
    },

    #[error("Agent '{agent}' used {used} tokens, exceeding the per-run limit of {limit}.")]
    TokenLimitExceeded { agent: String, used: u32, limit: u32 },

    #[error("token stream closed before the agent finished")]
    StreamClosed,

    #[error("not implemented: {0}")]
    NotImplemented(String),
}

/// An agent that can answer prompts.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Short identifier.
    fn name(&self) -> &str;

    /// One-line description of the agent's speciality.
    fn description(&self) -> &str;

    /// Capabilities the agent cannot run without.
    fn required_capabilities(&self) -> &[AgentCapability] {
        &[]
    }

    /// System prompt used to prime the model.
    fn system_prompt(&self) -> String {
        format!("You are {}, {}.", self.name(), self.description())
    }

    /// Answer a prompt in one piece.
    async fn execute(&self, context: &AgentContext, prompt: &str)
        -> Result<AgentResult, AgentError>;

    /// Answer a prompt, sending tokens as they are produced.
    ///
    /// The returned result carries the full output.
    async fn stream(
        &self,
        context: &AgentContext,
        prompt: &str,
        tokens: mpsc::Sender<String>,
    ) -> Result<AgentResult, AgentError>;
}
