//! agents::session
//!
//! A conversation with one agent.
//!
//! A session validates the agent's required capabilities on creation,
//! records user and assistant turns in its context, and rejects results
//! that exceed the tier's per-run token budget.

use tokio::sync::mpsc;
use uuid::Uuid;

use super::traits::{Agent, AgentError};
use super::types::{AgentContext, AgentMessage, AgentResult, Metadata, Role};
use crate::license::Limit;

/// A running conversation with an agent.
pub struct AgentSession<A: Agent> {
    id: Uuid,
    agent: A,
    context: AgentContext,
}

impl<A: Agent> AgentSession<A> {
    /// Start a session.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::MissingCapability`] for the first required
    /// capability the context does not grant.
    pub fn new(agent: A, context: AgentContext) -> Result<Self, AgentError> {
        if let Some(capability) = context
            .capabilities
            .missing(agent.required_capabilities())
            .into_iter()
            .next()
        {
            return Err(AgentError::MissingCapability {
                agent: agent.name().to_string(),
                capability,
            });
        }

        Ok(Self {
            id: Uuid::new_v4(),
            agent,
            context,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    pub fn context(&self) -> &AgentContext {
        &self.context
    }

    pub fn history(&self) -> &[AgentMessage] {
        &self.context.messages
    }

    pub fn system_prompt(&self) -> String {
        self.agent.system_prompt()
    }

    /// Append a message to the history.
    pub fn add_message(&mut self, role: Role, content: impl Into<String>, metadata: Option<Metadata>) {
        let mut message = AgentMessage::new(role, content);
        message.metadata = metadata;
        self.context.messages.push(message);
    }

    pub fn clear_history(&mut self) {
        self.context.messages.clear();
    }

    /// Send a prompt and wait for the full answer.
    ///
    /// The prompt is recorded before execution. The answer is recorded only
    /// when execution succeeds within the token budget.
    pub async fn execute(&mut self, prompt: &str) -> Result<AgentResult, AgentError> {
        self.add_message(Role::User, prompt, None);
        let result = self.agent.execute(&self.context, prompt).await?;
        self.accept(result)
    }

    /// Send a prompt, forwarding tokens to `tokens` as they arrive.
    pub async fn stream(
        &mut self,
        prompt: &str,
        tokens: mpsc::Sender<String>,
    ) -> Result<AgentResult, AgentError> {
        self.add_message(Role::User, prompt, None);
        let result = self.agent.stream(&self.context, prompt, tokens).await?;
        self.accept(result)
    }

    fn accept(&mut self, result: AgentResult) -> Result<AgentResult, AgentError> {
        if let Some(limit) = self.context.max_tokens {
            if !Limit::Limited(limit).allows(result.tokens_used) {
                return Err(AgentError::TokenLimitExceeded {
                    agent: self.agent.name().to_string(),
                    used: result.tokens_used,
                    limit,
                });
            }
        }
        if result.success {
            self.add_message(Role::Assistant, result.output.clone(), result.metadata.clone());
        }
        Ok(result)
    }
}
