//! agents::types
//!
//! Conversation and execution types shared by all agents.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use super::capabilities::CapabilitySet;
use crate::license::LicenseLimits;

/// Free-form metadata attached to messages, contexts and results.
pub type Metadata = BTreeMap<String, Value>;

/// Token budget when no tier limit applies.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Sampling temperature when none is configured.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        })
    }
}

/// A message in an agent conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentMessage {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl AgentMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            metadata: None,
        }
    }
}

/// Everything an agent needs to execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentContext {
    /// Conversation history, oldest first.
    #[serde(default)]
    pub messages: Vec<AgentMessage>,
    /// Token budget for one run; `None` when unlimited.
    pub max_tokens: Option<u32>,
    pub temperature: f32,
    /// Capabilities available to the agent.
    #[serde(default)]
    pub capabilities: CapabilitySet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Default for AgentContext {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            temperature: DEFAULT_TEMPERATURE,
            capabilities: CapabilitySet::new(),
            metadata: None,
        }
    }
}

impl AgentContext {
    /// Build a context for a tier's limits.
    ///
    /// ```
    /// use terminal221b::agents::AgentContext;
    /// use terminal221b::license::LicenseTier;
    ///
    /// let ctx = AgentContext::for_limits(LicenseTier::Pro.limits());
    /// assert_eq!(ctx.max_tokens, Some(10_000));
    ///
    /// let ctx = AgentContext::for_limits(LicenseTier::Enterprise.limits());
    /// assert_eq!(ctx.max_tokens, None);
    /// ```
    pub fn for_limits(limits: &LicenseLimits) -> Self {
        Self {
            max_tokens: limits.max_tokens_per_run.get(),
            capabilities: CapabilitySet::for_limits(limits),
            ..Self::default()
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Outcome of one agent execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResult {
    pub success: bool,
    pub output: String,
    #[serde(default)]
    pub tokens_used: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentResult {
    /// A successful result.
    pub fn ok(output: impl Into<String>, tokens_used: u32) -> Self {
        Self {
            success: true,
            output: output.into(),
            tokens_used,
            metadata: None,
            error: None,
        }
    }

    /// A failed result carrying an error message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            tokens_used: 0,
            metadata: None,
            error: Some(error.into()),
        }
    }
}
