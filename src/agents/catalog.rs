//! agents::catalog
//!
//! The built-in agents.
//!
//! Each built-in agent has a fixed name, description, minimum tier and
//! required capability. Execution is not implemented yet; a session can be
//! opened but every prompt returns [`AgentError::NotImplemented`].

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use tokio::sync::mpsc;

use super::capabilities::AgentCapability;
use super::traits::{Agent, AgentError};
use super::types::{AgentContext, AgentResult};
use crate::license::LicenseTier;

/// The agent every tier may use.
pub const DEFAULT_AGENT: AgentKind = AgentKind::Analyst;

/// A built-in agent.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Data analysis, research, and insights
    Analyst,
    /// Creative content generation
    Artist,
    /// Code generation and architecture
    Engineer,
    /// Documentation and technical writing
    Writer,
}

impl AgentKind {
    /// All built-in agents, in listing order.
    pub const ALL: [AgentKind; 4] = [
        AgentKind::Analyst,
        AgentKind::Artist,
        AgentKind::Engineer,
        AgentKind::Writer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::Analyst => "analyst",
            AgentKind::Artist => "artist",
            AgentKind::Engineer => "engineer",
            AgentKind::Writer => "writer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AgentKind::Analyst => "Data analysis, research, and insights",
            AgentKind::Artist => "Creative content generation",
            AgentKind::Engineer => "Code generation and architecture",
            AgentKind::Writer => "Documentation and technical writing",
        }
    }

    /// Lowest tier that can use this agent.
    pub fn minimum_tier(&self) -> LicenseTier {
        match self {
            AgentKind::Analyst => LicenseTier::Free,
            _ => LicenseTier::Pro,
        }
    }

    /// Tier label shown in listings, e.g. `Free+`.
    ///
    /// ```
    /// use terminal221b::agents::AgentKind;
    ///
    /// assert_eq!(AgentKind::Analyst.tier_label(), "Free+");
    /// assert_eq!(AgentKind::Writer.tier_label(), "Pro+");
    /// ```
    pub fn tier_label(&self) -> String {
        format!("{}+", self.minimum_tier().title())
    }

    pub fn required_capabilities(&self) -> &'static [AgentCapability] {
        match self {
            AgentKind::Analyst => &[AgentCapability::DataAnalysis],
            AgentKind::Artist => &[AgentCapability::ImageGeneration],
            AgentKind::Engineer => &[AgentCapability::CodeGeneration],
            AgentKind::Writer => &[AgentCapability::TextGeneration, AgentCapability::MultiAgent],
        }
    }

    /// Look up an agent by name.
    pub fn from_name(name: &str) -> Option<AgentKind> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Whether `tier` may use this agent.
    pub fn available_to(&self, tier: LicenseTier) -> bool {
        tier >= self.minimum_tier()
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A built-in agent with no execution backend yet.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinAgent {
    kind: AgentKind,
}

impl BuiltinAgent {
    pub fn new(kind: AgentKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    fn not_implemented(&self) -> AgentError {
        AgentError::NotImplemented(format!("{} agent execution", self.kind))
    }
}

#[async_trait]
impl Agent for BuiltinAgent {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn description(&self) -> &str {
        self.kind.description()
    }

    fn required_capabilities(&self) -> &[AgentCapability] {
        self.kind.required_capabilities()
    }

    async fn execute(
        &self,
        _context: &AgentContext,
        _prompt: &str,
    ) -> Result<AgentResult, AgentError> {
        Err(self.not_implemented())
    }

    async fn stream(
        &self,
        _context: &AgentContext,
        _prompt: &str,
        _tokens: mpsc::Sender<String>,
    ) -> Result<AgentResult, AgentError> {
        Err(self.not_implemented())
    }
}
