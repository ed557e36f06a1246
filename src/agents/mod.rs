//! agents
//!
//! Agent abstraction and the built-in agent catalogue.
//!
//! # Modules
//!
//! - [`capabilities`] - What a tier lets an agent do
//! - [`types`] - Messages, contexts, results
//! - [`traits`] - The [`Agent`] contract
//! - [`session`] - Conversation state and limit enforcement
//! - [`catalog`] - Built-in agents
//!
//! Built-in agents do not execute yet.

pub mod capabilities;
pub mod catalog;
pub mod session;
pub mod traits;
pub mod types;

pub use capabilities::{AgentCapability, CapabilitySet};
pub use catalog::{AgentKind, BuiltinAgent, DEFAULT_AGENT};
pub use session::AgentSession;
pub use traits::{Agent, AgentError};
pub use types::{AgentContext, AgentMessage, AgentResult, Metadata, Role};
