//! Terminal221b - Polymathic Autonomous Organization (PAO)
//!
//! A command-line front end for a multi-agent AI workbench, gated by
//! license tier: Free, Pro and Enterprise differ in daily runs, token
//! budget, agent selection and blockchain access.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, gates, dispatches)
//! - [`license`] - Tiers, key validation, daily run quota, gating
//! - [`agents`] - Agent contract, sessions, built-in agent catalogue
//! - [`core`] - Storage paths and user configuration
//! - [`secrets`] - Secret storage for the activated license key
//! - [`ui`] - Output, banner and prompts
//!
//! # Invariants
//!
//! 1. The tier is Free unless a valid key was supplied
//! 2. A finite daily run quota is never exceeded
//! 3. Gated commands do nothing before their requirements pass
//! 4. License keys are never printed or logged

pub mod agents;
pub mod cli;
pub mod core;
pub mod license;
pub mod secrets;
pub mod ui;
