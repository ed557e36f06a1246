//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive prompts and confirmations
//! - [`output`] - Output formatting and display
//! - [`banner`] - Banner, license info, and tier notices
//!
//! # Design
//!
//! All output and prompts go through this module to ensure consistent
//! formatting and proper handling of interactive vs non-interactive modes.

pub mod banner;
pub mod output;
pub mod prompts;
