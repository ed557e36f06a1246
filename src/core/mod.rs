//! core
//!
//! Storage locations and user configuration.
//!
//! # Modules
//!
//! - [`paths`] - Centralized path routing for Terminal221b storage
//! - [`config`] - Configuration schema and loading

pub mod config;
pub mod paths;

