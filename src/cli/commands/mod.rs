//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Gates on the license requirements it declares
//! 2. Does its work
//! 3. Formats and displays output
//!
//! A gate denial becomes a [`Denied`] error carrying an optional upgrade
//! hint, which [`crate::cli::report_error`] prints after the error line.

mod agents;
mod completion;
mod config_cmd;
mod license;
mod overview;
mod run;
mod tui;
mod upgrade;
mod wallet;

pub use agents::agents;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use license::{activate, deactivate, status};
pub use overview::{license_info, overview, version_line};
pub use run::run;
pub use tui::tui;
pub use upgrade::upgrade;
pub use wallet::wallet;

use crate::cli::args::{Command, ConfigAction, LicenseAction};
use crate::cli::Context;
use crate::license::GateDenial;
use anyhow::Result;
use thiserror::Error;

/// A command refused by license gating.
#[derive(Debug, Error)]
#[error("{denial}")]
pub struct Denied {
    pub denial: GateDenial,
    /// Upgrade suggestion printed under the error.
    pub hint: Option<String>,
}

impl Denied {
    pub fn new(denial: GateDenial, hint: Option<String>) -> Self {
        Self { denial, hint }
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &mut Context) -> Result<()> {
    match command {
        Command::Run { agent, prompt } => run::run(ctx, agent, prompt.as_deref()),
        Command::Tui => tui::tui(ctx),
        Command::Agents => agents::agents(ctx),
        Command::Wallet { create, balance } => wallet::wallet(ctx, create, balance),
        Command::License { action } => match action.unwrap_or(LicenseAction::Status { json: false }) {
            LicenseAction::Status { json } => license::status(ctx, json),
            LicenseAction::Activate { key } => license::activate(ctx, key.as_deref()),
            LicenseAction::Deactivate => license::deactivate(ctx),
        },
        Command::Upgrade { no_browser } => upgrade::upgrade(ctx, no_browser),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value } => config_cmd::set(ctx, &key, &value),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
