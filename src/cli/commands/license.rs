//! cli::commands::license
//!
//! Inspect the active license and manage the stored key.
//!
//! # Security
//!
//! The key itself is never printed. Status output shows the tier prefix and
//! a SHA-256 fingerprint only.
//!
//! # Example
//!
//! ```bash
//! # Show the active tier and usage
//! terminal221b license status
//!
//! # Machine-readable status
//! terminal221b license status --json
//!
//! # Store a key (prompts with masked input when --key is omitted)
//! terminal221b license activate
//!
//! # Forget the stored key
//! terminal221b license deactivate
//! ```

use serde::Serialize;

use crate::cli::Context;
use crate::license::{
    Activation, KeySource, LicenseKey, LicenseStatus, LICENSE_KEY_ENV, LICENSE_SECRET_KEY,
};
use crate::ui::output;
use crate::ui::prompts::{self, PromptError};
use anyhow::{bail, Context as _, Result};

/// Status as emitted by `license status --json`.
#[derive(Debug, Serialize)]
struct StatusReport {
    #[serde(flatten)]
    status: LicenseStatus,
    key_source: KeySource,
    /// `None` when unlimited.
    remaining_runs: Option<u32>,
}

/// Show the resolved license.
pub fn status(ctx: &Context, json: bool) -> Result<()> {
    if json {
        let report = StatusReport {
            status: ctx.license.status(),
            key_source: ctx.key_source,
            remaining_runs: ctx.license.remaining_runs(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::print(ctx.license.status(), ctx.verbosity);
    match ctx.license.key() {
        Some(key) => output::print(format!("Key: {} (from {})", key, ctx.key_source), ctx.verbosity),
        None if ctx.license.activation() == Activation::Invalid => output::print(
            format!("Key: invalid (from {})", ctx.key_source),
            ctx.verbosity,
        ),
        None => output::print("Key: none", ctx.verbosity),
    }
    if let Some(remaining) = ctx.license.remaining_runs() {
        output::print(format!("Runs left today: {}", remaining), ctx.verbosity);
    }
    Ok(())
}

/// Validate a key and store it in the secret store.
pub fn activate(ctx: &Context, key: Option<&str>) -> Result<()> {
    let raw = read_key(ctx, key)?;
    let key = LicenseKey::parse(&raw).context("Invalid license key")?;

    let store = ctx.secret_store()?;
    store
        .set(LICENSE_SECRET_KEY, key.expose())
        .context("Failed to store license key")?;

    if let Some(headline) = Activation::Activated(key.tier()).headline() {
        output::success(headline, ctx.verbosity);
    }
    if ctx.key_source == KeySource::Environment {
        output::warn(
            format!("${} is set and takes precedence over the stored key", LICENSE_KEY_ENV),
            ctx.verbosity,
        );
    }
    Ok(())
}

/// Remove the stored key.
pub fn deactivate(ctx: &Context) -> Result<()> {
    let store = ctx.secret_store()?;
    if !store
        .exists(LICENSE_SECRET_KEY)
        .context("Failed to read secret store")?
    {
        output::print("No stored license key.", ctx.verbosity);
        return Ok(());
    }

    if ctx.interactive {
        match prompts::confirm("Remove the stored license key?", false, true) {
            Ok(true) => {}
            Ok(false) | Err(PromptError::Cancelled) => {
                output::print("Cancelled.", ctx.verbosity);
                return Ok(());
            }
            Err(e) => return Err(anyhow::Error::new(e).context("Failed to read confirmation")),
        }
    }

    store
        .delete(LICENSE_SECRET_KEY)
        .context("Failed to remove license key")?;
    output::success(
        "License key removed. Free tier limits apply.",
        ctx.verbosity,
    );

    if ctx.key_source == KeySource::Environment {
        output::warn(
            format!("${} is still set and will keep being used", LICENSE_KEY_ENV),
            ctx.verbosity,
        );
    }
    Ok(())
}

/// Key from the flag, or a masked prompt when interactive.
fn read_key(ctx: &Context, key: Option<&str>) -> Result<String> {
    if let Some(k) = key {
        return Ok(k.trim().to_string());
    }

    if !ctx.interactive {
        bail!("License key required. Use --key <KEY> or run interactively.");
    }

    prompts::password("License key", true).context("Failed to read license key")
}
