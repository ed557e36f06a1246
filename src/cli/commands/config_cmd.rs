//! config command - Get, set, or list configuration values

use crate::cli::Context;
use crate::core::config::GlobalConfig;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Get a configuration value.
///
/// Prints nothing when the key is known but unset.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    if let Some(value) = ctx.config.global.get(key)? {
        println!("{}", value);
    }
    Ok(())
}

/// Set a configuration value and write the config file.
pub fn set(ctx: &mut Context, key: &str, value: &str) -> Result<()> {
    ctx.config.global.set(key, value)?;
    let path = ctx
        .config
        .save(ctx.paths.as_ref())
        .context("Failed to write config")?;

    output::debug(format!("wrote {}", path.display()), ctx.verbosity);
    output::success(format!("Set {} = {}", key, value), ctx.verbosity);
    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    match ctx.config.loaded_from() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# defaults (no config file)"),
    }

    for key in GlobalConfig::KEYS {
        match ctx.config.global.get(key)? {
            Some(value) => println!("{} = {}", key, value),
            None => println!("{} = (not set)", key),
        }
    }
    Ok(())
}
