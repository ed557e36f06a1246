//! wallet command - Manage the Solana wallet (Pro+)

use crate::cli::commands::Denied;
use crate::cli::Context;
use crate::license::gate::{gate, requirements};
use crate::license::PRODUCT_URL;
use crate::ui::output;
use anyhow::Result;

/// Wallet management. Requires a tier with blockchain enabled.
pub fn wallet(ctx: &mut Context, create: bool, balance: bool) -> Result<()> {
    gate(&mut ctx.license, &requirements::WALLET).map_err(|denial| {
        Denied::new(denial, Some(format!("Upgrade at: {}", PRODUCT_URL)))
    })?;

    output::print("\nSolana Wallet Manager", ctx.verbosity);
    if create {
        output::debug("wallet creation requested", ctx.verbosity);
    }
    if balance {
        output::debug("balance check requested", ctx.verbosity);
    }
    output::print("Blockchain integration not yet implemented.", ctx.verbosity);
    Ok(())
}
