//! tui command - Launch the terminal UI

use crate::cli::commands::Denied;
use crate::cli::Context;
use crate::license::gate::{gate, requirements};
use crate::ui::output;
use anyhow::Result;

/// Launch the TUI. Counts as a run.
pub fn tui(ctx: &mut Context) -> Result<()> {
    gate(&mut ctx.license, &requirements::SESSION).map_err(|denial| Denied::new(denial, None))?;

    output::print("\nLaunching Terminal221b TUI...", ctx.verbosity);
    output::print("TUI not yet implemented.", ctx.verbosity);
    Ok(())
}
