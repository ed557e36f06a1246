//! Bare invocation: version line, license info, and the overview screen.

use crate::cli::Context;
use crate::ui::banner;
use crate::ui::output;
use anyhow::Result;

/// `Terminal221b v<version>`
pub fn version_line() -> String {
    format!("Terminal221b v{}", env!("CARGO_PKG_VERSION"))
}

/// Print the tier and its limits.
pub fn license_info(ctx: &Context) -> Result<()> {
    output::print(
        format!("\n{}", banner::license_info(ctx.license.tier())),
        ctx.verbosity,
    );
    Ok(())
}

/// Banner, license info, and the available commands.
pub fn overview(ctx: &Context) -> Result<()> {
    output::print(banner::BANNER, ctx.verbosity);
    license_info(ctx)?;
    output::print(
        format!("\n{}", banner::command_summary()),
        ctx.verbosity,
    );
    Ok(())
}
