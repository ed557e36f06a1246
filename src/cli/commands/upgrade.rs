//! upgrade command - Show pricing and open the pricing page

use crate::cli::Context;
use crate::license::{LicenseTier, PRICING_URL};
use crate::ui::banner;
use crate::ui::output;
use anyhow::Result;

/// Print the tier comparison and open the pricing page.
///
/// The browser is only opened in interactive mode and without
/// `--no-browser`; otherwise the link is printed.
pub fn upgrade(ctx: &Context, no_browser: bool) -> Result<()> {
    let tier = ctx.license.tier();
    if tier == LicenseTier::Enterprise {
        output::print(
            "You are on the Enterprise tier. There is nothing to upgrade.",
            ctx.verbosity,
        );
        return Ok(());
    }

    output::print(banner::free_tier_box(), ctx.verbosity);

    if no_browser || !ctx.interactive {
        output::print(format!("Pricing: {}", PRICING_URL), ctx.verbosity);
        return Ok(());
    }

    output::print(format!("Opening {} ...", PRICING_URL), ctx.verbosity);
    if let Err(e) = open::that(PRICING_URL) {
        output::warn(format!("could not open a browser: {}", e), ctx.verbosity);
        output::print(format!("Pricing: {}", PRICING_URL), ctx.verbosity);
    }
    Ok(())
}
