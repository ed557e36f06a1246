//! agents command - List the built-in agents

use crate::agents::AgentKind;
use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

/// One listing line: name padded to 12, description, tier label.
pub(crate) fn agent_line(kind: AgentKind) -> String {
    format!(
        "  {:<12} {} ({})",
        kind.name(),
        kind.description(),
        kind.tier_label()
    )
}

/// List the built-in agents with the tier each needs.
pub fn agents(ctx: &Context) -> Result<()> {
    output::print("\nAvailable Agents:\n", ctx.verbosity);
    for kind in AgentKind::ALL {
        let line = agent_line(kind);
        if kind.available_to(ctx.license.tier()) {
            output::print(line, ctx.verbosity);
        } else {
            output::print(format!("{} [locked]", line), ctx.verbosity);
        }
    }
    Ok(())
}
