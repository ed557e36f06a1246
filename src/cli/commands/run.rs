//! run command - Start an agent session
//!
//! Gating order: the run quota is consumed first, then the agent is checked
//! against the tier. A Free tier user asking for a Pro agent therefore still
//! uses up one of the day's runs.

use crate::agents::{AgentContext, AgentError, AgentKind, AgentSession, BuiltinAgent, DEFAULT_AGENT};
use crate::cli::commands::Denied;
use crate::cli::Context;
use crate::license::gate::{check_agent, gate, requirements};
use crate::license::{LicenseTier, PRODUCT_URL};
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Start a session with `agent`, or the configured default.
pub fn run(ctx: &mut Context, agent: Option<AgentKind>, prompt: Option<&str>) -> Result<()> {
    let agent = agent.unwrap_or_else(|| ctx.config.default_agent());
    let tier = ctx.license.tier();

    if let Err(denial) = gate(&mut ctx.license, &requirements::SESSION) {
        let hint = (tier == LicenseTier::Free)
            .then(|| format!("Upgrade to Pro for more runs: {}", PRODUCT_URL));
        return Err(Denied::new(denial, hint).into());
    }
    output::debug(
        format!("run {} of {} today", ctx.license.runs_today(), ctx.license.limits().max_runs_per_day),
        ctx.verbosity,
    );

    check_agent(tier, ctx.license.limits(), agent.name(), DEFAULT_AGENT.name()).map_err(|denial| {
        Denied::new(
            denial,
            Some(format!("Upgrade to Pro for all agents: {}", PRODUCT_URL)),
        )
    })?;

    let context =
        AgentContext::for_limits(ctx.license.limits()).with_temperature(ctx.config.temperature());
    let mut session = AgentSession::new(BuiltinAgent::new(agent), context)
        .context("Failed to start agent session")?;
    output::debug(format!("session {}", session.id()), ctx.verbosity);

    output::print(format!("\nStarting {} agent...", agent), ctx.verbosity);

    if let Some(prompt) = prompt {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime")?;
        match runtime.block_on(session.execute(prompt)) {
            Ok(result) => output::print(result.output, ctx.verbosity),
            Err(AgentError::NotImplemented(_)) => not_implemented(ctx),
            Err(e) => return Err(anyhow::Error::new(e).context("Agent run failed")),
        }
    } else {
        not_implemented(ctx);
    }

    Ok(())
}

fn not_implemented(ctx: &Context) {
    output::print("Agent system not yet implemented.", ctx.verbosity);
}
