//! ui::banner
//!
//! The startup banner, the license info block, and the Free tier box.

use std::fmt::Write as _;

use super::output::check_mark;
use crate::license::{LicenseLimits, LicenseTier, Limit, CONTACT_EMAIL, PRICING_URL, PRODUCT_URL};

/// Shown when the CLI runs without a subcommand.
pub const BANNER: &str = r"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║   ████████╗███████╗██████╗ ███╗   ███╗██╗███╗   ██╗ █████╗  ║
║   ╚══██╔══╝██╔════╝██╔══██╗████╗ ████║██║████╗  ██║██╔══██╗ ║
║      ██║   █████╗  ██████╔╝██╔████╔██║██║██╔██╗ ██║███████║ ║
║      ██║   ██╔══╝  ██╔══██╗██║╚██╔╝██║██║██║╚██╗██║██╔══██║ ║
║      ██║   ███████╗██║  ██║██║ ╚═╝ ██║██║██║ ╚████║██║  ██║ ║
║      ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝╚═╝╚═╝  ╚═══╝╚═╝  ╚═╝ ║
║                                                              ║
║              ██████╗ ██████╗  ██╗██████╗                     ║
║              ╚════██╗╚════██╗███║██╔══██╗                    ║
║               █████╔╝ █████╔╝╚██║██████╔╝                    ║
║              ██╔═══╝ ██╔═══╝  ██║██╔══██╗                    ║
║              ███████╗███████╗ ██║██████╔╝                    ║
║              ╚══════╝╚══════╝ ╚═╝╚═════╝                     ║
║                                                              ║
║         Polymathic Autonomous Organization (PAO)             ║
║         A sovereign, self-funding AI civilization            ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝
";

/// Inner width of the Free tier box.
const BOX_WIDTH: usize = 64;

/// Commands listed under the banner, with their one-line summaries.
pub const COMMAND_SUMMARY: &[(&str, &str)] = &[
    ("run", "Start an agent session"),
    ("tui", "Launch terminal UI"),
    ("agents", "List available agents"),
    ("wallet", "Manage Solana wallet (Pro+)"),
    ("license", "Show or change the active license"),
    ("upgrade", "Open the pricing page"),
];

/// Tier name and limits, one per line.
///
/// ```
/// use terminal221b::license::LicenseTier;
/// use terminal221b::ui::banner::license_info;
///
/// let info = license_info(LicenseTier::Enterprise);
/// assert!(info.starts_with("License Tier: ENTERPRISE\n"));
/// assert!(info.contains("  • Runs/day: Unlimited"));
/// ```
pub fn license_info(tier: LicenseTier) -> String {
    let limits = tier.limits();
    let mut out = String::new();
    let _ = writeln!(out, "License Tier: {}", tier.as_str().to_uppercase());
    if tier == LicenseTier::Free {
        let _ = writeln!(out, "Upgrade to Pro for more features: {}", PRODUCT_URL);
    }
    let _ = writeln!(out, "  • Runs/day: {}", limits.max_runs_per_day);
    let _ = writeln!(out, "  • Max agents: {}", limits.max_agents);
    let _ = write!(out, "  • Blockchain: {}", check_mark(limits.blockchain_enabled));
    out
}

/// The available-commands list shown under the banner.
pub fn command_summary() -> String {
    let mut out = String::from("Available commands:");
    for (name, summary) in COMMAND_SUMMARY {
        let _ = write!(out, "\n  {:<10}{}", name, summary);
    }
    let _ = write!(
        out,
        "\n\nRun {} --help for more options.",
        env!("CARGO_PKG_NAME")
    );
    out
}

fn plural(limit: Limit, one: &str, many: &str) -> String {
    match limit {
        Limit::Limited(1) => format!("1 {}", one),
        other => format!("{} {}", other, many),
    }
}

fn limits_line(limits: &LicenseLimits) -> String {
    let blockchain = if limits.blockchain_enabled {
        "Solana integration"
    } else {
        "No blockchain"
    };
    format!(
        "{} • {} • {}",
        plural(limits.max_runs_per_day, "run/day", "runs/day"),
        plural(limits.max_agents, "agent", "agents"),
        blockchain
    )
}

/// Box lines of `BOX_WIDTH` characters, two spaces of left padding.
fn boxed(title: &str, body: &[String]) -> String {
    let rule = "═".repeat(BOX_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "╔{}╗", rule);
    let _ = writeln!(out, "║{:^width$}║", title, width = BOX_WIDTH);
    let _ = writeln!(out, "╠{}╣", rule);
    for line in body {
        let _ = writeln!(out, "║  {:<width$}║", line, width = BOX_WIDTH - 2);
    }
    let _ = write!(out, "╚{}╝", rule);
    out
}

/// Notice shown when the Free tier is active.
pub fn free_tier_box() -> String {
    let body = vec![
        format!("Limits: {}", limits_line(LicenseTier::Free.limits())),
        String::new(),
        "Upgrade to Pro: $9/month".to_string(),
        format!("  → {}", limits_line(LicenseTier::Pro.limits())),
        String::new(),
        "Enterprise: Contact us for custom limits".to_string(),
        "  → Unlimited • Custom agents • SLA & support".to_string(),
        String::new(),
        PRICING_URL.to_string(),
        CONTACT_EMAIL.to_string(),
    ];
    boxed("FREE TIER ACTIVE", &body)
}
