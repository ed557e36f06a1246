//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version` / `-v`: Show version
//! - `--license-info` / `-l`: Show license tier and limits
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};

use crate::agents::AgentKind;

/// Terminal221b - Polymathic Autonomous Organization (PAO)
///
/// A multi-agent AI workbench with license-tier gating, a terminal UI and
/// Solana wallet integration.
#[derive(Parser, Debug)]
#[command(name = "terminal221b")]
#[command(author, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show version information
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Show license information
    #[arg(short = 'l', long = "license-info")]
    pub license_info: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Explicit interactivity from flags, if any.
    ///
    /// `None` means the caller decides (config default and TTY check).
    pub fn interactive_override(&self) -> Option<bool> {
        if self.interactive_flag {
            Some(true)
        } else if self.no_interactive || self.quiet {
            Some(false)
        } else {
            None
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start an agent session
    #[command(
        name = "run",
        after_help = "\
EXAMPLES:
    # Run the default agent
    terminal221b run

    # Pick an agent and give it a prompt (Pro+ for agents other than analyst)
    terminal221b run --agent engineer --prompt \"Design a cache\""
    )]
    Run {
        /// Agent to run (defaults to agents.default, then analyst)
        #[arg(short, long, value_enum)]
        agent: Option<AgentKind>,

        /// Initial prompt for the agent
        #[arg(short, long)]
        prompt: Option<String>,
    },

    /// Launch the terminal UI
    #[command(name = "tui")]
    Tui,

    /// List available agents
    #[command(name = "agents")]
    Agents,

    /// Manage Solana wallet (Pro+ tier)
    #[command(name = "wallet")]
    Wallet {
        /// Create a new Solana wallet
        #[arg(long)]
        create: bool,

        /// Check wallet balance
        #[arg(long)]
        balance: bool,
    },

    /// Show or change the active license
    #[command(
        name = "license",
        after_help = "\
EXAMPLES:
    # Show the active tier and today's usage
    terminal221b license

    # Store a key (prompts with masked input when --key is omitted)
    terminal221b license activate --key PRO_XXXXXXXXXXXXXXXX

    # Forget the stored key
    terminal221b license deactivate

KEY LOOKUP:
    $LICENSE_KEY takes precedence over a stored key."
    )]
    License {
        #[command(subcommand)]
        action: Option<LicenseAction>,
    },

    /// Show pricing and open the pricing page
    #[command(name = "upgrade")]
    Upgrade {
        /// Print the pricing link without opening a browser
        #[arg(long)]
        no_browser: bool,
    },

    /// Get, set, or list configuration values
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// License subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum LicenseAction {
    /// Show tier, key source and usage
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate and store a license key
    Activate {
        /// License key (prompted for when omitted)
        #[arg(long)]
        key: Option<String>,
    },
    /// Remove the stored license key
    Deactivate,
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
