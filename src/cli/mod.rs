//! cli
//!
//! Command-line interface layer for Terminal221b.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and resolve the license once per process
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It builds a [`Context`] holding the resolved
//! license and config, then dispatches to [`commands`]. Commands that start
//! work go through [`crate::license::gate`] before doing anything.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::core::paths::AppPaths;
use crate::license::{resolve_key_from_env, KeySource, LicenseManager};
use crate::secrets::{self, SecretStore};
use crate::ui::banner;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;

/// Everything a command handler needs.
pub struct Context {
    pub verbosity: Verbosity,
    pub interactive: bool,
    /// Data root; `None` when no home directory can be determined.
    pub paths: Option<AppPaths>,
    pub config: Config,
    pub license: LicenseManager,
    /// Where the license key came from.
    pub key_source: KeySource,
}

impl Context {
    /// Build the context: paths, config, then the license.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);

        let paths = AppPaths::discover();
        match &paths {
            Some(p) => output::debug(format!("data root: {}", p.root().display()), verbosity),
            None => output::warn("cannot determine home directory", verbosity),
        }

        let config = Config::load(paths.as_ref()).context("Failed to load config")?;
        if let Some(path) = config.loaded_from() {
            output::debug(format!("config: {}", path.display()), verbosity);
        }

        let interactive = cli
            .interactive_override()
            .unwrap_or_else(|| config.interactive() && prompts::stdin_is_terminal());

        let (license, key_source) = Self::resolve_license(&config, paths.as_ref(), verbosity);
        output::debug(
            format!("license: {} (key from {})", license.tier(), key_source),
            verbosity,
        );

        Ok(Self {
            verbosity,
            interactive,
            paths,
            config,
            license,
            key_source,
        })
    }

    /// Resolve the license key and build the manager.
    ///
    /// An unusable secret store is not fatal: the Free tier still works.
    fn resolve_license(
        config: &Config,
        paths: Option<&AppPaths>,
        verbosity: Verbosity,
    ) -> (LicenseManager, KeySource) {
        let store = match secrets::create_store(config.secrets_provider(), paths) {
            Ok(store) => Some(store),
            Err(e) => {
                output::debug(format!("secret store unavailable: {}", e), verbosity);
                None
            }
        };

        match resolve_key_from_env(store.as_deref()) {
            Ok(resolved) => (
                LicenseManager::from_key(resolved.raw.as_deref()),
                resolved.source,
            ),
            Err(e) => {
                output::warn(format!("cannot read stored license key: {}", e), verbosity);
                (LicenseManager::from_key(None), KeySource::None)
            }
        }
    }

    /// Open the configured secret store.
    pub fn secret_store(&self) -> Result<Box<dyn SecretStore>> {
        secrets::create_store(self.config.secrets_provider(), self.paths.as_ref())
            .context("Failed to initialize secret store")
    }
}

/// Print the activation headline and, for the Free tier, the upgrade box.
fn announce_activation(ctx: &Context) {
    let activation = ctx.license.activation();
    if let Some(headline) = activation.headline() {
        output::notice(headline, ctx.verbosity);
    }
    if activation.shows_free_tier_notice() {
        output::notice(banner::free_tier_box(), ctx.verbosity);
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if cli.version {
        println!("{}", commands::version_line());
        return Ok(());
    }

    let mut ctx = Context::from_cli(&cli)?;
    announce_activation(&ctx);

    if cli.license_info {
        return commands::license_info(&ctx);
    }

    match cli.command {
        Some(command) => commands::dispatch(command, &mut ctx),
        None => commands::overview(&ctx),
    }
}

/// Print a failed run's error, plus any hint attached to it.
pub fn report_error(err: &anyhow::Error) {
    output::error(format!("{:#}", err));
    if let Some(hint) = err
        .downcast_ref::<commands::Denied>()
        .and_then(|d| d.hint.as_deref())
    {
        output::hint(hint);
    }
}
