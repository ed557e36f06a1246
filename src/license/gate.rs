//! license::gate
//!
//! License gating for command execution.
//!
//! # Architecture
//!
//! Each command declares a [`RequirementSet`]. Gating checks the set
//! against the [`LicenseManager`] and either lets the command proceed or
//! returns a [`GateDenial`] describing what the tier is missing.
//!
//! Requirements are checked in declaration order and the first failure
//! stops gating. [`Requirement::RunQuota`] consumes a run when it passes.
//!
//! # Example
//!
//! ```
//! use terminal221b::license::gate::{gate, requirements, GateDenial};
//! use terminal221b::license::LicenseManager;
//!
//! let mut manager = LicenseManager::from_key(None);
//!
//! assert!(gate(&mut manager, &requirements::SESSION).is_ok());
//! assert!(matches!(
//!     gate(&mut manager, &requirements::WALLET),
//!     Err(GateDenial::BlockchainDisabled { .. })
//! ));
//! ```

use thiserror::Error;

use super::manager::{LicenseManager, QuotaError};
use super::tier::{LicenseLimits, LicenseTier};
use super::usage::Clock;

/// A single license requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// A run must be available in today's quota. Consumes the run.
    RunQuota,
    /// Blockchain features must be enabled for the tier.
    Blockchain,
}

/// Requirements for a command.
#[derive(Debug, Clone)]
pub struct RequirementSet {
    /// Required checks, in order.
    pub requirements: &'static [Requirement],
    /// Human-readable name for this requirement set.
    pub name: &'static str,
}

impl RequirementSet {
    /// Create a new requirement set.
    pub const fn new(name: &'static str, requirements: &'static [Requirement]) -> Self {
        Self { requirements, name }
    }

    /// Check if the set contains a requirement.
    pub fn contains(&self, requirement: Requirement) -> bool {
        self.requirements.contains(&requirement)
    }
}

/// Predefined requirement sets.
pub mod requirements {
    use super::*;

    /// Informational commands (agents, license status, config).
    pub const READ_ONLY: RequirementSet = RequirementSet::new("read-only", &[]);

    /// Commands that start a session (run, tui).
    pub const SESSION: RequirementSet = RequirementSet::new("session", &[Requirement::RunQuota]);

    /// Wallet management.
    pub const WALLET: RequirementSet = RequirementSet::new("wallet", &[Requirement::Blockchain]);
}

/// Why gating refused a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateDenial {
    #[error(transparent)]
    Quota(#[from] QuotaError),

    #[error("Blockchain features require Pro or Enterprise tier.")]
    BlockchainDisabled { tier: LicenseTier },

    #[error("{} tier only supports the {allowed} agent.", .tier.title())]
    AgentNotAvailable {
        tier: LicenseTier,
        requested: String,
        allowed: String,
    },
}

impl GateDenial {
    /// The requirement that failed, if the denial came from a requirement.
    pub fn requirement(&self) -> Option<Requirement> {
        match self {
            GateDenial::Quota(_) => Some(Requirement::RunQuota),
            GateDenial::BlockchainDisabled { .. } => Some(Requirement::Blockchain),
            GateDenial::AgentNotAvailable { .. } => None,
        }
    }
}

/// Check a requirement set against the license.
///
/// # Errors
///
/// The first failing requirement, as a [`GateDenial`].
pub fn gate<C: Clock>(
    manager: &mut LicenseManager<C>,
    set: &RequirementSet,
) -> Result<(), GateDenial> {
    for requirement in set.requirements {
        match requirement {
            Requirement::RunQuota => manager.try_acquire_run()?,
            Requirement::Blockchain => {
                if !manager.can_use_blockchain() {
                    return Err(GateDenial::BlockchainDisabled {
                        tier: manager.tier(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Check that an agent may be used under the given limits.
///
/// Single-agent tiers may only use `default_agent`.
pub fn check_agent(
    tier: LicenseTier,
    limits: &LicenseLimits,
    requested: &str,
    default_agent: &str,
) -> Result<(), GateDenial> {
    if limits.single_agent() && requested != default_agent {
        return Err(GateDenial::AgentNotAvailable {
            tier,
            requested: requested.to_string(),
            allowed: default_agent.to_string(),
        });
    }
    Ok(())
}
