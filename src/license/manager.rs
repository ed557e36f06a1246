//! license::manager
//!
//! Tier resolution and run accounting.
//!
//! # Resolution
//!
//! | key supplied        | tier          | activation   |
//! |---------------------|---------------|--------------|
//! | none or empty       | Free          | `NoKey`      |
//! | valid `PRO_...`     | Pro           | `Activated`  |
//! | valid `ENT_...`     | Enterprise    | `Activated`  |
//! | anything else       | Free          | `Invalid`    |
//!
//! # Example
//!
//! ```
//! use terminal221b::license::{LicenseManager, LicenseTier};
//!
//! let mut manager = LicenseManager::from_key(None);
//! assert_eq!(manager.tier(), LicenseTier::Free);
//!
//! for _ in 0..5 {
//!     manager.try_acquire_run().unwrap();
//! }
//! assert!(manager.try_acquire_run().is_err());
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::key::LicenseKey;
use super::tier::{LicenseLimits, LicenseTier, Limit};
use super::usage::{Clock, SystemClock, UsageCounter};
use super::PRICING_URL;

/// Environment variable holding the license key.
pub const LICENSE_KEY_ENV: &str = "LICENSE_KEY";

/// Run quota exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuotaError {
    #[error("Daily limit reached ({used}/{limit} runs). Upgrade at {}", PRICING_URL)]
    DailyLimitReached { used: u32, limit: u32 },
}

/// How the tier was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "tier")]
pub enum Activation {
    /// No key supplied; Free tier.
    NoKey,
    /// A valid key unlocked a paid tier.
    Activated(LicenseTier),
    /// A key was supplied but failed validation; Free tier.
    Invalid,
}

impl Activation {
    /// One-line summary of the activation, if there is one to show.
    ///
    /// The Free tier box is rendered separately by the UI.
    pub fn headline(&self) -> Option<String> {
        match self {
            Activation::NoKey => None,
            Activation::Activated(LicenseTier::Enterprise) => {
                Some("✅ Enterprise License activated - Unlimited usage".to_string())
            }
            Activation::Activated(tier) => {
                let limits = tier.limits();
                Some(format!(
                    "✅ {} License activated - {} runs/day, {} agents",
                    tier.title(),
                    limits.max_runs_per_day,
                    limits.max_agents
                ))
            }
            Activation::Invalid => {
                Some("⚠️  Invalid license key. Falling back to Free Tier.".to_string())
            }
        }
    }

    /// Check if the Free tier notice should accompany this activation.
    pub fn shows_free_tier_notice(&self) -> bool {
        matches!(self, Activation::NoKey | Activation::Invalid)
    }
}

/// Snapshot of the license for display.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseStatus {
    pub tier: LicenseTier,
    pub activation: Activation,
    pub key_fingerprint: Option<String>,
    pub runs_today: u32,
    pub limits: LicenseLimits,
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tier {
            LicenseTier::Enterprise => write!(
                f,
                "License: {} | Runs today: {} | Unlimited",
                self.tier.title(),
                self.runs_today
            ),
            _ => write!(
                f,
                "License: {} | Runs: {}/{} | Agents: {}",
                self.tier.title(),
                self.runs_today,
                self.limits.max_runs_per_day,
                self.limits.max_agents
            ),
        }
    }
}

/// License state for one process.
///
/// Generic over the clock so rollover can be exercised in tests.
#[derive(Debug)]
pub struct LicenseManager<C: Clock = SystemClock> {
    tier: LicenseTier,
    key: Option<LicenseKey>,
    activation: Activation,
    usage: UsageCounter,
    clock: C,
}

impl LicenseManager<SystemClock> {
    /// Resolve the tier from a raw key using the system clock.
    pub fn from_key(raw: Option<&str>) -> Self {
        Self::with_clock(raw, SystemClock)
    }
}

impl<C: Clock> LicenseManager<C> {
    /// Resolve the tier from a raw key with the given clock.
    pub fn with_clock(raw: Option<&str>, clock: C) -> Self {
        let (tier, key, activation) = match raw.filter(|k| !k.is_empty()) {
            None => (LicenseTier::Free, None, Activation::NoKey),
            Some(raw) => match LicenseKey::parse(raw) {
                Ok(key) => {
                    let tier = key.tier();
                    (tier, Some(key), Activation::Activated(tier))
                }
                Err(_) => (LicenseTier::Free, None, Activation::Invalid),
            },
        };

        let usage = UsageCounter::new(clock.now());
        Self {
            tier,
            key,
            activation,
            usage,
            clock,
        }
    }

    /// The resolved tier.
    pub fn tier(&self) -> LicenseTier {
        self.tier
    }

    /// How the tier was resolved.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// The validated key, if any.
    pub fn key(&self) -> Option<&LicenseKey> {
        self.key.as_ref()
    }

    /// Limits of the resolved tier.
    pub fn limits(&self) -> &'static LicenseLimits {
        self.tier.limits()
    }

    /// Runs counted in the current window.
    pub fn runs_today(&self) -> u32 {
        self.usage.runs
    }

    /// The usage counter.
    pub fn usage(&self) -> &UsageCounter {
        &self.usage
    }

    /// Try to start a run.
    ///
    /// Rolls the counter over first if the day has elapsed, then counts the
    /// run if the tier's daily quota allows it. A denied attempt is not
    /// counted.
    ///
    /// # Errors
    ///
    /// [`QuotaError::DailyLimitReached`] when the quota is exhausted.
    pub fn try_acquire_run(&mut self) -> Result<(), QuotaError> {
        self.usage.roll_over(self.clock.now());

        let limit = self.limits().max_runs_per_day;
        if !limit.permits(self.usage.runs) {
            return Err(QuotaError::DailyLimitReached {
                used: self.usage.runs,
                limit: limit.get().unwrap_or_default(),
            });
        }

        self.usage.record();
        Ok(())
    }

    /// Runs left in the current window, or `None` when unlimited.
    pub fn remaining_runs(&self) -> Option<u32> {
        let runs = if self.usage.is_stale(self.clock.now()) {
            0
        } else {
            self.usage.runs
        };
        self.limits()
            .max_runs_per_day
            .get()
            .map(|limit| limit.saturating_sub(runs))
    }

    /// Check if blockchain features are available.
    pub fn can_use_blockchain(&self) -> bool {
        self.limits().blockchain_enabled
    }

    /// Maximum number of agents.
    pub fn max_agents(&self) -> Limit {
        self.limits().max_agents
    }

    /// Snapshot for display.
    pub fn status(&self) -> LicenseStatus {
        LicenseStatus {
            tier: self.tier,
            activation: self.activation,
            key_fingerprint: self.key.as_ref().map(LicenseKey::fingerprint),
            runs_today: self.usage.runs,
            limits: self.limits().clone(),
        }
    }
}
