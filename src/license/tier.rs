//! license::tier
//!
//! License tiers and their feature limits.
//!
//! # Limit Table
//!
//! | tier       | runs/day  | tokens/run | agents    | blockchain |
//! |------------|-----------|------------|-----------|------------|
//! | Free       | 5         | 1000       | 1         | no         |
//! | Pro        | 100       | 10000      | 3         | yes        |
//! | Enterprise | unlimited | unlimited  | unlimited | yes        |
//!
//! # Example
//!
//! ```
//! use terminal221b::license::{Limit, LicenseTier};
//!
//! let limits = LicenseTier::Pro.limits();
//! assert_eq!(limits.max_runs_per_day, Limit::Limited(100));
//! assert!(limits.blockchain_enabled);
//! assert!(LicenseTier::Enterprise.limits().max_agents.is_unlimited());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A license tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseTier {
    /// Default tier when no valid key is present.
    Free,
    /// Paid individual tier (`PRO_` keys).
    Pro,
    /// Organisation tier (`ENT_` keys).
    Enterprise,
}

impl LicenseTier {
    /// All tiers, lowest first.
    pub const ALL: [LicenseTier; 3] = [LicenseTier::Free, LicenseTier::Pro, LicenseTier::Enterprise];

    /// Lowercase identifier (`free`, `pro`, `enterprise`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseTier::Free => "free",
            LicenseTier::Pro => "pro",
            LicenseTier::Enterprise => "enterprise",
        }
    }

    /// Title-case name used in status lines.
    pub fn title(&self) -> &'static str {
        match self {
            LicenseTier::Free => "Free",
            LicenseTier::Pro => "Pro",
            LicenseTier::Enterprise => "Enterprise",
        }
    }

    /// The feature limits for this tier.
    pub fn limits(&self) -> &'static LicenseLimits {
        match self {
            LicenseTier::Free => &FREE_LIMITS,
            LicenseTier::Pro => &PRO_LIMITS,
            LicenseTier::Enterprise => &ENTERPRISE_LIMITS,
        }
    }
}

impl fmt::Display for LicenseTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quota that is either finite or unlimited.
///
/// Serializes as a number, or `null` when unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Limit {
    /// At most this many.
    Limited(u32),
    /// No cap.
    Unlimited,
}

impl Limit {
    /// Check if this limit has no cap.
    pub fn is_unlimited(&self) -> bool {
        matches!(self, Limit::Unlimited)
    }

    /// The finite value, if any.
    pub fn get(&self) -> Option<u32> {
        match self {
            Limit::Limited(n) => Some(*n),
            Limit::Unlimited => None,
        }
    }

    /// Check if one more unit may be used after `used` have been consumed.
    ///
    /// ```
    /// use terminal221b::license::Limit;
    ///
    /// assert!(Limit::Limited(5).permits(4));
    /// assert!(!Limit::Limited(5).permits(5));
    /// assert!(Limit::Unlimited.permits(u32::MAX));
    /// ```
    pub fn permits(&self, used: u32) -> bool {
        match self {
            Limit::Limited(n) => used < *n,
            Limit::Unlimited => true,
        }
    }

    /// Check if `amount` fits within the limit.
    pub fn allows(&self, amount: u32) -> bool {
        match self {
            Limit::Limited(n) => amount <= *n,
            Limit::Unlimited => true,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Limited(n) => write!(f, "{}", n),
            Limit::Unlimited => f.write_str("Unlimited"),
        }
    }
}

/// Feature limits granted by a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseLimits {
    /// Runs allowed per day.
    pub max_runs_per_day: Limit,
    /// Token budget for a single run.
    pub max_tokens_per_run: Limit,
    /// Agents that may be used.
    pub max_agents: Limit,
    /// Whether wallet and other blockchain features are available.
    pub blockchain_enabled: bool,
    /// Whether the tier includes priority support.
    pub priority_support: bool,
}

impl LicenseLimits {
    /// Check if only a single agent is permitted.
    pub fn single_agent(&self) -> bool {
        self.max_agents == Limit::Limited(1)
    }
}

const FREE_LIMITS: LicenseLimits = LicenseLimits {
    max_runs_per_day: Limit::Limited(5),
    max_tokens_per_run: Limit::Limited(1000),
    max_agents: Limit::Limited(1),
    blockchain_enabled: false,
    priority_support: false,
};

const PRO_LIMITS: LicenseLimits = LicenseLimits {
    max_runs_per_day: Limit::Limited(100),
    max_tokens_per_run: Limit::Limited(10_000),
    max_agents: Limit::Limited(3),
    blockchain_enabled: true,
    priority_support: true,
};

const ENTERPRISE_LIMITS: LicenseLimits = LicenseLimits {
    max_runs_per_day: Limit::Unlimited,
    max_tokens_per_run: Limit::Unlimited,
    max_agents: Limit::Unlimited,
    blockchain_enabled: true,
    priority_support: true,
};
