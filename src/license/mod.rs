//! license
//!
//! License tiers, key validation, and daily run quotas.
//!
//! # Modules
//!
//! - [`tier`] - Tiers and their limit table
//! - [`key`] - Key format validation and classification
//! - [`usage`] - Daily run counter and clocks
//! - [`manager`] - Tier resolution and run accounting
//! - [`source`] - Key lookup (environment, secret store)
//! - [`gate`] - Per-command requirement checks
//!
//! # Invariants
//!
//! - The tier is Free unless a valid key was supplied
//! - The run counter never exceeds a finite daily limit
//! - Unlimited tiers always allow a run and still count it

pub mod gate;
pub mod key;
pub mod manager;
pub mod source;
pub mod tier;
pub mod usage;

pub use gate::{check_agent, gate, GateDenial, Requirement, RequirementSet};
pub use key::{is_valid_key, KeyError, LicenseKey, MIN_KEY_LEN};
pub use manager::{Activation, LicenseManager, LicenseStatus, QuotaError, LICENSE_KEY_ENV};
pub use source::{resolve_key, resolve_key_from_env, KeySource, ResolvedKey, LICENSE_SECRET_KEY};
pub use tier::{LicenseLimits, LicenseTier, Limit};
pub use usage::{Clock, ManualClock, SystemClock, UsageCounter};

/// Pricing page.
pub const PRICING_URL: &str = "https://bakerstreetproject221B.store/pricing";

/// Product page, used in upgrade hints.
pub const PRODUCT_URL: &str = "https://bakerstreetproject221B.store/terminal221b";

/// Sales contact.
pub const CONTACT_EMAIL: &str = "kiliaan@bakerstreetproject221B.store";
