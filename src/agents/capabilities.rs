//! agents::capabilities
//!
//! Agent capabilities granted by a license tier.
//!
//! # Architecture
//!
//! A capability either exists or does not. The tier's limits determine the
//! [`CapabilitySet`] handed to an agent; each agent declares the
//! capabilities it requires, and a session refuses to start when any are
//! missing.
//!
//! # Example
//!
//! ```
//! use terminal221b::agents::capabilities::{AgentCapability, CapabilitySet};
//! use terminal221b::license::LicenseTier;
//!
//! let caps = CapabilitySet::for_limits(LicenseTier::Free.limits());
//! assert!(caps.has(&AgentCapability::DataAnalysis));
//! assert!(!caps.has(&AgentCapability::BlockchainOps));
//!
//! let missing = caps.missing(&[
//!     AgentCapability::TextGeneration,
//!     AgentCapability::CodeGeneration,
//! ]);
//! assert_eq!(missing, vec![AgentCapability::CodeGeneration]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::license::LicenseLimits;

/// Something an agent may be permitted to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentCapability {
    TextGeneration,
    CodeGeneration,
    DataAnalysis,
    ImageGeneration,
    BlockchainOps,
    MultiAgent,
}

impl AgentCapability {
    /// All capabilities.
    pub const ALL: [AgentCapability; 6] = [
        AgentCapability::TextGeneration,
        AgentCapability::CodeGeneration,
        AgentCapability::DataAnalysis,
        AgentCapability::ImageGeneration,
        AgentCapability::BlockchainOps,
        AgentCapability::MultiAgent,
    ];

    /// Snake-case identifier.
    ///
    /// ```
    /// use terminal221b::agents::capabilities::AgentCapability;
    ///
    /// assert_eq!(AgentCapability::BlockchainOps.as_str(), "blockchain_ops");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentCapability::TextGeneration => "text_generation",
            AgentCapability::CodeGeneration => "code_generation",
            AgentCapability::DataAnalysis => "data_analysis",
            AgentCapability::ImageGeneration => "image_generation",
            AgentCapability::BlockchainOps => "blockchain_ops",
            AgentCapability::MultiAgent => "multi_agent",
        }
    }
}

impl fmt::Display for AgentCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of capabilities.
///
/// Ordered so iteration and serialization are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    capabilities: BTreeSet<AgentCapability>,
}

impl CapabilitySet {
    /// Create an empty capability set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a capability set with the given capabilities.
    pub fn with<I: IntoIterator<Item = AgentCapability>>(iter: I) -> Self {
        Self {
            capabilities: iter.into_iter().collect(),
        }
    }

    /// Capabilities granted by a tier's limits.
    ///
    /// - Text generation and data analysis: always
    /// - Code generation, image generation, multi-agent: when more than
    ///   one agent is allowed
    /// - Blockchain operations: when blockchain is enabled
    pub fn for_limits(limits: &LicenseLimits) -> Self {
        let mut caps = Self::with([AgentCapability::TextGeneration, AgentCapability::DataAnalysis]);
        if !limits.single_agent() {
            caps.insert(AgentCapability::CodeGeneration);
            caps.insert(AgentCapability::ImageGeneration);
            caps.insert(AgentCapability::MultiAgent);
        }
        if limits.blockchain_enabled {
            caps.insert(AgentCapability::BlockchainOps);
        }
        caps
    }

    /// Insert a capability into the set.
    pub fn insert(&mut self, cap: AgentCapability) {
        self.capabilities.insert(cap);
    }

    /// Remove a capability from the set.
    pub fn remove(&mut self, cap: &AgentCapability) -> bool {
        self.capabilities.remove(cap)
    }

    /// Check if a capability is present.
    pub fn has(&self, cap: &AgentCapability) -> bool {
        self.capabilities.contains(cap)
    }

    /// Check if all given capabilities are present.
    ///
    /// Returns true if the slice is empty.
    pub fn has_all(&self, caps: &[AgentCapability]) -> bool {
        caps.iter().all(|c| self.capabilities.contains(c))
    }

    /// Get the capabilities that are missing from the required set.
    ///
    /// Preserves the order of `required`.
    pub fn missing(&self, required: &[AgentCapability]) -> Vec<AgentCapability> {
        required
            .iter()
            .filter(|c| !self.capabilities.contains(*c))
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AgentCapability> {
        self.capabilities.iter()
    }
}

impl FromIterator<AgentCapability> for CapabilitySet {
    fn from_iter<T: IntoIterator<Item = AgentCapability>>(iter: T) -> Self {
        Self::with(iter)
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = &'a AgentCapability;
    type IntoIter = std::collections::btree_set::Iter<'a, AgentCapability>;

    fn into_iter(self) -> Self::IntoIter {
        self.capabilities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::LicenseTier;

    mod capability {
        use super::*;

        #[test]
        fn identifiers_match_serde() {
            for cap in AgentCapability::ALL {
                let json = serde_json::to_string(&cap).unwrap();
                assert_eq!(json, format!("\"{}\"", cap.as_str()));
            }
        }
    }

    mod set {
        use super::*;

        #[test]
        fn empty_has_all_of_nothing() {
            let caps = CapabilitySet::new();
            assert!(caps.is_empty());
            assert!(caps.has_all(&[]));
        }

        #[test]
        fn insert_and_remove() {
            let mut caps = CapabilitySet::new();
            caps.insert(AgentCapability::MultiAgent);
            assert!(caps.has(&AgentCapability::MultiAgent));
            assert!(caps.remove(&AgentCapability::MultiAgent));
            assert!(!caps.remove(&AgentCapability::MultiAgent));
        }

        #[test]
        fn missing_preserves_order() {
            let caps = CapabilitySet::with([AgentCapability::TextGeneration]);
            let missing = caps.missing(&[
                AgentCapability::MultiAgent,
                AgentCapability::TextGeneration,
                AgentCapability::CodeGeneration,
            ]);
            assert_eq!(
                missing,
                vec![AgentCapability::MultiAgent, AgentCapability::CodeGeneration]
            );
        }

        #[test]
        fn collect_from_iterator() {
            let caps: CapabilitySet = AgentCapability::ALL.into_iter().collect();
            assert_eq!(caps.len(), 6);
        }
    }

    mod tiers {
        use super::*;

        #[test]
        fn free_tier_basics_only() {
            let caps = CapabilitySet::for_limits(LicenseTier::Free.limits());
            assert_eq!(
                caps,
                CapabilitySet::with([
                    AgentCapability::TextGeneration,
                    AgentCapability::DataAnalysis
                ])
            );
        }

        #[test]
        fn pro_tier_everything() {
            let caps = CapabilitySet::for_limits(LicenseTier::Pro.limits());
            assert!(caps.has_all(&AgentCapability::ALL));
        }

        #[test]
        fn enterprise_tier_everything() {
            let caps = CapabilitySet::for_limits(LicenseTier::Enterprise.limits());
            assert!(caps.has_all(&AgentCapability::ALL));
        }
    }
}
