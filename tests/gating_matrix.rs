//! Gating matrix tests.
//!
//! Each tier is checked against each requirement set through the public
//! library API, with a manual clock standing in for wall time so the daily
//! rollover can be exercised.
//!
//! # Test Categories
//!
//! 1. **Read-Only** - Never denied, never consumes a run
//! 2. **Session** - Consumes a run; denied once the quota is spent
//! 3. **Wallet** - Blockchain tiers only
//! 4. **Agent selection** - Single-agent tiers pinned to the default agent
//! 5. **Rollover** - Quota restored after the window elapses

use chrono::{Duration, TimeZone, Utc};

use terminal221b::agents::{AgentKind, DEFAULT_AGENT};
use terminal221b::license::gate::requirements;
use terminal221b::license::{
    check_agent, gate, GateDenial, LicenseManager, LicenseTier, ManualClock, QuotaError,
    Requirement,
};

const PRO_KEY: &str = "PRO_12345678901234567890";
const ENT_KEY: &str = "ENT_12345678901234567890";

// =============================================================================
// Test Fixtures
// =============================================================================

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap())
}

fn key_for(tier: LicenseTier) -> Option<&'static str> {
    match tier {
        LicenseTier::Free => None,
        LicenseTier::Pro => Some(PRO_KEY),
        LicenseTier::Enterprise => Some(ENT_KEY),
    }
}

fn manager(tier: LicenseTier, clock: &ManualClock) -> LicenseManager<&ManualClock> {
    let manager = LicenseManager::with_clock(key_for(tier), clock);
    assert_eq!(manager.tier(), tier);
    manager
}

/// Spend `n` session runs, asserting each one is allowed.
fn spend(manager: &mut LicenseManager<&ManualClock>, n: u32) {
    for i in 0..n {
        assert!(
            gate(manager, &requirements::SESSION).is_ok(),
            "run {} should be allowed",
            i + 1
        );
    }
}

// =============================================================================
// Read-Only
// =============================================================================

mod read_only {
    use super::*;

    #[test]
    fn allowed_for_every_tier_without_consuming_runs() {
        let clock = clock();
        for tier in LicenseTier::ALL {
            let mut m = manager(tier, &clock);
            for _ in 0..10 {
                assert!(gate(&mut m, &requirements::READ_ONLY).is_ok());
            }
            assert_eq!(m.runs_today(), 0, "{} consumed runs", tier);
        }
    }

    #[test]
    fn allowed_when_quota_exhausted() {
        let clock = clock();
        let mut m = manager(LicenseTier::Free, &clock);
        spend(&mut m, 5);
        assert!(gate(&mut m, &requirements::READ_ONLY).is_ok());
    }
}

// =============================================================================
// Session
// =============================================================================

mod session {
    use super::*;

    #[test]
    fn free_tier_allows_five_runs() {
        let clock = clock();
        let mut m = manager(LicenseTier::Free, &clock);
        spend(&mut m, 5);

        let denial = gate(&mut m, &requirements::SESSION).unwrap_err();
        assert_eq!(
            denial,
            GateDenial::Quota(QuotaError::DailyLimitReached { used: 5, limit: 5 })
        );
        assert_eq!(denial.requirement(), Some(Requirement::RunQuota));
        assert_eq!(m.runs_today(), 5);
        assert_eq!(m.remaining_runs(), Some(0));
    }

    #[test]
    fn denial_message_names_usage() {
        let clock = clock();
        let mut m = manager(LicenseTier::Free, &clock);
        spend(&mut m, 5);
        let message = gate(&mut m, &requirements::SESSION)
            .unwrap_err()
            .to_string();
        assert!(message.starts_with("Daily limit reached (5/5 runs)."));
    }

    #[test]
    fn pro_tier_allows_one_hundred_runs() {
        let clock = clock();
        let mut m = manager(LicenseTier::Pro, &clock);
        spend(&mut m, 100);
        assert!(gate(&mut m, &requirements::SESSION).is_err());
        assert_eq!(m.runs_today(), 100);
    }

    #[test]
    fn enterprise_is_never_denied_but_still_counts() {
        let clock = clock();
        let mut m = manager(LicenseTier::Enterprise, &clock);
        spend(&mut m, 1_000);
        assert_eq!(m.runs_today(), 1_000);
        assert_eq!(m.remaining_runs(), None);
    }

    #[test]
    fn invalid_key_is_free() {
        let clock = clock();
        let mut m = LicenseManager::with_clock(Some("ENT_tooshort"), &clock);
        assert_eq!(m.tier(), LicenseTier::Free);
        spend(&mut m, 5);
        assert!(gate(&mut m, &requirements::SESSION).is_err());
    }
}

// =============================================================================
// Wallet
// =============================================================================

mod wallet {
    use super::*;

    #[test]
    fn denied_on_free() {
        let clock = clock();
        let mut m = manager(LicenseTier::Free, &clock);
        let denial = gate(&mut m, &requirements::WALLET).unwrap_err();
        assert_eq!(
            denial,
            GateDenial::BlockchainDisabled {
                tier: LicenseTier::Free
            }
        );
        assert_eq!(denial.requirement(), Some(Requirement::Blockchain));
    }

    #[test]
    fn allowed_on_paid_tiers() {
        let clock = clock();
        for tier in [LicenseTier::Pro, LicenseTier::Enterprise] {
            let mut m = manager(tier, &clock);
            assert!(gate(&mut m, &requirements::WALLET).is_ok(), "{}", tier);
            assert_eq!(m.runs_today(), 0);
        }
    }
}

// =============================================================================
// Agent selection
// =============================================================================

mod agent_selection {
    use super::*;

    fn check(tier: LicenseTier, kind: AgentKind) -> Result<(), GateDenial> {
        check_agent(tier, tier.limits(), kind.name(), DEFAULT_AGENT.name())
    }

    #[test]
    fn free_tier_only_gets_the_default_agent() {
        for kind in AgentKind::ALL {
            let result = check(LicenseTier::Free, kind);
            if kind == DEFAULT_AGENT {
                assert!(result.is_ok());
            } else {
                let denial = result.unwrap_err();
                assert_eq!(
                    denial.to_string(),
                    "Free tier only supports the analyst agent."
                );
                assert_eq!(denial.requirement(), None);
            }
        }
    }

    #[test]
    fn paid_tiers_get_every_agent() {
        for tier in [LicenseTier::Pro, LicenseTier::Enterprise] {
            for kind in AgentKind::ALL {
                assert!(check(tier, kind).is_ok(), "{} / {}", tier, kind);
            }
        }
    }

    #[test]
    fn listing_availability_matches_gating() {
        for tier in LicenseTier::ALL {
            for kind in AgentKind::ALL {
                assert_eq!(kind.available_to(tier), check(tier, kind).is_ok());
            }
        }
    }
}

// =============================================================================
// Rollover
// =============================================================================

mod rollover {
    use super::*;

    #[test]
    fn quota_restored_after_a_day() {
        let clock = clock();
        let mut m = manager(LicenseTier::Free, &clock);
        spend(&mut m, 5);
        assert!(gate(&mut m, &requirements::SESSION).is_err());

        clock.advance(Duration::hours(24) + Duration::seconds(1));
        assert_eq!(m.remaining_runs(), Some(5));
        spend(&mut m, 5);
        assert_eq!(m.runs_today(), 5);
    }

    #[test]
    fn exactly_one_day_is_not_enough() {
        let clock = clock();
        let mut m = manager(LicenseTier::Free, &clock);
        spend(&mut m, 5);

        clock.advance(Duration::hours(24));
        assert!(gate(&mut m, &requirements::SESSION).is_err());
    }

    #[test]
    fn window_restarts_at_the_rollover() {
        let clock = clock();
        let mut m = manager(LicenseTier::Free, &clock);
        spend(&mut m, 1);

        clock.advance(Duration::hours(30));
        spend(&mut m, 1);
        let reset_at = m.usage().last_reset;

        clock.advance(Duration::hours(23));
        spend(&mut m, 4);
        assert!(gate(&mut m, &requirements::SESSION).is_err());
        assert_eq!(m.usage().last_reset, reset_at);
    }

    #[test]
    fn denied_attempts_do_not_count() {
        let clock = clock();
        let mut m = manager(LicenseTier::Free, &clock);
        spend(&mut m, 5);
        for _ in 0..3 {
            assert!(gate(&mut m, &requirements::SESSION).is_err());
        }
        assert_eq!(m.runs_today(), 5);
    }
}
