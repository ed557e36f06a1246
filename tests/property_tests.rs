//! Property-based tests for license keys and the run quota.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use terminal221b::license::{
    is_valid_key, LicenseKey, LicenseManager, LicenseTier, Limit, ManualClock, MIN_KEY_LEN,
};

/// Strategy for key bodies of a given length range.
fn key_body(len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('A', 'Z'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for a valid tier prefix.
fn prefix() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("PRO_"), Just("ENT_")]
}

proptest! {
    #[test]
    fn long_enough_prefixed_keys_are_valid(
        prefix in prefix(),
        body in key_body(MIN_KEY_LEN - 4..64),
    ) {
        let raw = format!("{}{}", prefix, body);
        prop_assert!(is_valid_key(&raw));

        let key = LicenseKey::parse(&raw).unwrap();
        let expected = if prefix == "ENT_" {
            LicenseTier::Enterprise
        } else {
            LicenseTier::Pro
        };
        prop_assert_eq!(key.tier(), expected);
    }

    #[test]
    fn short_keys_are_invalid(prefix in prefix(), body in key_body(0..MIN_KEY_LEN - 4)) {
        let raw = format!("{}{}", prefix, body);
        prop_assert!(!is_valid_key(&raw));
    }

    #[test]
    fn keys_without_a_known_prefix_are_invalid(raw in "[a-z0-9_]{0,64}") {
        prop_assert!(!is_valid_key(&raw));
        let manager = LicenseManager::from_key(Some(&raw));
        prop_assert_eq!(manager.tier(), LicenseTier::Free);
    }

    #[test]
    fn redacted_display_never_contains_the_body(body in key_body(MIN_KEY_LEN..48)) {
        let raw = format!("PRO_{}", body);
        let key = LicenseKey::parse(&raw).unwrap();
        let shown = format!("{} {:?}", key, key);
        prop_assert!(!shown.contains(&body));
        prop_assert_eq!(key.fingerprint().len(), 12);
    }

    #[test]
    fn run_count_never_exceeds_the_daily_limit(
        use_pro in any::<bool>(),
        attempts in 0u32..250,
    ) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let raw = use_pro.then_some("PRO_12345678901234567890");
        let mut manager = LicenseManager::with_clock(raw, &clock);
        let Limit::Limited(limit) = manager.limits().max_runs_per_day else {
            unreachable!("finite tiers only");
        };

        let allowed = (0..attempts)
            .filter(|_| manager.try_acquire_run().is_ok())
            .count() as u32;

        prop_assert_eq!(allowed, attempts.min(limit));
        prop_assert!(manager.runs_today() <= limit);
        prop_assert_eq!(manager.remaining_runs(), Some(limit - manager.runs_today()));
    }

    #[test]
    fn rollover_only_after_the_window(hours in 0i64..72, used in 1u32..=5) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let mut manager = LicenseManager::with_clock(None, &clock);
        for _ in 0..used {
            manager.try_acquire_run().unwrap();
        }

        clock.advance(Duration::hours(hours) + Duration::minutes(1));
        let expected = if hours >= 24 { 5 } else { 5 - used };
        prop_assert_eq!(manager.remaining_runs(), Some(expected));
    }
}
