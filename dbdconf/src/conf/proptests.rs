//! Property-based tests for the configuration editor.

use proptest::prelude::*;
use tempfile::TempDir;

use super::editor::ConfEditor;
use super::token::ConfigToken;
use super::validate::check_value;

// Strategy for valid retention durations
fn duration_strategy() -> impl Strategy<Value = String> {
    (1u32..=9999, prop_oneof!["hour", "day", "month"])
        .prop_map(|(n, unit)| format!("{n}{unit}"))
}

// Strategy for valid port strings (1-5 digits, range deliberately unchecked)
fn port_strategy() -> impl Strategy<Value = String> {
    (0u32..=99999).prop_map(|n| n.to_string())
}

// Strategy for host-like text values
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9.-]{0,30}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Every validator-accepted assignment survives dump() + load() with the
    // getter returning a semantically equal value.
    #[test]
    fn round_trip_preserves_accepted_values(
        host in text_strategy(),
        port in port_strategy(),
        purge in duration_strategy(),
        track in any::<bool>(),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("slurmdbd.conf");

        let mut editor = ConfEditor::open(&path).unwrap();
        editor.set(ConfigToken::StorageHost, host.as_str()).unwrap();
        editor.set_raw(ConfigToken::StoragePort, port.as_str()).unwrap();
        editor.set(ConfigToken::PurgeJobAfter, purge.as_str()).unwrap();
        editor.set(ConfigToken::TrackWCKey, track).unwrap();
        editor.dump().unwrap();

        let reloaded = ConfEditor::open(&path).unwrap();
        prop_assert_eq!(reloaded.get_raw(ConfigToken::StorageHost), Some(host.as_str()));
        prop_assert_eq!(reloaded.get_raw(ConfigToken::StoragePort), Some(port.as_str()));
        prop_assert_eq!(reloaded.get_raw(ConfigToken::PurgeJobAfter), Some(purge.as_str()));
        prop_assert_eq!(reloaded.get_bool(ConfigToken::TrackWCKey), Some(track));
    }

    // Port validation is digit-count only: up to five digits pass, more fail.
    #[test]
    fn port_validator_checks_digit_count_not_range(n in 0u64..=9_999_999) {
        let value = n.to_string();
        let result = check_value(ConfigToken::DbdPort, &value);
        if value.len() <= 5 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
        }
    }

    // A rejected set leaves the prior value observable.
    #[test]
    fn rejected_set_leaves_state_unchanged(
        valid in duration_strategy(),
        bogus in "[a-z]{1,8}",
    ) {
        let dir = TempDir::new().unwrap();
        let mut editor = ConfEditor::open(dir.path().join("slurmdbd.conf")).unwrap();
        editor.set(ConfigToken::PurgeJobAfter, valid.as_str()).unwrap();

        // `bogus` has no digits and no unit suffix, so it cannot validate.
        prop_assert!(editor.set(ConfigToken::PurgeJobAfter, format!("{bogus}!").as_str()).is_err());
        prop_assert_eq!(editor.get_raw(ConfigToken::PurgeJobAfter), Some(valid.as_str()));
    }

    // Comma lists round-trip element-for-element.
    #[test]
    fn list_join_split_round_trip(elements in prop::collection::vec("[a-z_]{1,10}", 1..5)) {
        let dir = TempDir::new().unwrap();
        let mut editor = ConfEditor::open(dir.path().join("slurmdbd.conf")).unwrap();
        editor.set(ConfigToken::Parameters, elements.clone()).unwrap();
        prop_assert_eq!(editor.get_list(ConfigToken::Parameters), Some(elements));
    }
}
