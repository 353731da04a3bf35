//! Config file resolution tests

use mobspawn_config::{ConfigError, MobspawnConfig};
use mobspawn_types::NameMatching;

use crate::common::Harness;

#[test]
fn config_file_selects_matching_policy() {
    let harness = Harness::new();
    harness.write_config("[decode]\nmatching = \"ascii-case-insensitive\"\n");

    let config = MobspawnConfig::load_from(&harness.config_path()).unwrap();
    assert_eq!(config.matching(), NameMatching::AsciiCaseInsensitive);
}

#[test]
fn invalid_policy_in_file_is_surfaced() {
    let harness = Harness::new();
    harness.write_config("[decode]\nmatching = \"loose\"\n");

    let err = MobspawnConfig::load_from(&harness.config_path()).unwrap_err();
    assert!(matches!(err, ConfigError::Matching(_)));
    assert!(err.to_string().contains("'loose'"));
}

#[test]
fn new_config_carries_policy() {
    let config = MobspawnConfig::new(NameMatching::AsciiCaseInsensitive);
    assert_eq!(config.matching(), NameMatching::AsciiCaseInsensitive);
    assert_eq!(MobspawnConfig::default().matching(), NameMatching::Exact);
}
