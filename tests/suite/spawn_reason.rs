//! Spawn reason value type and decode policy tests

use std::collections::{BTreeSet, HashMap};

use mobspawn_types::{MobSpawnReason, NameMatching};

#[test]
fn canonical_names_match_the_published_set() {
    let expected = [
        "NATURAL",
        "CHUNK_GENERATION",
        "SPAWNER",
        "STRUCTURE",
        "BREEDING",
        "MOB_SUMMONED",
        "JOCKEY",
        "EVENT",
        "CONVERSION",
        "REINFORCEMENT",
        "TRIGGERED",
        "BUCKET",
        "SPAWN_EGG",
        "COMMAND",
        "DISPENSER",
        "PATROL",
    ];
    let actual: Vec<_> = MobSpawnReason::all().iter().map(|r| r.as_str()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn enumeration_is_restartable() {
    let first: Vec<_> = MobSpawnReason::all().iter().copied().collect();
    let second: Vec<_> = MobSpawnReason::all().iter().copied().collect();
    assert_eq!(first, second);

    let sorted: BTreeSet<_> = first.iter().copied().collect();
    assert_eq!(sorted.into_iter().collect::<Vec<_>>(), first);
}

#[test]
fn reasons_work_as_map_keys() {
    let mut counts: HashMap<MobSpawnReason, u32> = HashMap::new();
    for raw in ["SPAWNER", "BREEDING", "SPAWNER"] {
        *counts.entry(raw.parse().unwrap()).or_default() += 1;
    }
    assert_eq!(counts[&MobSpawnReason::Spawner], 2);
    assert_eq!(counts[&MobSpawnReason::Breeding], 1);
}

#[test]
fn unknown_reason_is_an_error_not_a_default() {
    let err = "UNKNOWN_REASON".parse::<MobSpawnReason>().unwrap_err();
    assert_eq!(err.raw(), "UNKNOWN_REASON");
    assert!(err.expected().contains(&"SPAWNER"));
}

#[test]
fn wrong_case_depends_on_policy() {
    assert!(MobSpawnReason::parse("spawner").is_err());
    assert!(NameMatching::Exact.decode("spawner").is_err());
    assert_eq!(
        NameMatching::AsciiCaseInsensitive.decode("spawner").unwrap(),
        MobSpawnReason::Spawner
    );
}

#[test]
fn serde_embeds_reason_as_plain_string() {
    let record = serde_json::json!({ "entity": "zombie", "reason": "REINFORCEMENT" });
    let reason: MobSpawnReason = serde_json::from_value(record["reason"].clone()).unwrap();
    assert_eq!(reason, MobSpawnReason::Reinforcement);
    assert_eq!(serde_json::to_value(reason).unwrap(), record["reason"]);
}

#[test]
fn serde_rejects_names_in_other_cases() {
    let result = serde_json::from_value::<Vec<MobSpawnReason>>(serde_json::json!([
        "NATURAL", "patrol"
    ]));
    let err = result.unwrap_err().to_string();
    assert!(err.contains("'patrol'"), "unexpected error: {err}");
}
