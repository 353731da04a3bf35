//! Mob spawn reasons and their canonical names.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// The cause attributed to a creature entering the world.
///
/// Closed set: values only come from the variants below or from decoding one
/// of their canonical names. `Ord` follows declaration order and is meant for
/// stable listing, not for ranking reasons against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MobSpawnReason {
    Natural,
    ChunkGeneration,
    Spawner,
    Structure,
    Breeding,
    MobSummoned,
    Jockey,
    Event,
    Conversion,
    Reinforcement,
    Triggered,
    Bucket,
    SpawnEgg,
    Command,
    Dispenser,
    Patrol,
}

const ALL_REASONS: &[MobSpawnReason] = &[
    MobSpawnReason::Natural,
    MobSpawnReason::ChunkGeneration,
    MobSpawnReason::Spawner,
    MobSpawnReason::Structure,
    MobSpawnReason::Breeding,
    MobSpawnReason::MobSummoned,
    MobSpawnReason::Jockey,
    MobSpawnReason::Event,
    MobSpawnReason::Conversion,
    MobSpawnReason::Reinforcement,
    MobSpawnReason::Triggered,
    MobSpawnReason::Bucket,
    MobSpawnReason::SpawnEgg,
    MobSpawnReason::Command,
    MobSpawnReason::Dispenser,
    MobSpawnReason::Patrol,
];

/// Canonical names, index-aligned with [`ALL_REASONS`].
const CANONICAL_NAMES: &[&str] = &[
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

impl MobSpawnReason {
    pub const COUNT: usize = ALL_REASONS.len();

    /// Every reason in declaration order.
    #[must_use]
    pub const fn all() -> &'static [MobSpawnReason] {
        ALL_REASONS
    }

    /// Every canonical name in declaration order.
    #[must_use]
    pub const fn canonical_names() -> &'static [&'static str] {
        CANONICAL_NAMES
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MobSpawnReason::Natural => "NATURAL",
            MobSpawnReason::ChunkGeneration => "CHUNK_GENERATION",
            MobSpawnReason::Spawner => "SPAWNER",
            MobSpawnReason::Structure => "STRUCTURE",
            MobSpawnReason::Breeding => "BREEDING",
            MobSpawnReason::MobSummoned => "MOB_SUMMONED",
            MobSpawnReason::Jockey => "JOCKEY",
            MobSpawnReason::Event => "EVENT",
            MobSpawnReason::Conversion => "CONVERSION",
            MobSpawnReason::Reinforcement => "REINFORCEMENT",
            MobSpawnReason::Triggered => "TRIGGERED",
            MobSpawnReason::Bucket => "BUCKET",
            MobSpawnReason::SpawnEgg => "SPAWN_EGG",
            MobSpawnReason::Command => "COMMAND",
            MobSpawnReason::Dispenser => "DISPENSER",
            MobSpawnReason::Patrol => "PATROL",
        }
    }

    /// Zero-based position in declaration order.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_ordinal(index: usize) -> Option<Self> {
        ALL_REASONS.get(index).copied()
    }

    /// Decode a canonical name. Matching is exact: no trimming, no case folding.
    pub fn parse(raw: &str) -> Result<Self, UnknownVariant> {
        ALL_REASONS
            .iter()
            .copied()
            .find(|reason| reason.as_str() == raw)
            .ok_or_else(|| UnknownVariant::new(raw))
    }
}

impl fmt::Display for MobSpawnReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MobSpawnReason {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for MobSpawnReason {
    type Error = UnknownVariant;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for MobSpawnReason {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MobSpawnReason {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        MobSpawnReason::parse(&raw).map_err(D::Error::custom)
    }
}

/// Input text that names none of the known spawn reasons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mob spawn reason '{raw}'; expected one of: {expected:?}")]
pub struct UnknownVariant {
    raw: String,
    expected: &'static [&'static str],
}

impl UnknownVariant {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            expected: CANONICAL_NAMES,
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub const fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}
