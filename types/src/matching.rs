//! Decode policy for spawn reason names read from external input.
//!
//! Encoding always produces the canonical name. Only decoding varies, and the
//! default stays strict so that producer/consumer skew shows up as an error.

use std::fmt;

use thiserror::Error;

use crate::spawn_reason::{MobSpawnReason, UnknownVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameMatching {
    #[default]
    Exact,
    AsciiCaseInsensitive,
}

const MATCHING_PARSE_VALUES: &[&str] = &["exact", "ascii-case-insensitive", "case-insensitive"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid name matching value '{raw}'; expected one of: {expected:?}")]
pub struct MatchingParseError {
    raw: String,
    expected: &'static [&'static str],
}

impl MatchingParseError {
    fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            expected: MATCHING_PARSE_VALUES,
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

impl NameMatching {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NameMatching::Exact => "exact",
            NameMatching::AsciiCaseInsensitive => "ascii-case-insensitive",
        }
    }

    pub fn parse(s: &str) -> Result<Self, MatchingParseError> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "exact" => Ok(NameMatching::Exact),
            "ascii-case-insensitive" | "case-insensitive" => Ok(NameMatching::AsciiCaseInsensitive),
            _ => Err(MatchingParseError::new(trimmed)),
        }
    }

    #[must_use]
    pub fn all() -> &'static [NameMatching] {
        &[NameMatching::Exact, NameMatching::AsciiCaseInsensitive]
    }

    /// Decode `raw` under this policy. Errors always carry the input unchanged.
    pub fn decode(self, raw: &str) -> Result<MobSpawnReason, UnknownVariant> {
        match self {
            NameMatching::Exact => MobSpawnReason::parse(raw),
            NameMatching::AsciiCaseInsensitive => MobSpawnReason::all()
                .iter()
                .copied()
                .find(|reason| reason.as_str().eq_ignore_ascii_case(raw))
                .ok_or_else(|| UnknownVariant::new(raw)),
        }
    }
}

impl fmt::Display for NameMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
