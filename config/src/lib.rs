//! Configuration loading for mobspawn.
//!
//! The raw TOML structs keep every field optional and stay private to this
//! crate. [`MobspawnConfig`] is the resolved form: once it exists, every value
//! in it has been validated.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mobspawn_types::{MatchingParseError, NameMatching};
use serde::Deserialize;
use thiserror::Error;

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MOBSPAWN_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    decode: Option<RawDecodeConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDecodeConfig {
    matching: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid [decode] matching: {0}")]
    Matching(#[from] MatchingParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobspawnConfig {
    matching: NameMatching,
}

impl MobspawnConfig {
    #[must_use]
    pub fn new(matching: NameMatching) -> Self {
        Self { matching }
    }

    #[must_use]
    pub fn matching(&self) -> NameMatching {
        self.matching
    }

    /// Load the config file. `Ok(None)` means there is no file to load.
    ///
    /// A path named by `MOBSPAWN_CONFIG` must exist; only the default
    /// `~/.mobspawn/config.toml` is allowed to be absent.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_located(resolve_path(env::var_os(CONFIG_PATH_ENV), dirs::home_dir()))
    }

    fn load_located(location: Option<ConfigLocation>) -> Result<Option<Self>, ConfigError> {
        match location {
            None => {
                tracing::debug!("No home directory; skipping config");
                Ok(None)
            }
            Some(ConfigLocation::Override(path)) => Self::load_from(&path).map(Some),
            Some(ConfigLocation::Default(path)) => {
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "No config file");
                    return Ok(None);
                }
                Self::load_from(&path).map(Some)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            matching = %config.matching,
            "Loaded config"
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let matching = match raw.decode.and_then(|decode| decode.matching) {
            Some(value) => NameMatching::parse(&value).inspect_err(|err| {
                tracing::warn!("Rejected [decode] matching value: {err}");
            })?,
            None => NameMatching::default(),
        };
        Ok(Self { matching })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        resolve_path(env::var_os(CONFIG_PATH_ENV), dirs::home_dir()).map(ConfigLocation::into_path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigLocation {
    Override(PathBuf),
    Default(PathBuf),
}

impl ConfigLocation {
    fn into_path(self) -> PathBuf {
        match self {
            ConfigLocation::Override(path) | ConfigLocation::Default(path) => path,
        }
    }
}

/// Blank overrides count as unset. Non-UTF-8 overrides are kept as paths.
fn resolve_path(override_path: Option<OsString>, home: Option<PathBuf>) -> Option<ConfigLocation> {
    if let Some(path) = override_path
        && !path.to_string_lossy().trim().is_empty()
    {
        return Some(ConfigLocation::Override(PathBuf::from(path)));
    }
    home.map(|home| ConfigLocation::Default(home.join(".mobspawn").join("config.toml")))
}
