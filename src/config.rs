use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::category::Gender;
use crate::types::eligibility_bundle::Query;
use crate::types::identifiers::StateId;

/// Environment variable that overrides [`EngineConfig::data_path`].
pub const DATA_PATH_ENV: &str = "SEAT_CORE_DATA_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Values the boundary substitutes for absent query parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDefaults {
    pub reservation: String,
    pub gender: Gender,
    pub home_state: StateId,
    pub tolerance_pct: f64,
    pub cap: usize,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            reservation: Query::DEFAULT_RESERVATION.into(),
            gender: Gender::Male,
            home_state: StateId::default(),
            tolerance_pct: Query::DEFAULT_TOLERANCE_PCT,
            cap: Query::DEFAULT_CAP,
        }
    }
}

impl QueryDefaults {
    /// A query carrying only the defaults; ranks are left unset.
    pub fn query(&self) -> Query {
        Query::new(self.reservation.clone())
            .with_gender(self.gender)
            .with_home_state(self.home_state)
            .with_tolerance(self.tolerance_pct)
            .with_cap(self.cap)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub data_path: PathBuf,
    pub defaults: QueryDefaults,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/seats.csv"),
            defaults: QueryDefaults::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Empty values are ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(DATA_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            self.data_path = PathBuf::from(path);
        }
        self
    }
}
