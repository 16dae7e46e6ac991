use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::location::LocationId;

pub const INTERCHANGES_FILE_ENV_VAR: &str = "ETR_INTERCHANGES_FILE";
pub const RATES_FILE_ENV_VAR: &str = "ETR_RATES_FILE";
pub const ROOT_LOCATION_ID_ENV_VAR: &str = "ETR_ROOT_LOCATION_ID";

const DEFAULT_DATA_DIR: &str = "./data";
const INTERCHANGES_FILE_NAME: &str = "interchanges.json";
const RATES_FILE_NAME: &str = "rates.json";
const DEFAULT_ROOT_LOCATION_ID: u64 = 1;

/// Where the engine reads its configuration documents from, and where the
/// linearization walk starts.
#[derive(Debug, Clone, PartialEq)]
pub struct EtrConfig {
    pub interchanges_path: PathBuf,
    pub rates_path: PathBuf,
    pub root_location_id: LocationId,
}

impl Default for EtrConfig {
    fn default() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR)
    }
}

impl EtrConfig {
    /// Both documents under `dir`, with their default file names, and the default root.
    pub fn with_data_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();

        Self {
            interchanges_path: dir.join(INTERCHANGES_FILE_NAME),
            rates_path: dir.join(RATES_FILE_NAME),
            root_location_id: LocationId::from(DEFAULT_ROOT_LOCATION_ID),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to the defaults for every
    /// variable it does not resolve.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let root_location_id = match lookup(ROOT_LOCATION_ID_ENV_VAR) {
            Some(raw) => LocationId::parse(&raw)?,
            None => defaults.root_location_id,
        };

        Ok(Self {
            interchanges_path: lookup(INTERCHANGES_FILE_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.interchanges_path),
            rates_path: lookup(RATES_FILE_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.rates_path),
            root_location_id,
        })
    }
}
