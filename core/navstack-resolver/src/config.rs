//! Resolver configuration, read from the `[resolver]` table of a TOML file.
//!
//! ```toml
//! [resolver]
//! carrier_key = "__navFlag"
//! match_policy = "oldest"
//! ```

use crate::carrier::{DEFAULT_CARRIER_KEY, FlagCarrier};
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Which entry a name search settles on when the name appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    #[default]
    /// The lowest-index (oldest) entry.
    Oldest,
    /// The highest-index (most recent) entry.
    Newest,
}

/// Settings for [`FlagResolver`](crate::FlagResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Params key that carries a flag across the host call boundary.
    #[serde(default = "default_carrier_key")]
    pub carrier_key: String,
    /// Name search policy for the rewind flags.
    #[serde(default)]
    pub match_policy: MatchPolicy,
}

fn default_carrier_key() -> String {
    DEFAULT_CARRIER_KEY.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            carrier_key: default_carrier_key(),
            match_policy: MatchPolicy::default(),
        }
    }
}

/// Raw TOML structure.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    resolver: ResolverConfig,
}

impl ResolverConfig {
    /// Parses a config document, rejecting unusable values.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        let file: ConfigFile = toml::from_str(contents)?;
        let config = file.resolver;
        if config.carrier_key.trim().is_empty() {
            return Err(ConfigError::Invalid("carrier_key must not be empty".into()));
        }
        Ok(config)
    }

    /// Reads and parses a config file.
    pub fn try_load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads config from `path`, falling back to defaults when the file is
    /// missing or unusable.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No resolver config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(config) => {
                info!("Loaded resolver config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load resolver config {:?}: {}. Falling back to defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// The carrier for the configured key.
    #[must_use]
    pub fn carrier(&self) -> FlagCarrier {
        FlagCarrier::new(self.carrier_key.clone())
    }
}
