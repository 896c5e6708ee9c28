//! Game configuration.
//!
//! `GameConfig` gathers the knobs a host application sets at startup:
//! - the RNG seed (omit for an entropy-seeded game)
//! - how long a matched pair stays visible before it is flipped down
//! - an optional pinned device pair limit
//! - an optional replacement campaign
//!
//! Configs can be built in code with the `with_*` methods or loaded from JSON.
//! Durations are written as seconds (`"match_flip_delay": 2.1`).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};
use crate::session::{validate_campaign, LevelConfig};

/// Default delay before a matched pair is flipped face-down.
pub const DEFAULT_MATCH_FLIP_DELAY: Duration = Duration::from_millis(2100);

/// Startup configuration for a `MemoryGame`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Display window for a matched pair before it is flipped down.
    #[serde(with = "duration_secs")]
    pub match_flip_delay: Duration,

    /// Pinned device pair limit. `None` asks the device capability.
    pub device_limit: Option<usize>,

    /// Replacement campaign. `None` uses the default campaign.
    pub campaign: Option<Vec<LevelConfig>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            match_flip_delay: DEFAULT_MATCH_FLIP_DELAY,
            device_limit: None,
            campaign: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values a game cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.match_flip_delay.is_zero() {
            return Err(MatchError::InvalidConfig(
                "match_flip_delay must be positive".to_string(),
            ));
        }
        if self.device_limit == Some(0) {
            return Err(MatchError::InvalidConfig(
                "device_limit must be at least 1".to_string(),
            ));
        }
        if let Some(campaign) = &self.campaign {
            validate_campaign(campaign)?;
        }
        Ok(())
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the matched-pair display window.
    #[must_use]
    pub fn with_match_flip_delay(mut self, delay: Duration) -> Self {
        self.match_flip_delay = delay;
        self
    }

    /// Pin the device pair limit.
    #[must_use]
    pub fn with_device_limit(mut self, limit: usize) -> Self {
        self.device_limit = Some(limit);
        self
    }

    /// Replace the default campaign.
    #[must_use]
    pub fn with_campaign(mut self, campaign: Vec<LevelConfig>) -> Self {
        self.campaign = Some(campaign);
        self
    }
}

/// Serialize a `Duration` as fractional seconds.
pub(crate) mod duration_secs {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}
