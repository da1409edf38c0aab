//! Scorer configuration: defaults with `CLIPRANK_*` environment overrides.

use std::env;

use super::error::ConfigError;

/// N-gram order used when none is configured.
pub const DEFAULT_ORDER: usize = 1;

/// Overlap scorer configuration.
///
/// Use [`ScoreConfig::from_env`] to read `CLIPRANK_*` overrides on top of
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreConfig {
    /// N-gram order the scorer compares at. Default: `1`.
    pub order: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
        }
    }
}

impl ScoreConfig {
    const ENV_ORDER: &'static str = "CLIPRANK_SCORE_ORDER";

    /// Creates a configuration for a positive n-gram order.
    pub fn new(order: usize) -> Result<Self, ConfigError> {
        if order == 0 {
            return Err(ConfigError::InvalidOrder {
                value: order.to_string(),
            });
        }
        Ok(Self { order })
    }

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(Self::ENV_ORDER) {
            Ok(raw) => {
                let order: usize = raw.parse().map_err(|source| ConfigError::OrderParse {
                    value: raw.clone(),
                    source,
                })?;
                Self::new(order)
            }
            Err(_) => Ok(Self::default()),
        }
    }
}
