//! Engine configuration.

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: u8 = 4;

/// Deepest search a configuration accepts.
pub const MAX_DEPTH: u8 = 32;

const DEPTH_VAR: &str = "VANTAGE_DEPTH";
const SEED_VAR: &str = "VANTAGE_SEED";

/// Errors from building an [`EngineConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth {depth} is outside 1..={max}")]
    DepthOutOfRange { depth: u8, max: u8 },
    #[error("invalid value for {name}: \"{value}\"")]
    InvalidEnv { name: &'static str, value: String },
}

/// Settings for an [`Engine`](crate::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Default depth for [`Engine::search`](crate::Engine::search).
    pub depth: u8,
    /// Seed for the Zobrist keys. `None` draws them from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// A configuration searching to `depth` plies.
    pub fn new(depth: u8) -> Result<Self, ConfigError> {
        validate_depth(depth)?;
        Ok(Self {
            depth,
            ..Self::default()
        })
    }

    /// Use a fixed Zobrist seed for reproducible hashes.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Defaults overridden by `VANTAGE_DEPTH` and `VANTAGE_SEED` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(DEPTH_VAR) {
            let depth = value.trim().parse::<u8>().map_err(|_| ConfigError::InvalidEnv {
                name: DEPTH_VAR,
                value: value.clone(),
            })?;
            validate_depth(depth)?;
            config.depth = depth;
        }

        if let Some(value) = lookup(SEED_VAR) {
            let seed = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                name: SEED_VAR,
                value: value.clone(),
            })?;
            config.seed = Some(seed);
        }

        Ok(config)
    }
}

fn validate_depth(depth: u8) -> Result<(), ConfigError> {
    if (1..=MAX_DEPTH).contains(&depth) {
        Ok(())
    } else {
        Err(ConfigError::DepthOutOfRange {
            depth,
            max: MAX_DEPTH,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn default_searches_four_plies() {
        let config = EngineConfig::default();
        assert_eq!(config.depth, 4);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn new_validates_depth() {
        assert_eq!(EngineConfig::new(6).unwrap().depth, 6);
        assert_eq!(
            EngineConfig::new(0),
            Err(ConfigError::DepthOutOfRange { depth: 0, max: 32 })
        );
        assert!(EngineConfig::new(MAX_DEPTH + 1).is_err());
    }

    #[test]
    fn with_seed_keeps_depth() {
        let config = EngineConfig::new(3).unwrap().with_seed(99);
        assert_eq!(config.depth, 3);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn env_overrides_defaults() {
        let config =
            EngineConfig::from_lookup(lookup(&[("VANTAGE_DEPTH", "5"), ("VANTAGE_SEED", " 12 ")]))
                .unwrap();
        assert_eq!(config.depth, 5);
        assert_eq!(config.seed, Some(12));

        assert_eq!(EngineConfig::from_lookup(lookup(&[])).unwrap(), EngineConfig::default());
    }

    #[test]
    fn env_rejects_garbage() {
        let err = EngineConfig::from_lookup(lookup(&[("VANTAGE_SEED", "abc")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for VANTAGE_SEED: \"abc\"");

        let err = EngineConfig::from_lookup(lookup(&[("VANTAGE_DEPTH", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::DepthOutOfRange { depth: 0, .. }));
    }
}
