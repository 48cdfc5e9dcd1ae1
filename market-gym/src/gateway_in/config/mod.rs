//! JSON configuration for the gym binary and library users.

mod types;

pub use types::{AgentConfig, ExchangeConfig, GymConfigFile, MAX_DEPTH_LIMIT, MarketConfig};

use std::path::Path;
use thiserror::Error;

/// Path used by [`load_default_config`]
pub const DEFAULT_CONFIG_PATH: &str = "config/market_gym.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Load and validate configuration from a JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<GymConfigFile, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    load_config_from_str(&content)
}

/// Load and validate configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<GymConfigFile, ConfigError> {
    let config: GymConfigFile = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from [`DEFAULT_CONFIG_PATH`]
pub fn load_default_config() -> Result<GymConfigFile, ConfigError> {
    load_config(DEFAULT_CONFIG_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str_validates() {
        let json = r#"{
            "exchange": { "id": "binance", "rest_url": "https://api.binance.com" },
            "market": { "symbol": "BTC/USDT", "max_amount": 0 }
        }"#;

        assert!(matches!(load_config_from_str(json), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_shipped_config_loads() {
        let config = load_config(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../config/market_gym.json"
        ))
        .unwrap();

        assert_eq!(config.market.symbol, "BTC/USDT");
        assert_eq!(config.exchange.depth_limit, 20);
        assert_eq!(config.exchange.timeout_ms, 10_000);
        assert_eq!(config.market.seed, None);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(load_config_from_str("{"), Err(ConfigError::Parse(_))));
    }
}
