use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ConfigError;
use crate::drqn::DrqnConfig;
use crate::env::MarketSettings;

/// Root configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymConfigFile {
    pub exchange: ExchangeConfig,
    pub market: MarketConfig,
    #[serde(default)]
    pub agent: AgentConfig,
}

/// Exchange connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Identifier used in logs (e.g., "binance", "simulator")
    pub id: String,
    /// REST API base URL
    pub rest_url: String,
    /// API key sent as `X-MBX-APIKEY`, empty for public endpoints only
    #[serde(default)]
    pub api_key: String,
    /// Levels per side requested from the depth endpoint
    #[serde(default = "default_depth_limit")]
    pub depth_limit: u32,
    /// HTTP request timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

impl ExchangeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Environment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Unified symbol, e.g. "BTC/USDT"
    pub symbol: String,
    /// Max amount (in base currency) per trade
    #[serde(default = "default_max_amount")]
    pub max_amount: f64,
    /// Seed for the environment rng; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MarketConfig {
    pub fn to_settings(&self) -> MarketSettings {
        MarketSettings {
            symbol: self.symbol.clone(),
            max_amount: self.max_amount,
            seed: self.seed,
        }
    }
}

/// DRQN agent settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_n_epochs")]
    pub n_epochs: u32,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            n_epochs: default_n_epochs(),
            batch_size: default_batch_size(),
        }
    }
}

impl AgentConfig {
    pub fn to_drqn_config(&self) -> DrqnConfig {
        DrqnConfig {
            n_epochs: self.n_epochs,
            batch_size: self.batch_size,
        }
    }
}

impl GymConfigFile {
    /// Reject values the environment cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exchange.rest_url.trim().is_empty() {
            return Err(ConfigError::Invalid("exchange.rest_url is empty".into()));
        }
        if !(1..=MAX_DEPTH_LIMIT).contains(&self.exchange.depth_limit) {
            return Err(ConfigError::Invalid(format!(
                "exchange.depth_limit must be within 1..={}, got {}",
                MAX_DEPTH_LIMIT, self.exchange.depth_limit
            )));
        }
        if self.exchange.timeout_ms == 0 {
            return Err(ConfigError::Invalid("exchange.timeout_ms must be non-zero".into()));
        }
        if self.market.symbol.trim().is_empty() {
            return Err(ConfigError::Invalid("market.symbol is empty".into()));
        }
        if !self.market.max_amount.is_finite() || self.market.max_amount <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "market.max_amount must be positive, got {}",
                self.market.max_amount
            )));
        }
        if self.agent.n_epochs == 0 || self.agent.batch_size == 0 {
            return Err(ConfigError::Invalid(
                "agent.n_epochs and agent.batch_size must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Binance caps `limit` on `/api/v3/depth` at 5000
pub const MAX_DEPTH_LIMIT: u32 = 5000;

// Default value functions for serde
fn default_depth_limit() -> u32 {
    100
}

fn default_timeout() -> u64 {
    10_000
}

fn default_max_amount() -> f64 {
    1.0
}

fn default_n_epochs() -> u32 {
    500
}

fn default_batch_size() -> usize {
    32
}
