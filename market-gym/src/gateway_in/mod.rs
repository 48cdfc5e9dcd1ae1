//! Exchange connectivity for the market environment.
//!
//! - **Config**: JSON configuration for the exchange, market and agent
//! - **Domain**: `Exchange` port, `MarketInfo`, `ExchangeId`, `ExchangeError`
//! - **Infrastructure**: `RestClient` (Binance REST dialect) and
//!   `InMemoryExchange`
//!
//! # Example Configuration
//!
//! ```json
//! {
//!   "exchange": {
//!     "id": "binance",
//!     "rest_url": "https://api.binance.com",
//!     "depth_limit": 100
//!   },
//!   "market": { "symbol": "BTC/USDT", "max_amount": 1.0 }
//! }
//! ```

pub mod config;
pub mod domain;
pub mod infrastructure;

// Config layer
pub use config::{
    AgentConfig, ConfigError, ExchangeConfig, GymConfigFile, MarketConfig, load_config,
    load_config_from_str, load_default_config,
};

// Domain layer
pub use domain::{Exchange, ExchangeError, ExchangeId, MarketInfo, native_symbol};

// Infrastructure layer
pub use infrastructure::{InMemoryExchange, RestClient};
