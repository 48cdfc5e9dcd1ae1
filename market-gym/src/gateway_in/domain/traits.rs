use async_trait::async_trait;
use market_core::OrderBookSnapshot;

use super::error::ExchangeError;
use super::exchange::{ExchangeId, MarketInfo};

/// Exchange capabilities the environment depends on
///
/// Symbols are passed in unified `BASE/QUOTE` form; adapters translate them
/// to their native ids.
#[async_trait]
pub trait Exchange: Send + Sync {
    /// Identifier used in logs
    fn id(&self) -> &ExchangeId;

    /// List the markets the exchange trades
    async fn load_markets(&self) -> Result<Vec<MarketInfo>, ExchangeError>;

    /// Fetch the current order book for `symbol`
    async fn fetch_order_book(&self, symbol: &str) -> Result<OrderBookSnapshot, ExchangeError>;
}
