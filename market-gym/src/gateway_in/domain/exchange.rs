use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an exchange
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangeId(String);

impl ExchangeId {
    pub fn new(id: impl Into<String>) -> Self {
        ExchangeId(id.into().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ExchangeId {
    fn from(s: &str) -> Self {
        ExchangeId::new(s)
    }
}

impl From<String> for ExchangeId {
    fn from(s: String) -> Self {
        ExchangeId::new(s)
    }
}

/// Well-known exchange identifiers
impl ExchangeId {
    pub fn binance() -> Self {
        ExchangeId::new("binance")
    }

    pub fn simulator() -> Self {
        ExchangeId::new("simulator")
    }

    pub fn in_memory() -> Self {
        ExchangeId::new("in-memory")
    }
}

/// A tradable market listed by an exchange
///
/// `symbol` is the unified `BASE/QUOTE` form used by the environment,
/// `id` is the exchange-native form sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketInfo {
    pub symbol: String,
    pub id: String,
    pub base: String,
    pub quote: String,
    pub active: bool,
}

impl MarketInfo {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        let base = base.into().to_uppercase();
        let quote = quote.into().to_uppercase();
        MarketInfo {
            symbol: format!("{}/{}", base, quote),
            id: format!("{}{}", base, quote),
            base,
            quote,
            active: true,
        }
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Exchange-native id for a unified symbol when no market listing is at hand
pub fn native_symbol(symbol: &str) -> String {
    symbol.replace('/', "").to_uppercase()
}
