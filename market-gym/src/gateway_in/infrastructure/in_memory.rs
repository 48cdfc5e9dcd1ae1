use async_trait::async_trait;
use market_core::OrderBookSnapshot;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::gateway_in::domain::{Exchange, ExchangeError, ExchangeId, MarketInfo};

/// In-memory exchange holding one book per symbol
///
/// Cheap to clone; clones share the same books, so a test or replay driver
/// can swap books while an environment holds another handle.
#[derive(Clone)]
pub struct InMemoryExchange {
    id: ExchangeId,
    state: Arc<RwLock<State>>,
}

#[derive(Default)]
struct State {
    markets: Vec<MarketInfo>,
    books: HashMap<String, OrderBookSnapshot>,
    fetches: u64,
}

impl InMemoryExchange {
    pub fn new() -> Self {
        InMemoryExchange {
            id: ExchangeId::in_memory(),
            state: Arc::new(RwLock::new(State::default())),
        }
    }

    /// List a market without a book
    pub fn with_market(self, market: MarketInfo) -> Self {
        self.state.write().markets.push(market);
        self
    }

    /// Replace (or create) the book for `book.symbol`, listing its market if new
    pub fn set_book(&self, book: OrderBookSnapshot) {
        let mut state = self.state.write();
        if !state.markets.iter().any(|m| m.symbol == book.symbol) {
            if let Some((base, quote)) = book.symbol.split_once('/') {
                state.markets.push(MarketInfo::new(base, quote));
            }
        }
        state.books.insert(book.symbol.clone(), book);
    }

    /// Number of `fetch_order_book` calls served
    pub fn fetch_count(&self) -> u64 {
        self.state.read().fetches
    }
}

impl Default for InMemoryExchange {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Exchange for InMemoryExchange {
    fn id(&self) -> &ExchangeId {
        &self.id
    }

    async fn load_markets(&self) -> Result<Vec<MarketInfo>, ExchangeError> {
        Ok(self.state.read().markets.clone())
    }

    async fn fetch_order_book(&self, symbol: &str) -> Result<OrderBookSnapshot, ExchangeError> {
        let mut state = self.state.write();
        let mut book = state
            .books
            .get(symbol)
            .cloned()
            .ok_or_else(|| ExchangeError::UnknownSymbol(symbol.to_string()))?;
        state.fetches += 1;
        book.fetched_at = chrono::Utc::now();
        Ok(book)
    }
}
