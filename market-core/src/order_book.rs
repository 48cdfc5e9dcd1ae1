//! Order book snapshot as fetched from an exchange.

use crate::price_level::PriceLevel;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a snapshot from exchange data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Invalid {side} level #{index}: [{price}, {quantity}]")]
    InvalidLevel {
        side: &'static str,
        index: usize,
        price: String,
        quantity: String,
    },

    #[error("Negative {side} level #{index}")]
    NegativeLevel { side: &'static str, index: usize },
}

/// Point-in-time order book for one symbol
///
/// Bids are best-first (descending price) and asks are best-first
/// (ascending price), the order exchanges return them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    pub symbol: String,
    pub bids: Vec<PriceLevel>,
    pub asks: Vec<PriceLevel>,
    pub last_update_id: u64,
    pub fetched_at: DateTime<Utc>,
}

impl OrderBookSnapshot {
    pub fn new(symbol: impl Into<String>, bids: Vec<PriceLevel>, asks: Vec<PriceLevel>) -> Self {
        OrderBookSnapshot {
            symbol: symbol.into(),
            bids,
            asks,
            last_update_id: 0,
            fetched_at: Utc::now(),
        }
    }

    pub fn with_update_id(mut self, last_update_id: u64) -> Self {
        self.last_update_id = last_update_id;
        self
    }

    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    pub fn mid_price(&self) -> Option<Decimal> {
        let bid = self.best_bid()?.price;
        let ask = self.best_ask()?.price;
        Some((bid + ask) / Decimal::TWO)
    }

    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()?.price - self.best_bid()?.price)
    }

    /// Best bid at or above best ask
    pub fn is_crossed(&self) -> bool {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid.price >= ask.price,
            _ => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Total number of levels on both sides
    pub fn depth(&self) -> usize {
        self.bids.len() + self.asks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn book() -> OrderBookSnapshot {
        OrderBookSnapshot::new(
            "BTC/USDT",
            vec![
                PriceLevel::new(dec!(99), dec!(1)),
                PriceLevel::new(dec!(98), dec!(2)),
            ],
            vec![PriceLevel::new(dec!(101), dec!(3))],
        )
    }

    #[test]
    fn test_bbo() {
        let book = book();
        assert_eq!(book.best_bid().unwrap().price, dec!(99));
        assert_eq!(book.best_ask().unwrap().price, dec!(101));
        assert_eq!(book.mid_price(), Some(dec!(100)));
        assert_eq!(book.spread(), Some(dec!(2)));
        assert!(!book.is_crossed());
        assert_eq!(book.depth(), 3);
    }

    #[test]
    fn test_one_sided_book() {
        let book = OrderBookSnapshot::new("BTC/USDT", vec![], vec![PriceLevel::new(dec!(1), dec!(1))]);
        assert_eq!(book.mid_price(), None);
        assert!(!book.is_crossed());
        assert!(!book.is_empty());
    }

    #[test]
    fn test_crossed() {
        let book = OrderBookSnapshot::new(
            "BTC/USDT",
            vec![PriceLevel::new(dec!(101), dec!(1))],
            vec![PriceLevel::new(dec!(100), dec!(1))],
        );
        assert!(book.is_crossed());
    }
}
