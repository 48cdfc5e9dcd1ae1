use crate::order_book::{BookError, OrderBookSnapshot};
use crate::price_level::PriceLevel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Binance-style depth snapshot (`GET /api/v3/depth` body)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthSnapshotEvent {
    #[serde(rename = "lastUpdateId")]
    pub last_update_id: u64,
    pub bids: Vec<[String; 2]>, // [price, quantity]
    pub asks: Vec<[String; 2]>,
}

impl DepthSnapshotEvent {
    pub fn new(last_update_id: u64, bids: &[PriceLevel], asks: &[PriceLevel]) -> Self {
        DepthSnapshotEvent {
            last_update_id,
            bids: bids
                .iter()
                .map(|l| [l.price.to_string(), l.quantity.to_string()])
                .collect(),
            asks: asks
                .iter()
                .map(|l| [l.price.to_string(), l.quantity.to_string()])
                .collect(),
        }
    }

    /// Parse the string levels into a typed snapshot for `symbol`.
    ///
    /// Zero-quantity levels are dropped; malformed or negative levels are
    /// rejected.
    pub fn into_snapshot(self, symbol: impl Into<String>) -> Result<OrderBookSnapshot, BookError> {
        let bids = parse_levels("bid", &self.bids)?;
        let asks = parse_levels("ask", &self.asks)?;
        Ok(OrderBookSnapshot::new(symbol, bids, asks).with_update_id(self.last_update_id))
    }
}

impl From<&OrderBookSnapshot> for DepthSnapshotEvent {
    fn from(book: &OrderBookSnapshot) -> Self {
        DepthSnapshotEvent::new(book.last_update_id, &book.bids, &book.asks)
    }
}

fn parse_levels(side: &'static str, raw: &[[String; 2]]) -> Result<Vec<PriceLevel>, BookError> {
    let mut levels = Vec::with_capacity(raw.len());

    for (index, [price, qty]) in raw.iter().enumerate() {
        let (Ok(p), Ok(q)) = (price.trim().parse::<Decimal>(), qty.trim().parse::<Decimal>())
        else {
            return Err(BookError::InvalidLevel {
                side,
                index,
                price: price.clone(),
                quantity: qty.clone(),
            });
        };

        if p.is_sign_negative() || q.is_sign_negative() {
            return Err(BookError::NegativeLevel { side, index });
        }

        if !q.is_zero() {
            levels.push(PriceLevel::new(p, q));
        }
    }

    Ok(levels)
}
