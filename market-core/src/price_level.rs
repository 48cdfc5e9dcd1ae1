use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Represents a single price level in the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Decimal,
    pub quantity: Decimal,
}

impl PriceLevel {
    pub fn new(price: Decimal, quantity: Decimal) -> Self {
        PriceLevel { price, quantity }
    }

    /// Price as f64, for numeric consumers
    pub fn price_f64(&self) -> f64 {
        self.price.to_f64().unwrap_or(f64::NAN)
    }

    /// Quantity as f64, for numeric consumers
    pub fn quantity_f64(&self) -> f64 {
        self.quantity.to_f64().unwrap_or(f64::NAN)
    }
}
