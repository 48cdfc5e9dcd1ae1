//! Order placement action space.
//!
//! Prices are normalised to a fraction of the current market price and
//! signed by side: limit buys live in `[-1, 0)`, limit sells in `(0, 1]`.
//! This keeps the space fixed while the market moves, so no `max_price` is
//! needed. Amounts are absolute (base currency) because the same fraction of
//! base and quote holdings can be very different amounts.

use market_core::{OrderType, Side};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::EnvError;

/// One sampled or agent-chosen action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderAction {
    /// Place an order, or do nothing this step
    pub place_order: bool,
    pub order_type: OrderType,
    pub side: Side,
    /// Base currency amount in `[0, max_amount]`
    pub amount: f64,
    /// Signed fraction of market price (ignored for market orders)
    pub price: f64,
}

/// Action space of the market environment
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSpace {
    max_amount: f64,
}

impl OrderSpace {
    pub fn new(max_amount: f64) -> Result<Self, EnvError> {
        if !max_amount.is_finite() || max_amount <= 0.0 {
            return Err(EnvError::InvalidSettings(format!(
                "max_amount must be positive, got {}",
                max_amount
            )));
        }
        Ok(OrderSpace { max_amount })
    }

    pub fn max_amount(&self) -> f64 {
        self.max_amount
    }

    /// Uniformly sample an element of this space
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> OrderAction {
        let place_order = rng.r#gen::<bool>();
        let order_type = if rng.r#gen::<bool>() {
            OrderType::Market
        } else {
            OrderType::Limit
        };
        let side = if rng.r#gen::<bool>() { Side::Buy } else { Side::Sell };
        let amount = self.max_amount * rng.r#gen::<f64>();
        // 1 - [0, 1) keeps zero out of the range
        let price = side.sign() * (1.0 - rng.r#gen::<f64>());

        OrderAction {
            place_order,
            order_type,
            side,
            amount,
            price,
        }
    }

    pub fn contains(&self, action: &OrderAction) -> bool {
        if !action.amount.is_finite() || action.amount < 0.0 || action.amount > self.max_amount {
            return false;
        }
        if !action.price.is_finite() || action.price.abs() > 1.0 {
            return false;
        }

        match action.order_type {
            OrderType::Market => true,
            OrderType::Limit => match action.side {
                Side::Buy => action.price < 0.0,
                Side::Sell => action.price > 0.0,
            },
        }
    }

    /// Convert a batch of actions to JSON
    pub fn to_jsonable(&self, actions: &[OrderAction]) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(actions)
    }

    /// Convert JSON back into a batch of actions
    pub fn from_jsonable(&self, value: serde_json::Value) -> Result<Vec<OrderAction>, serde_json::Error> {
        serde_json::from_value(value)
    }
}
