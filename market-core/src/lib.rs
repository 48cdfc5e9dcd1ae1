//! Order book domain types shared by the market gym.
//!
//! - **side**: order side and order type
//! - **price_level**: a single `(price, quantity)` level
//! - **order_book**: a fetched order book snapshot
//! - **depth_events**: Binance-style depth wire format

pub mod depth_events;
pub mod order_book;
pub mod price_level;
pub mod side;

// Re-export at crate root for convenience
pub use depth_events::DepthSnapshotEvent;
pub use order_book::{BookError, OrderBookSnapshot};
pub use price_level::PriceLevel;
pub use side::{OrderType, Side};
