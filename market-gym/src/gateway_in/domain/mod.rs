mod error;
mod exchange;
mod traits;

pub use error::ExchangeError;
pub use exchange::{ExchangeId, MarketInfo, native_symbol};
pub use traits::Exchange;
