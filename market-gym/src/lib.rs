//! Gym-style reinforcement learning environment over a crypto exchange
//! order book, plus a DRQN agent skeleton.
//!
//! ```no_run
//! use market_gym::env::{Environment, Market, RenderMode};
//! use market_gym::gateway_in::RestClient;
//!
//! # async fn run() -> Result<(), market_gym::env::EnvError> {
//! let exchange = RestClient::new("https://api.binance.com", "");
//! let mut market = Market::new(exchange, "BTC/USDT").await?;
//! let observation = market.reset().await?;
//! println!("{:?}", observation.shape());
//! market.render(RenderMode::Human)?;
//! # Ok(())
//! # }
//! ```

pub mod drqn;
pub mod env;
pub mod gateway_in;

// Re-export gateway_in as gateway for convenience
pub use gateway_in as gateway;
