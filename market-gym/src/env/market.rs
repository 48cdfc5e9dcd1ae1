//! Market environment.
//!
//! Wraps an exchange order book as a partially observable environment: the
//! observation is the order book sampled at reset, the action space is order
//! placement.

use async_trait::async_trait;
use market_core::OrderBookSnapshot;
use rand::rngs::StdRng;
use std::collections::HashMap;

use super::action_space::{OrderAction, OrderSpace};
use super::error::EnvError;
use super::observation::{Observation, ObservationSpace};
use super::render::render_ansi;
use super::seeding::seeded_rng;
use super::traits::{Environment, Metadata, RenderMode, StepResult};
use crate::gateway_in::{Exchange, MarketInfo};

static METADATA: Metadata = Metadata {
    render_modes: &[RenderMode::Human, RenderMode::Ansi],
};

/// Construction settings for [`Market`]
#[derive(Debug, Clone)]
pub struct MarketSettings {
    /// Unified symbol, e.g. "BTC/USDT"
    pub symbol: String,
    /// Max amount (in base currency) per trade
    pub max_amount: f64,
    /// Seed for the environment rng; drawn from entropy when `None`
    pub seed: Option<u64>,
}

impl MarketSettings {
    pub fn new(symbol: impl Into<String>) -> Self {
        MarketSettings {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn with_max_amount(mut self, max_amount: f64) -> Self {
        self.max_amount = max_amount;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for MarketSettings {
    fn default() -> Self {
        MarketSettings {
            symbol: "BTC/USDT".to_string(),
            max_amount: 1.0,
            seed: None,
        }
    }
}

/// Order book environment over one symbol of one exchange
pub struct Market<E: Exchange> {
    exchange: E,
    markets: HashMap<String, MarketInfo>,
    symbol: String,
    action_space: OrderSpace,
    observation_space: ObservationSpace,
    rng: StdRng,
    seed: u64,
    state: Option<Observation>,
    last_book: Option<OrderBookSnapshot>,
    closed: bool,
}

impl<E: Exchange> Market<E> {
    /// Build with default settings for `symbol`
    pub async fn new(exchange: E, symbol: impl Into<String>) -> Result<Self, EnvError> {
        Self::with_settings(exchange, MarketSettings::new(symbol)).await
    }

    /// Load markets, build the spaces, seed, and reset
    pub async fn with_settings(exchange: E, settings: MarketSettings) -> Result<Self, EnvError> {
        let markets: HashMap<String, MarketInfo> = exchange
            .load_markets()
            .await?
            .into_iter()
            .map(|m| (m.symbol.clone(), m))
            .collect();

        // An exchange that lists nothing cannot be checked up front
        if !markets.is_empty() {
            match markets.get(&settings.symbol) {
                None => {
                    return Err(EnvError::UnknownSymbol {
                        symbol: settings.symbol,
                        exchange: exchange.id().to_string(),
                    });
                }
                Some(market) if !market.active => {
                    tracing::warn!(symbol = %market.symbol, "Market is not trading");
                }
                Some(_) => {}
            }
        }

        let action_space = OrderSpace::new(settings.max_amount)?;
        let (rng, seed) = seeded_rng(settings.seed);

        tracing::info!(
            exchange = %exchange.id(),
            symbol = %settings.symbol,
            max_amount = settings.max_amount,
            seed,
            "Creating market environment"
        );

        let mut market = Market {
            exchange,
            markets,
            symbol: settings.symbol,
            action_space,
            observation_space: ObservationSpace::new(),
            rng,
            seed,
            state: None,
            last_book: None,
            closed: false,
        };

        market.reset().await?;
        Ok(market)
    }

    /// Sample an action with the environment rng
    pub fn sample_action(&mut self) -> OrderAction {
        self.action_space.sample(&mut self.rng)
    }

    pub fn exchange(&self) -> &E {
        &self.exchange
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn markets(&self) -> &HashMap<String, MarketInfo> {
        &self.markets
    }

    pub fn max_amount(&self) -> f64 {
        self.action_space.max_amount()
    }

    pub fn action_space(&self) -> &OrderSpace {
        &self.action_space
    }

    pub fn observation_space(&self) -> &ObservationSpace {
        &self.observation_space
    }

    /// Observation from the last reset
    pub fn state(&self) -> Option<&Observation> {
        self.state.as_ref()
    }

    /// Book from the last reset
    pub fn last_book(&self) -> Option<&OrderBookSnapshot> {
        self.last_book.as_ref()
    }

    /// Seed currently driving the environment rng
    pub fn current_seed(&self) -> u64 {
        self.seed
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[async_trait]
impl<E: Exchange> Environment for Market<E> {
    type Action = OrderAction;
    type Observation = Observation;

    async fn reset(&mut self) -> Result<Observation, EnvError> {
        if self.closed {
            return Err(EnvError::Closed);
        }

        let book = self.exchange.fetch_order_book(&self.symbol).await?;
        if book.is_empty() {
            tracing::warn!(symbol = %self.symbol, "Fetched an empty order book");
        } else if book.is_crossed() {
            tracing::warn!(symbol = %self.symbol, "Fetched a crossed order book");
        }

        let observation = Observation::from_book(&book);
        tracing::debug!(
            symbol = %self.symbol,
            bids = book.bids.len(),
            asks = book.asks.len(),
            update_id = book.last_update_id,
            "Reset"
        );

        self.last_book = Some(book);
        self.state = Some(observation.clone());
        Ok(observation)
    }

    fn step(&mut self, action: &OrderAction) -> Result<StepResult<Observation>, EnvError> {
        if self.closed {
            return Err(EnvError::Closed);
        }
        if self.state.is_none() {
            return Err(EnvError::NotReset);
        }
        if !self.action_space.contains(action) {
            return Err(EnvError::InvalidAction(format!("{:?}", action)));
        }

        // Transition dynamics and reward are undefined for this environment
        Err(EnvError::NotImplemented("step"))
    }

    fn render(&self, mode: RenderMode) -> Result<Option<String>, EnvError> {
        if self.closed {
            return Err(EnvError::Closed);
        }
        if !METADATA.supports(mode) {
            return Err(EnvError::UnsupportedRenderMode(mode));
        }
        let book = self.last_book.as_ref().ok_or(EnvError::NotReset)?;
        let text = render_ansi(book);

        match mode {
            RenderMode::Human => {
                print!("{}", text);
                Ok(None)
            }
            _ => Ok(Some(text)),
        }
    }

    fn close(&mut self) {
        if !self.closed {
            tracing::info!(symbol = %self.symbol, "Closing market environment");
        }
        self.state = None;
        self.last_book = None;
        self.closed = true;
    }

    fn seed(&mut self, seed: Option<u64>) -> Vec<u64> {
        let (rng, seed) = seeded_rng(seed);
        self.rng = rng;
        self.seed = seed;
        vec![seed]
    }

    fn metadata(&self) -> &'static Metadata {
        &METADATA
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway_in::{ExchangeError, InMemoryExchange};
    use market_core::{OrderType, PriceLevel, Side};
    use rust_decimal_macros::dec;

    fn exchange() -> InMemoryExchange {
        let exchange = InMemoryExchange::new();
        exchange.set_book(
            OrderBookSnapshot::new(
                "BTC/USDT",
                vec![
                    PriceLevel::new(dec!(50000), dec!(1.0)),
                    PriceLevel::new(dec!(49990), dec!(2.0)),
                ],
                vec![PriceLevel::new(dec!(50010), dec!(1.5))],
            )
            .with_update_id(100),
        );
        exchange
    }

    fn valid_action() -> OrderAction {
        OrderAction {
            place_order: true,
            order_type: OrderType::Limit,
            side: Side::Sell,
            amount: 0.5,
            price: 0.5,
        }
    }

    #[tokio::test]
    async fn test_new_resets() {
        let exchange = exchange();
        let market = Market::new(exchange.clone(), "BTC/USDT").await.unwrap();

        assert_eq!(exchange.fetch_count(), 1);
        assert_eq!(market.symbol(), "BTC/USDT");
        assert_eq!(market.max_amount(), 1.0);
        assert!(market.markets().contains_key("BTC/USDT"));

        let state = market.state().unwrap();
        assert_eq!(state.shape(), (3, 3));
        assert_eq!(state.prices().to_vec(), vec![49990.0, 50000.0, 50010.0]);
        assert!(market.observation_space().contains(state));
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let result = Market::new(exchange(), "ETH/USDT").await;
        assert!(matches!(
            result,
            Err(EnvError::UnknownSymbol { ref symbol, .. }) if symbol == "ETH/USDT"
        ));
    }

    #[tokio::test]
    async fn test_unlisting_exchange_defers_to_fetch() {
        // No markets listed: the symbol is only checked when fetching
        let result = Market::new(InMemoryExchange::new(), "BTC/USDT").await;
        assert!(matches!(
            result,
            Err(EnvError::Exchange(ExchangeError::UnknownSymbol(_)))
        ));
    }

    #[tokio::test]
    async fn test_invalid_max_amount() {
        let settings = MarketSettings::new("BTC/USDT").with_max_amount(0.0);
        let result = Market::with_settings(exchange(), settings).await;
        assert!(matches!(result, Err(EnvError::InvalidSettings(_))));
    }

    #[tokio::test]
    async fn test_reset_fetches_fresh_book() {
        let exchange = exchange();
        let mut market = Market::new(exchange.clone(), "BTC/USDT").await.unwrap();

        exchange.set_book(OrderBookSnapshot::new(
            "BTC/USDT",
            vec![PriceLevel::new(dec!(51000), dec!(0.1))],
            vec![],
        ));

        let obs = market.reset().await.unwrap();
        assert_eq!(obs.shape(), (3, 1));
        assert_eq!(obs.column(0), Some((-1.0, 0.1, 51000.0)));
        assert_eq!(market.state(), Some(&obs));
        assert_eq!(exchange.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_seed_makes_sampling_reproducible() {
        let settings = MarketSettings::new("BTC/USDT").with_seed(42);
        let mut a = Market::with_settings(exchange(), settings.clone()).await.unwrap();
        let mut b = Market::with_settings(exchange(), settings).await.unwrap();

        assert_eq!(a.current_seed(), 42);
        for _ in 0..10 {
            assert_eq!(a.sample_action(), b.sample_action());
        }

        assert_eq!(a.seed(Some(7)), vec![7]);
        assert_eq!(b.seed(Some(7)), vec![7]);
        assert_eq!(a.sample_action(), b.sample_action());
    }

    #[tokio::test]
    async fn test_seed_without_value_reports_seed() {
        let mut market = Market::new(exchange(), "BTC/USDT").await.unwrap();
        let seeds = market.seed(None);

        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0], market.current_seed());
    }

    #[tokio::test]
    async fn test_step_is_not_implemented() {
        let mut market = Market::new(exchange(), "BTC/USDT").await.unwrap();
        let result = market.step(&valid_action());
        assert!(matches!(result, Err(EnvError::NotImplemented("step"))));
    }

    #[tokio::test]
    async fn test_step_validates_action() {
        let mut market = Market::new(exchange(), "BTC/USDT").await.unwrap();
        let mut action = valid_action();
        action.amount = 5.0;

        assert!(matches!(
            market.step(&action),
            Err(EnvError::InvalidAction(_))
        ));
    }

    #[tokio::test]
    async fn test_render_modes() {
        let market = Market::new(exchange(), "BTC/USDT").await.unwrap();

        let text = market.render(RenderMode::Ansi).unwrap().unwrap();
        assert!(text.starts_with("BTC/USDT (update 100"));
        assert!(text.contains("50010"));

        assert!(market.render(RenderMode::Human).unwrap().is_none());
        assert!(matches!(
            market.render(RenderMode::RgbArray),
            Err(EnvError::UnsupportedRenderMode(RenderMode::RgbArray))
        ));
    }

    #[tokio::test]
    async fn test_close() {
        let mut market = Market::new(exchange(), "BTC/USDT").await.unwrap();
        market.close();

        assert!(market.is_closed());
        assert!(market.state().is_none());
        assert!(matches!(market.reset().await, Err(EnvError::Closed)));
        assert!(matches!(market.step(&valid_action()), Err(EnvError::Closed)));
        assert!(matches!(
            market.render(RenderMode::Ansi),
            Err(EnvError::Closed)
        ));
        assert!(matches!(
            market.render(RenderMode::Human),
            Err(EnvError::Closed)
        ));
    }

    #[tokio::test]
    async fn test_metadata_and_reward_range() {
        let market = Market::new(exchange(), "BTC/USDT").await.unwrap();

        assert_eq!(
            market.metadata().render_modes,
            &[RenderMode::Human, RenderMode::Ansi]
        );
        assert_eq!(market.reward_range(), (f64::NEG_INFINITY, f64::INFINITY));
    }
}
