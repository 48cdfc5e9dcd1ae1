use async_trait::async_trait;
use market_core::{DepthSnapshotEvent, OrderBookSnapshot};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Duration;

use super::dto::{ApiErrorBody, ExchangeInfoResponse};
use crate::gateway_in::config::ExchangeConfig;
use crate::gateway_in::domain::{Exchange, ExchangeError, ExchangeId, MarketInfo, native_symbol};

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Binance-compatible REST adapter
///
/// Talks to Binance itself or to anything speaking its `/api/v3` dialect,
/// such as the exchange simulator.
pub struct RestClient {
    id: ExchangeId,
    base_url: String,
    api_key: String,
    depth_limit: u32,
    http: reqwest::Client,
    /// Unified symbol -> exchange id, filled by `load_markets`
    symbol_ids: RwLock<HashMap<String, String>>,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_http(base_url, api_key, reqwest::Client::new())
    }

    fn with_http(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        http: reqwest::Client,
    ) -> Self {
        RestClient {
            id: ExchangeId::binance(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            depth_limit: 100,
            http,
            symbol_ids: RwLock::new(HashMap::new()),
        }
    }

    /// Build a client from the `exchange` section of the config file
    pub fn from_config(config: &ExchangeConfig) -> Result<Self, ExchangeError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self::with_http(&config.rest_url, &config.api_key, http)
            .with_id(config.id.as_str())
            .with_depth_limit(config.depth_limit))
    }

    pub fn with_id(mut self, id: impl Into<ExchangeId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_depth_limit(mut self, limit: u32) -> Self {
        self.depth_limit = limit;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    /// Native id for a unified symbol
    fn resolve(&self, symbol: &str) -> String {
        self.symbol_ids
            .read()
            .get(symbol)
            .cloned()
            .unwrap_or_else(|| native_symbol(symbol))
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let request = self.http.get(format!("{}{}", self.base_url, path));
        if self.api_key.is_empty() {
            request
        } else {
            request.header(API_KEY_HEADER, &self.api_key)
        }
    }

    /// Turn a non-2xx response into an error, parsing Binance's error body
    async fn check(
        response: reqwest::Response,
        symbol: Option<&str>,
    ) -> Result<reqwest::Response, ExchangeError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match (serde_json::from_str::<ApiErrorBody>(&body), symbol) {
            (Ok(err), Some(symbol)) if err.code == ApiErrorBody::INVALID_SYMBOL => {
                Err(ExchangeError::UnknownSymbol(symbol.to_string()))
            }
            (Ok(err), _) => Err(ExchangeError::Api {
                status: status.as_u16(),
                message: format!("{} ({})", err.msg, err.code),
            }),
            (Err(_), _) => Err(ExchangeError::Api {
                status: status.as_u16(),
                message: body,
            }),
        }
    }
}

#[async_trait]
impl Exchange for RestClient {
    fn id(&self) -> &ExchangeId {
        &self.id
    }

    async fn load_markets(&self) -> Result<Vec<MarketInfo>, ExchangeError> {
        let response = self.get("/api/v3/exchangeInfo").send().await?;
        let info: ExchangeInfoResponse = Self::check(response, None).await?.json().await?;

        let markets: Vec<MarketInfo> = info.symbols.iter().map(MarketInfo::from).collect();

        let mut ids = self.symbol_ids.write();
        ids.clear();
        ids.extend(markets.iter().map(|m| (m.symbol.clone(), m.id.clone())));

        tracing::info!(exchange = %self.id, markets = markets.len(), "Loaded markets");
        Ok(markets)
    }

    async fn fetch_order_book(&self, symbol: &str) -> Result<OrderBookSnapshot, ExchangeError> {
        let native = self.resolve(symbol);
        tracing::debug!(exchange = %self.id, symbol, native = %native, "Fetching order book");

        let response = self
            .get("/api/v3/depth")
            .query(&[
                ("symbol", native),
                ("limit", self.depth_limit.to_string()),
            ])
            .send()
            .await?;

        let depth: DepthSnapshotEvent = Self::check(response, Some(symbol)).await?.json().await?;
        Ok(depth.into_snapshot(symbol)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trimmed() {
        let client = RestClient::new("http://localhost:8080/", "");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.depth_limit(), 100);
        assert_eq!(client.id(), &ExchangeId::binance());
    }

    #[test]
    fn test_resolve_falls_back_to_stripped_symbol() {
        let client = RestClient::new("http://localhost:8080", "");
        assert_eq!(client.resolve("BTC/USDT"), "BTCUSDT");

        client
            .symbol_ids
            .write()
            .insert("XBT/USD".to_string(), "XXBTZUSD".to_string());
        assert_eq!(client.resolve("XBT/USD"), "XXBTZUSD");
    }

    #[test]
    fn test_from_config() {
        let config: ExchangeConfig = serde_json::from_str(
            r#"{ "id": "Simulator", "rest_url": "http://localhost:8080", "depth_limit": 5 }"#,
        )
        .unwrap();

        let client = RestClient::from_config(&config).unwrap();
        assert_eq!(client.id(), &ExchangeId::simulator());
        assert_eq!(client.depth_limit(), 5);
    }
}
