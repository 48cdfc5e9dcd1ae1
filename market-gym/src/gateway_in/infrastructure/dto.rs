//! Binance REST response bodies consumed by [`super::RestClient`].

use serde::{Deserialize, Serialize};

use crate::gateway_in::domain::MarketInfo;

/// `GET /api/v3/exchangeInfo` (only the fields the gym reads)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfoResponse {
    #[serde(default)]
    pub symbols: Vec<SymbolDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDto {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub quote_asset: String,
}

impl From<&SymbolDto> for MarketInfo {
    fn from(dto: &SymbolDto) -> Self {
        MarketInfo {
            symbol: format!("{}/{}", dto.base_asset, dto.quote_asset),
            id: dto.symbol.clone(),
            base: dto.base_asset.clone(),
            quote: dto.quote_asset.clone(),
            active: dto.status == "TRADING",
        }
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: i32,
    pub msg: String,
}

impl ApiErrorBody {
    /// Binance `-1121 Invalid symbol`
    pub const INVALID_SYMBOL: i32 = -1121;
}
