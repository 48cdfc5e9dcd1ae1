use thiserror::Error;

use super::traits::RenderMode;
use crate::gateway_in::ExchangeError;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("Symbol {symbol} is not listed on {exchange}")]
    UnknownSymbol { symbol: String, exchange: String },

    #[error("Environment must be reset first")]
    NotReset,

    #[error("Environment is closed")]
    Closed,

    #[error("Action is outside the action space: {0}")]
    InvalidAction(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Render mode {0} is not supported")]
    UnsupportedRenderMode(RenderMode),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
