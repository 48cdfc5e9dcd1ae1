mod dto;
mod in_memory;
mod rest_client;

pub use dto::{ApiErrorBody, ExchangeInfoResponse, SymbolDto};
pub use in_memory::InMemoryExchange;
pub use rest_client::RestClient;
