// src/models.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
}

impl StockQuote {
    pub fn new(symbol: &str, name: &str, price: f64) -> Self {
        StockQuote {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub symbol: String,
    pub shares: u32,
    pub value: f64,
}

/// Body of `POST /buy`. The symbol is optional so a request without the
/// field resolves to an unknown symbol instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct BuyRequest {
    pub symbol: Option<String>,
}

/// Outcome of a successful buy: the updated share count and the price paid.
#[derive(Debug, Clone, Copy)]
pub struct BuyReceipt {
    pub shares_owned: u32,
    pub price_paid: f64,
}
