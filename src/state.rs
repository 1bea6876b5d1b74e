// src/state.rs
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::BuyError;
use crate::market::Market;
use crate::models::BuyReceipt;
use crate::portfolio::Portfolio;

/// Handle the HTTP surface shares. One mutex guards both the market and
/// the portfolio, so render, buy, and randomize each run as a single
/// critical section and concurrent buys cannot lose updates.
pub type SharedState = Arc<Mutex<TradingState>>;

pub struct TradingState {
    pub market: Market,
    pub portfolio: Portfolio,
}

impl TradingState {
    pub fn new() -> Self {
        TradingState {
            market: Market::seed(),
            portfolio: Portfolio::new(),
        }
    }

    pub fn shared() -> SharedState {
        Arc::new(Mutex::new(TradingState::new()))
    }

    /// Buys one share of `symbol` at its current market price.
    pub fn buy(&mut self, symbol: &str) -> Result<BuyReceipt, BuyError> {
        let price = self
            .market
            .price_of(symbol)
            .ok_or(BuyError::UnknownSymbol)?;
        self.portfolio.buy(symbol, price)
    }
}
