// src/portfolio.rs
use crate::error::BuyError;
use crate::models::{BuyReceipt, Holding};

/// Cash the portfolio starts with on every process start.
pub const INITIAL_BALANCE: f64 = 10_000.00;

/// The single user's cash balance and positions. Holdings are unique by
/// symbol and stay in the order they were first bought.
pub struct Portfolio {
    pub balance: f64,
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Portfolio {
            balance: INITIAL_BALANCE,
            holdings: Vec::new(),
        }
    }

    /// Buys one share of `symbol` at `price`: debits the balance, then
    /// increments the matching holding (revaluing it at the current
    /// price) or appends a new one. The balance check happens before any
    /// mutation, so a failed buy leaves the portfolio untouched.
    pub fn buy(&mut self, symbol: &str, price: f64) -> Result<BuyReceipt, BuyError> {
        if self.balance < price {
            return Err(BuyError::InsufficientBalance);
        }
        self.balance -= price;

        let shares_owned = match self.holdings.iter_mut().find(|h| h.symbol == symbol) {
            Some(holding) => {
                holding.shares += 1;
                holding.value = holding.shares as f64 * price;
                holding.shares
            }
            None => {
                self.holdings.push(Holding {
                    symbol: symbol.to_string(),
                    shares: 1,
                    value: price,
                });
                1
            }
        };

        Ok(BuyReceipt {
            shares_owned,
            price_paid: price,
        })
    }
}
