// src/market.rs
use std::collections::BTreeMap;

use rand::Rng;

use crate::models::StockQuote;

/// Prices never drop below this after a randomization pass.
const PRICE_FLOOR: f64 = 1.00;

/// The mock market: a fixed set of quotes, mutated in place by
/// `randomize_once`. Quotes are kept in seed order so the rendered
/// page lists them the same way every time.
pub struct Market {
    quotes: Vec<StockQuote>,
}

impl Market {
    pub fn new(quotes: Vec<StockQuote>) -> Self {
        Market { quotes }
    }

    /// The fixed seed list. Quotes are never added or removed after this.
    pub fn seed() -> Self {
        Market::new(vec![
            StockQuote::new("AAPL", "Apple Inc.", 180.25),
            StockQuote::new("TSLA", "Tesla Inc.", 240.50),
            StockQuote::new("AMZN", "Amazon.com Inc.", 135.10),
            StockQuote::new("GOOG", "Alphabet Inc.", 155.80),
        ])
    }

    pub fn quotes(&self) -> &[StockQuote] {
        &self.quotes
    }

    pub fn price_of(&self, symbol: &str) -> Option<f64> {
        self.quotes
            .iter()
            .find(|quote| quote.symbol == symbol)
            .map(|quote| quote.price)
    }

    /// Snapshot of symbol -> price for the JSON prices response.
    pub fn current_prices(&self) -> BTreeMap<String, f64> {
        self.quotes
            .iter()
            .map(|quote| (quote.symbol.clone(), quote.price))
            .collect()
    }

    /// Nudges every price by a uniform delta in [-1.0, +1.0], clamped to
    /// the floor and rounded to cents. Called once per price fetch.
    pub fn randomize_once(&mut self) {
        let mut rng = rand::thread_rng();
        for quote in &mut self.quotes {
            let delta: f64 = rng.gen_range(-1.0..=1.0);
            quote.price = round_cents((quote.price + delta).max(PRICE_FLOOR));
        }
    }
}

fn round_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_market_has_expected_quotes() {
        let market = Market::seed();
        let symbols: Vec<&str> = market
            .quotes()
            .iter()
            .map(|q| q.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["AAPL", "TSLA", "AMZN", "GOOG"]);
        assert_eq!(market.price_of("AAPL"), Some(180.25));
        assert_eq!(market.price_of("XYZ"), None);
    }

    #[test]
    fn randomize_never_drops_below_floor() {
        let mut market = Market::new(vec![
            StockQuote::new("PENNY", "Penny Corp.", 0.0),
            StockQuote::new("CHEAP", "Cheap Corp.", 1.40),
        ]);
        for _ in 0..200 {
            market.randomize_once();
            for quote in market.quotes() {
                assert!(
                    quote.price >= PRICE_FLOOR,
                    "price {} fell below the floor",
                    quote.price
                );
            }
        }
    }

    #[test]
    fn randomize_moves_price_by_at_most_one() {
        let mut market = Market::seed();
        for _ in 0..50 {
            let before: Vec<f64> = market.quotes().iter().map(|q| q.price).collect();
            market.randomize_once();
            for (quote, old) in market.quotes().iter().zip(before) {
                // Delta is bounded by 1.0; rounding can add half a cent.
                assert!((quote.price - old).abs() <= 1.005 + 1e-9);
            }
        }
    }

    #[test]
    fn randomize_keeps_prices_on_cent_boundaries() {
        let mut market = Market::seed();
        for _ in 0..50 {
            market.randomize_once();
            for quote in market.quotes() {
                let cents = quote.price * 100.0;
                assert!((cents - cents.round()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn current_prices_covers_every_symbol() {
        let market = Market::seed();
        let prices = market.current_prices();
        assert_eq!(prices.len(), 4);
        assert_eq!(prices.get("TSLA"), Some(&240.50));
    }
}
