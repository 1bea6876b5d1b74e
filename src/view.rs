// src/view.rs
use crate::models::{Holding, StockQuote};
use crate::state::TradingState;

const PAGE_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>My Investment Portfolio</title>
    <style>
        body { font-family: Arial; background: #f6f8fa; padding: 20px; }
        h1 { color: #333; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { padding: 12px; border-bottom: 1px solid #ddd; text-align: left; }
        button { background: #007bff; color: white; padding: 8px 14px; border: none; border-radius: 5px; cursor: pointer; }
        button:hover { background: #0056b3; }
        .balance { margin-top: 10px; font-size: 18px; }
    </style>
</head>
<body>
    <h1>📈 My Investment Portfolio</h1>
"##;

const PAGE_SCRIPT: &str = r##"
    <script>
        async function buyStock(symbol) {
            const res = await fetch('/buy', {
                method: 'POST',
                headers: {'Content-Type': 'application/json'},
                body: JSON.stringify({symbol})
            });
            const data = await res.json();
            alert(data.message);
            location.reload();
        }

        setInterval(async () => {
            const res = await fetch('/prices');
            const prices = await res.json();
            for (const [symbol, price] of Object.entries(prices)) {
                document.getElementById(symbol + '-price').innerText = price.toFixed(2);
            }
        }, 5000);
    </script>
</body>
</html>
"##;

/// Renders the whole portfolio page: balance, the stock table with a Buy
/// button per symbol, the holdings table, and the client script that
/// posts buys and polls `/prices` every five seconds.
pub fn render_index(state: &TradingState) -> String {
    let mut page = String::with_capacity(4096);
    page.push_str(PAGE_HEAD);

    page.push_str(&format!(
        "    <div class=\"balance\">Available Balance: $<span id=\"balance\">{:.2}</span></div>\n",
        state.portfolio.balance
    ));

    page.push_str("\n    <h2>Available Stocks</h2>\n    <table>\n");
    page.push_str("        <tr><th>Symbol</th><th>Name</th><th>Current Price</th><th>Action</th></tr>\n");
    for quote in state.market.quotes() {
        page.push_str(&stock_row(quote));
    }
    page.push_str("    </table>\n");

    page.push_str("\n    <h2>Your Holdings</h2>\n    <table id=\"holdingsTable\">\n");
    page.push_str("        <tr><th>Symbol</th><th>Shares</th><th>Value</th></tr>\n");
    for holding in &state.portfolio.holdings {
        page.push_str(&holding_row(holding));
    }
    page.push_str("    </table>\n");

    page.push_str(PAGE_SCRIPT);
    page
}

fn stock_row(quote: &StockQuote) -> String {
    let symbol = escape_html(&quote.symbol);
    format!(
        "        <tr>\n            <td>{symbol}</td>\n            <td>{name}</td>\n            \
         <td>$<span id=\"{symbol}-price\">{price:.2}</span></td>\n            \
         <td><button onclick=\"buyStock('{symbol}')\">Buy</button></td>\n        </tr>\n",
        symbol = symbol,
        name = escape_html(&quote.name),
        price = quote.price,
    )
}

fn holding_row(holding: &Holding) -> String {
    format!(
        "        <tr>\n            <td>{symbol}</td>\n            <td>{shares}</td>\n            \
         <td>${value:.2}</td>\n        </tr>\n",
        symbol = escape_html(&holding.symbol),
        shares = holding.shares,
        value = holding.value,
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_lists_balance_and_every_stock() {
        let state = TradingState::new();
        let page = render_index(&state);

        assert!(page.contains("Available Balance: $<span id=\"balance\">10000.00</span>"));
        for symbol in ["AAPL", "TSLA", "AMZN", "GOOG"] {
            assert!(page.contains(&format!("id=\"{symbol}-price\"")));
            assert!(page.contains(&format!("buyStock('{symbol}')")));
        }
        assert!(page.contains("Tesla Inc."));
        assert!(page.contains("id=\"holdingsTable\""));
    }

    #[test]
    fn page_shows_holdings_with_two_decimal_values() {
        let mut state = TradingState::new();
        state.buy("AAPL").unwrap();
        state.buy("AAPL").unwrap();

        let page = render_index(&state);
        assert!(page.contains("<td>2</td>"));
        assert!(page.contains("$360.50"));
        assert!(page.contains("9639.50"));
    }

    #[test]
    fn page_polls_prices_and_posts_buys() {
        let page = render_index(&TradingState::new());
        assert!(page.contains("fetch('/prices')"));
        assert!(page.contains("fetch('/buy'"));
        assert!(page.contains("5000"));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        assert_eq!(
            escape_html(r#"<b>"A&B's"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&#39;s&quot;&lt;/b&gt;"
        );
    }
}
