// src/api.rs
use log::info;
use serde_json::json;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::models::BuyRequest;
use crate::state::SharedState;
use crate::view;

pub fn routes(
    state: SharedState,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(index_handler);

    let buy = warp::path("buy")
        .and(warp::post())
        .and(with_state(state.clone()))
        .and(warp::body::json())
        .and_then(buy_handler);

    let prices = warp::path("prices")
        .and(warp::get())
        .and(with_state(state))
        .and_then(prices_handler);

    index.or(buy).or(prices)
}

fn with_state(
    state: SharedState,
) -> impl Filter<Extract = (SharedState,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || state.clone())
}

async fn index_handler(state: SharedState) -> Result<impl Reply, Rejection> {
    let state = state.lock().await;
    Ok(warp::reply::html(view::render_index(&state)))
}

async fn buy_handler(state: SharedState, request: BuyRequest) -> Result<impl Reply, Rejection> {
    let symbol = request.symbol.unwrap_or_default();
    let mut state = state.lock().await;
    match state.buy(&symbol) {
        Ok(receipt) => {
            info!(
                "Bought 1 share of {} at {:.2}, balance now {:.2}",
                symbol, receipt.price_paid, state.portfolio.balance
            );
            Ok(message_reply(
                &format!(
                    "Bought 1 share of {} for ${:.2}",
                    symbol, receipt.price_paid
                ),
                StatusCode::OK,
            ))
        }
        Err(e) => {
            info!("Buy of {:?} rejected: {}", symbol, e);
            Ok(message_reply(&e.to_string(), StatusCode::BAD_REQUEST))
        }
    }
}

async fn prices_handler(state: SharedState) -> Result<impl Reply, Rejection> {
    let mut state = state.lock().await;
    state.market.randomize_once();
    Ok(warp::reply::json(&state.market.current_prices()))
}

fn message_reply(message: &str, status: StatusCode) -> impl Reply {
    warp::reply::with_status(warp::reply::json(&json!({ "message": message })), status)
}
