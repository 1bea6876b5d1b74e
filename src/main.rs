// src/main.rs
mod api;
mod error;
mod market;
mod models;
mod portfolio;
mod state;
mod view;

use env_logger::Builder;
use log::{info, LevelFilter};
use warp::Filter;

use crate::state::TradingState;

#[tokio::main]
async fn main() {
    Builder::new()
        .filter_level(LevelFilter::Debug)
        .format_timestamp_secs()
        .init();

    info!("Starting the paper trading server...");
    let state = TradingState::shared();

    // Define routes
    let api = api::routes(state).recover(error::handle_rejection);

    // Start the server
    info!("Server running on http://127.0.0.1:3030");
    warp::serve(api).run(([127, 0, 0, 1], 3030)).await;
}
