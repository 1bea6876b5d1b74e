// src/error.rs
use std::convert::Infallible;
use std::fmt;

use log::error;
use serde_json::json;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

/// The two ways a buy can be refused. Both surface as HTTP 400 with the
/// message below; neither is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyError {
    UnknownSymbol,
    InsufficientBalance,
}

impl fmt::Display for BuyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuyError::UnknownSymbol => write!(f, "Invalid stock symbol."),
            BuyError::InsufficientBalance => write!(f, "Not enough balance."),
        }
    }
}

impl std::error::Error for BuyError {}

/// Turns warp rejections into JSON responses so a malformed request body
/// comes back as a 400 instead of bubbling up as a 500.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (message, status) = if err.is_not_found() {
        ("Not found.", StatusCode::NOT_FOUND)
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        ("Invalid request body.", StatusCode::BAD_REQUEST)
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ("Method not allowed.", StatusCode::METHOD_NOT_ALLOWED)
    } else {
        error!("Unhandled rejection: {:?}", err);
        ("Internal server error.", StatusCode::INTERNAL_SERVER_ERROR)
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&json!({ "message": message })),
        status,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_errors_render_user_facing_messages() {
        assert_eq!(BuyError::UnknownSymbol.to_string(), "Invalid stock symbol.");
        assert_eq!(
            BuyError::InsufficientBalance.to_string(),
            "Not enough balance."
        );
    }
}
