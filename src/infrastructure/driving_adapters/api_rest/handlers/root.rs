//! Root Handler

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::infrastructure::driving_adapters::api_rest::AppState;

/// Welcome message returned by `GET /`
#[derive(Debug, Serialize)]
pub struct WelcomeDto {
    pub message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}

/// GET / - Welcome message
async fn root() -> Json<WelcomeDto> {
    Json(WelcomeDto {
        message: "Welcome to the Passenger/Flight API.",
    })
}
