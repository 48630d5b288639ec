//! HTTP API handlers for courtside-web

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub mod buildinfo;
pub mod games;
pub mod health;
pub mod players;
pub mod plays;
pub mod teams;

pub use buildinfo::get_build_info;
pub use games::get_games;
pub use health::health_routes;
pub use players::get_players;
pub use plays::get_game_plays;
pub use teams::get_teams;

/// API errors shared by the JSON handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Database(String),
}

impl From<courtside_common::Error> for ApiError {
    fn from(e: courtside_common::Error) -> Self {
        match e {
            courtside_common::Error::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Database(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Database(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
