//! courtside-web library - read-only statistics browsing service
//!
//! Serves the HTML site (team index, team pages, game pages with the
//! play-by-play viewer) and the JSON API over a static SQLite database.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod pages;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (read-only)
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(pages::redirect_to_teams))
        .route("/teams", get(pages::teams_index))
        .route("/teams/:abbreviation", get(pages::team_page))
        .route("/games/:id", get(pages::game_page))
        .route("/api/teams", get(api::get_teams))
        .route("/api/players", get(api::get_players))
        .route("/api/games", get(api::get_games))
        .route("/api/games/:id/plays", get(api::get_game_plays))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
