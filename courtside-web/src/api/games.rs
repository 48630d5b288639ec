//! Games API

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::ApiError;
use crate::{db, AppState};

/// Query parameters for game lookup
#[derive(Debug, Deserialize)]
pub struct GameQuery {
    pub id: Option<String>,
    #[serde(rename = "teamId")]
    pub team_id: Option<String>,
}

/// GET /api/games
///
/// Returns a single game when `?id=` is given, one team's games when
/// `?teamId=` is given, and all games otherwise. Lists are most recent
/// first.
pub async fn get_games(
    State(state): State<AppState>,
    Query(query): Query<GameQuery>,
) -> Result<Response, ApiError> {
    if let Some(id) = query.id.as_deref() {
        let game = db::games::game_by_id(&state.db, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Game not found".to_string()))?;
        return Ok(Json(game).into_response());
    }

    if let Some(team_id) = query.team_id.as_deref() {
        let games = db::games::games_by_team(&state.db, team_id, None).await?;
        return Ok(Json(games).into_response());
    }

    let games = db::games::all_games(&state.db).await?;
    Ok(Json(games).into_response())
}
