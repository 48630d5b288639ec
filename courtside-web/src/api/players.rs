//! Players API

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::ApiError;
use crate::{db, AppState};

/// Query parameters for player lookup
#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    pub id: Option<String>,
    #[serde(rename = "teamId")]
    pub team_id: Option<String>,
}

/// GET /api/players
///
/// Returns a single player when `?id=` is given, one team's active roster
/// when `?teamId=` is given, and all active players otherwise.
pub async fn get_players(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Response, ApiError> {
    if let Some(id) = query.id.as_deref() {
        let player = db::players::player_by_id(&state.db, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Player not found".to_string()))?;
        return Ok(Json(player).into_response());
    }

    if let Some(team_id) = query.team_id.as_deref() {
        let players = db::players::players_by_team(&state.db, team_id).await?;
        return Ok(Json(players).into_response());
    }

    let players = db::players::all_players(&state.db).await?;
    Ok(Json(players).into_response())
}
