//! Teams API

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::ApiError;
use crate::{db, AppState};

/// Query parameters for team lookup
#[derive(Debug, Deserialize)]
pub struct TeamQuery {
    /// Three-letter abbreviation, e.g. "LAL"
    pub abbreviation: Option<String>,
    pub id: Option<String>,
}

/// GET /api/teams
///
/// Returns a single team when `?abbreviation=` or `?id=` is given, the
/// full team list otherwise.
pub async fn get_teams(
    State(state): State<AppState>,
    Query(query): Query<TeamQuery>,
) -> Result<Response, ApiError> {
    if let Some(abbreviation) = query.abbreviation.as_deref() {
        let team = db::teams::team_by_abbreviation(&state.db, abbreviation)
            .await?
            .ok_or_else(|| ApiError::NotFound("Team not found".to_string()))?;
        return Ok(Json(team).into_response());
    }

    if let Some(id) = query.id.as_deref() {
        let team = db::teams::team_by_id(&state.db, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Team not found".to_string()))?;
        return Ok(Json(team).into_response());
    }

    let teams = db::teams::all_teams(&state.db).await?;
    Ok(Json(teams).into_response())
}
