//! Play-by-play API
//!
//! Serves one game's full play log together with its scoring-segment
//! breakdown, so clients can page through segments without recomputing
//! them.

use axum::{
    extract::{Path, State},
    Json,
};
use courtside_common::models::Play;
use courtside_common::pbp;
use serde::Serialize;

use crate::api::ApiError;
use crate::{db, AppState};

/// One scoring segment, summarized by position and size
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSummary {
    pub index: usize,
    pub period: i64,
    pub play_count: usize,
    /// Score snapshot of the closing play, absent for a trailing segment
    pub closing_score: Option<String>,
}

/// Play log response for one game
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlayResponse {
    pub game_id: String,
    pub total_plays: usize,
    pub segment_count: usize,
    pub segments: Vec<SegmentSummary>,
    pub plays: Vec<Play>,
}

/// GET /api/games/:id/plays
pub async fn get_game_plays(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<PlayByPlayResponse>, ApiError> {
    let game = db::games::game_by_id(&state.db, &game_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Game not found".to_string()))?;

    let plays = db::plays::plays_for_game(&state.db, &game.id).await?;
    let segments = pbp::segment_plays(plays.clone());

    let summaries = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| SegmentSummary {
            index,
            period: segment.period,
            play_count: segment.plays.len(),
            closing_score: segment.plays.last().and_then(|p| p.score.clone()),
        })
        .collect();

    Ok(Json(PlayByPlayResponse {
        game_id: game.id,
        total_plays: plays.len(),
        segment_count: segments.len(),
        segments: summaries,
        plays,
    }))
}
