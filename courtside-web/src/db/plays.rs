//! Play-by-play queries

use courtside_common::models::Play;
use courtside_common::Result;
use sqlx::SqlitePool;

/// Full chronological play log of one game, ordered by event number.
pub async fn plays_for_game(pool: &SqlitePool, game_id: &str) -> Result<Vec<Play>> {
    let plays = sqlx::query_as::<_, Play>(
        "SELECT \
             CAST(eventnum AS INTEGER) AS event_num, \
             CAST(period AS INTEGER) AS period, \
             CAST(pctimestring AS TEXT) AS clock, \
             CAST(score AS TEXT) AS score, \
             CAST(homedescription AS TEXT) AS home_description, \
             CAST(neutraldescription AS TEXT) AS neutral_description, \
             CAST(visitordescription AS TEXT) AS visitor_description, \
             CAST(player1_name AS TEXT) AS player1_name, \
             CAST(player2_name AS TEXT) AS player2_name, \
             CAST(player3_name AS TEXT) AS player3_name \
         FROM play_by_play \
         WHERE game_id = ? \
         ORDER BY eventnum ASC",
    )
    .bind(game_id)
    .fetch_all(pool)
    .await?;
    Ok(plays)
}
