//! Player queries
//!
//! Roster listings filter to active roster status, matching the site's
//! roster tables.

use courtside_common::models::Player;
use courtside_common::Result;
use sqlx::SqlitePool;

const PLAYER_COLUMNS: &str = "CAST(person_id AS TEXT) AS id, \
     first_name, last_name, \
     display_first_last AS full_name, \
     COALESCE(position, '') AS position, \
     COALESCE(jersey, '') AS jersey, \
     COALESCE(height, '') AS height, \
     COALESCE(weight, '') AS weight, \
     COALESCE(CAST(birthdate AS TEXT), '') AS birthdate, \
     CAST(team_id AS TEXT) AS team_id";

/// All active players, ordered by last then first name.
pub async fn all_players(pool: &SqlitePool) -> Result<Vec<Player>> {
    let sql = format!(
        "SELECT {} FROM common_player_info \
         WHERE rosterstatus = 'Active' \
         ORDER BY last_name, first_name",
        PLAYER_COLUMNS
    );
    let players = sqlx::query_as::<_, Player>(&sql).fetch_all(pool).await?;
    Ok(players)
}

/// Active roster of one team.
pub async fn players_by_team(pool: &SqlitePool, team_id: &str) -> Result<Vec<Player>> {
    let sql = format!(
        "SELECT {} FROM common_player_info \
         WHERE team_id = ? AND rosterstatus = 'Active' \
         ORDER BY last_name, first_name",
        PLAYER_COLUMNS
    );
    let players = sqlx::query_as::<_, Player>(&sql)
        .bind(team_id)
        .fetch_all(pool)
        .await?;
    Ok(players)
}

/// Look up a player by id, active or not.
pub async fn player_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Player>> {
    let sql = format!(
        "SELECT {} FROM common_player_info WHERE person_id = ?",
        PLAYER_COLUMNS
    );
    let player = sqlx::query_as::<_, Player>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(player)
}
