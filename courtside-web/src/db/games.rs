//! Game queries
//!
//! Games join both team names plus the home city and attendance, so one
//! record carries everything the schedule tables and game header need.

use courtside_common::models::Game;
use courtside_common::Result;
use sqlx::SqlitePool;

const GAME_SELECT: &str = "SELECT \
     CAST(g.game_id AS TEXT) AS id, \
     CAST(g.game_date AS TEXT) AS game_date, \
     CAST(g.team_id_home AS TEXT) AS home_team_id, \
     COALESCE(ht.full_name, '') AS home_team_name, \
     COALESCE(CAST(g.pts_home AS INTEGER), 0) AS home_team_score, \
     CAST(g.team_id_away AS TEXT) AS visitor_team_id, \
     COALESCE(vt.full_name, '') AS visitor_team_name, \
     COALESCE(CAST(g.pts_away AS INTEGER), 0) AS visitor_team_score, \
     CAST(g.season_id AS TEXT) AS season, \
     COALESCE(t.city, '') AS city, \
     CAST(gi.attendance AS INTEGER) AS attendance \
     FROM game g \
     LEFT JOIN team ht ON g.team_id_home = ht.id \
     LEFT JOIN team vt ON g.team_id_away = vt.id \
     LEFT JOIN team t ON g.team_id_home = t.id \
     LEFT JOIN game_info gi ON g.game_id = gi.game_id";

/// All games, most recent first.
pub async fn all_games(pool: &SqlitePool) -> Result<Vec<Game>> {
    let sql = format!("{} ORDER BY g.game_date DESC", GAME_SELECT);
    let games = sqlx::query_as::<_, Game>(&sql).fetch_all(pool).await?;
    Ok(games)
}

/// Look up a game by id.
pub async fn game_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Game>> {
    let sql = format!("{} WHERE g.game_id = ?", GAME_SELECT);
    let game = sqlx::query_as::<_, Game>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(game)
}

/// Games a team played (home or away), optionally filtered to one season,
/// most recent first.
pub async fn games_by_team(
    pool: &SqlitePool,
    team_id: &str,
    season: Option<&str>,
) -> Result<Vec<Game>> {
    let mut sql = format!(
        "{} WHERE (g.team_id_home = ? OR g.team_id_away = ?)",
        GAME_SELECT
    );
    if season.is_some() {
        sql.push_str(" AND g.season_id = ?");
    }
    sql.push_str(" ORDER BY g.game_date DESC");

    let mut query = sqlx::query_as::<_, Game>(&sql).bind(team_id).bind(team_id);
    if let Some(season) = season {
        query = query.bind(season);
    }

    let games = query.fetch_all(pool).await?;
    Ok(games)
}

/// Season ids present in the schedule, newest first. With a team id, only
/// the seasons that team appears in.
pub async fn seasons_for_team(pool: &SqlitePool, team_id: Option<&str>) -> Result<Vec<String>> {
    let mut sql = String::from("SELECT DISTINCT CAST(season_id AS TEXT) AS season FROM game");
    if team_id.is_some() {
        sql.push_str(" WHERE team_id_home = ? OR team_id_away = ?");
    }
    sql.push_str(" ORDER BY season DESC");

    let mut query = sqlx::query_scalar::<_, String>(&sql);
    if let Some(team_id) = team_id {
        query = query.bind(team_id).bind(team_id);
    }

    let seasons = query.fetch_all(pool).await?;
    Ok(seasons)
}
