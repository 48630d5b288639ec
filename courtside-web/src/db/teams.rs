//! Team queries

use courtside_common::models::Team;
use courtside_common::Result;
use sqlx::SqlitePool;

// The dataset stores ids and years with mixed affinities; CAST pins the
// decoded types.
const TEAM_COLUMNS: &str = "CAST(id AS TEXT) AS id, \
     full_name, abbreviation, nickname, city, state, \
     CAST(year_founded AS INTEGER) AS year_founded";

/// All teams, ordered by city then nickname.
pub async fn all_teams(pool: &SqlitePool) -> Result<Vec<Team>> {
    let sql = format!("SELECT {} FROM team ORDER BY city, nickname", TEAM_COLUMNS);
    let teams = sqlx::query_as::<_, Team>(&sql).fetch_all(pool).await?;
    Ok(teams)
}

/// Look up a team by id.
pub async fn team_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Team>> {
    let sql = format!("SELECT {} FROM team WHERE id = ?", TEAM_COLUMNS);
    let team = sqlx::query_as::<_, Team>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(team)
}

/// Look up a team by its three-letter abbreviation.
pub async fn team_by_abbreviation(pool: &SqlitePool, abbreviation: &str) -> Result<Option<Team>> {
    let sql = format!("SELECT {} FROM team WHERE abbreviation = ?", TEAM_COLUMNS);
    let team = sqlx::query_as::<_, Team>(&sql)
        .bind(abbreviation)
        .fetch_optional(pool)
        .await?;
    Ok(team)
}
