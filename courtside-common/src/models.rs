//! Typed records for the entities served by the site.
//!
//! Every record has named fields only; variance in how the static dataset
//! stores a column (TEXT vs INTEGER) is absorbed by CAST in the queries that
//! produce these records, never by dynamic typing here. JSON field names
//! follow the public API convention (camelCase).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A franchise.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub full_name: String,
    pub abbreviation: String,
    pub nickname: String,
    pub city: String,
    pub state: String,
    pub year_founded: i64,
}

/// An active-roster player.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub position: String,
    pub jersey: String,
    /// Feet-inches string as stored, e.g. "6-10"
    pub height: String,
    pub weight: String,
    pub birthdate: String,
    pub team_id: String,
}

/// One game, joined with both team names and venue info.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub game_date: String,
    pub home_team_id: String,
    pub home_team_name: String,
    pub home_team_score: i64,
    pub visitor_team_id: String,
    pub visitor_team_name: String,
    pub visitor_team_score: i64,
    /// Season id string, e.g. "22017" for the 2017-18 season
    pub season: String,
    pub city: String,
    pub attendance: Option<i64>,
}

/// One recorded event in a game's chronological log.
///
/// Ordering is by `event_num`, strictly increasing within a game. The score
/// snapshot, when present, is the dataset's "away - home" text and marks the
/// end of a scoring segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub event_num: i64,
    /// Quarter (1-4) or overtime index (5+)
    pub period: i64,
    /// Game-clock time remaining in the period, e.g. "11:42"
    pub clock: Option<String>,
    /// Score snapshot in "away - home" order; present only on scoring plays
    pub score: Option<String>,
    pub home_description: Option<String>,
    pub neutral_description: Option<String>,
    pub visitor_description: Option<String>,
    pub player1_name: Option<String>,
    pub player2_name: Option<String>,
    pub player3_name: Option<String>,
}
