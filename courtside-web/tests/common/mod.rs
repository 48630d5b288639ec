//! Shared fixtures for integration tests
//!
//! Builds an in-memory SQLite database with the dataset's schema and a
//! small seeded league: two teams, a few players, two games, and one
//! game's play-by-play log (seven plays segmenting as 3/3/1).

#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use courtside_web::{build_router, AppState};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const LAL_ID: &str = "1610612747";
pub const BOS_ID: &str = "1610612738";
pub const GAME_2018: &str = "0021700001";
pub const GAME_2017: &str = "0021600055";

pub async fn setup_test_db() -> SqlitePool {
    // One connection only: every pooled connection to :memory: would
    // otherwise get its own empty database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Should open in-memory database");

    let schema = [
        "CREATE TABLE team (
            id TEXT PRIMARY KEY,
            full_name TEXT NOT NULL,
            abbreviation TEXT NOT NULL,
            nickname TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            year_founded INTEGER NOT NULL
        )",
        "CREATE TABLE common_player_info (
            person_id TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            display_first_last TEXT NOT NULL,
            position TEXT,
            jersey TEXT,
            height TEXT,
            weight TEXT,
            birthdate TEXT,
            team_id TEXT NOT NULL,
            rosterstatus TEXT NOT NULL
        )",
        "CREATE TABLE game (
            game_id TEXT PRIMARY KEY,
            game_date TEXT NOT NULL,
            team_id_home TEXT NOT NULL,
            team_id_away TEXT NOT NULL,
            pts_home INTEGER,
            pts_away INTEGER,
            season_id TEXT NOT NULL
        )",
        "CREATE TABLE game_info (
            game_id TEXT PRIMARY KEY,
            attendance INTEGER
        )",
        "CREATE TABLE play_by_play (
            game_id TEXT NOT NULL,
            eventnum INTEGER NOT NULL,
            period INTEGER NOT NULL,
            pctimestring TEXT,
            score TEXT,
            homedescription TEXT,
            neutraldescription TEXT,
            visitordescription TEXT,
            player1_name TEXT,
            player2_name TEXT,
            player3_name TEXT
        )",
    ];
    for statement in schema {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("Should create schema");
    }

    seed_teams(&pool).await;
    seed_players(&pool).await;
    seed_games(&pool).await;
    seed_plays(&pool).await;

    pool
}

async fn seed_teams(pool: &SqlitePool) {
    let teams = [
        (LAL_ID, "Los Angeles Lakers", "LAL", "Lakers", "Los Angeles", "California", 1948_i64),
        (BOS_ID, "Boston Celtics", "BOS", "Celtics", "Boston", "Massachusetts", 1946),
    ];
    for (id, full_name, abbreviation, nickname, city, state, year_founded) in teams {
        sqlx::query(
            "INSERT INTO team (id, full_name, abbreviation, nickname, city, state, year_founded)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(full_name)
        .bind(abbreviation)
        .bind(nickname)
        .bind(city)
        .bind(state)
        .bind(year_founded)
        .execute(pool)
        .await
        .expect("Should insert team");
    }
}

async fn seed_players(pool: &SqlitePool) {
    let players = [
        ("201101", "Alex", "Carter", "F", "7", "6-8", "250", "1990-01-15", LAL_ID, "Active"),
        ("201102", "Ben", "Avery", "G", "3", "6-2", "190", "1992-06-02", LAL_ID, "Active"),
        ("201103", "Cal", "Dunn", "C", "15", "7-0", "265", "1988-11-30", LAL_ID, "Inactive"),
        ("201201", "Dan", "Ellis", "G", "11", "6-4", "200", "1993-04-20", BOS_ID, "Active"),
    ];
    for (id, first, last, position, jersey, height, weight, birthdate, team_id, status) in players {
        sqlx::query(
            "INSERT INTO common_player_info
             (person_id, first_name, last_name, display_first_last, position, jersey,
              height, weight, birthdate, team_id, rosterstatus)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(first)
        .bind(last)
        .bind(format!("{} {}", first, last))
        .bind(position)
        .bind(jersey)
        .bind(height)
        .bind(weight)
        .bind(birthdate)
        .bind(team_id)
        .bind(status)
        .execute(pool)
        .await
        .expect("Should insert player");
    }
}

async fn seed_games(pool: &SqlitePool) {
    let games = [
        (GAME_2018, "2018-03-09 00:00:00", LAL_ID, BOS_ID, 108_i64, 102_i64, "22017"),
        (GAME_2017, "2017-01-10 00:00:00", BOS_ID, LAL_ID, 99, 95, "22016"),
    ];
    for (id, date, home, away, pts_home, pts_away, season) in games {
        sqlx::query(
            "INSERT INTO game
             (game_id, game_date, team_id_home, team_id_away, pts_home, pts_away, season_id)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(date)
        .bind(home)
        .bind(away)
        .bind(pts_home)
        .bind(pts_away)
        .bind(season)
        .execute(pool)
        .await
        .expect("Should insert game");
    }

    // Attendance only recorded for the 2018 game
    sqlx::query("INSERT INTO game_info (game_id, attendance) VALUES (?, ?)")
        .bind(GAME_2018)
        .bind(18997_i64)
        .execute(pool)
        .await
        .expect("Should insert game info");
}

async fn seed_plays(pool: &SqlitePool) {
    // Scores after the 3rd and 6th plays: segments of 3, 3, and 1
    let plays: [(i64, i64, &str, Option<&str>, Option<&str>, Option<&str>, Option<&str>); 7] = [
        (1, 1, "12:00", None, None, Some("Jump ball"), None),
        (2, 1, "11:42", None, Some("Carter misses layup"), None, None),
        (3, 1, "11:20", Some("0 - 2"), Some("Carter makes layup"), None, None),
        (4, 2, "10:55", None, None, None, Some("Ellis misses jumper")),
        (5, 2, "10:30", None, Some("Avery rebound"), None, None),
        (6, 2, "09:58", Some("2 - 2"), None, None, Some("Ellis makes jumper")),
        (7, 2, "09:40", None, None, Some("Timeout"), None),
    ];
    for (eventnum, period, clock, score, home, neutral, visitor) in plays {
        sqlx::query(
            "INSERT INTO play_by_play
             (game_id, eventnum, period, pctimestring, score,
              homedescription, neutraldescription, visitordescription,
              player1_name, player2_name, player3_name)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(GAME_2018)
        .bind(eventnum)
        .bind(period)
        .bind(clock)
        .bind(score)
        .bind(home)
        .bind(neutral)
        .bind(visitor)
        .bind(Option::<&str>::None)
        .bind(Option::<&str>::None)
        .bind(Option::<&str>::None)
        .execute(pool)
        .await
        .expect("Should insert play");
    }
}

/// Create app with test state
pub fn setup_app(db: SqlitePool) -> axum::Router {
    build_router(AppState::new(db))
}

/// Create request
pub fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Extract JSON body from response
pub async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Extract text body from response
pub async fn extract_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}
