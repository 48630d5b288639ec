//! Integration tests for the courtside-web JSON API
//!
//! Tests cover:
//! - Team lookup by list, abbreviation, and id
//! - Player lookup and active-roster filtering
//! - Game lookup and schedule ordering
//! - Play-by-play retrieval with scoring-segment summaries
//! - Health endpoint

mod common;

use axum::http::StatusCode;
use common::{extract_json, setup_app, setup_test_db, test_request, GAME_2018, LAL_ID};
use tower::util::ServiceExt; // for `oneshot` method

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "courtside-web");
    assert!(body["version"].is_string());
}

// =============================================================================
// Teams API Tests
// =============================================================================

#[tokio::test]
async fn test_get_all_teams() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app.oneshot(test_request("GET", "/api/teams")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let teams = body.as_array().expect("Should be an array");
    assert_eq!(teams.len(), 2);

    // Ordered by city: Boston before Los Angeles
    assert_eq!(teams[0]["abbreviation"], "BOS");
    assert_eq!(teams[1]["abbreviation"], "LAL");
    assert_eq!(teams[0]["fullName"], "Boston Celtics");
}

#[tokio::test]
async fn test_get_team_by_abbreviation() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app
        .oneshot(test_request("GET", "/api/teams?abbreviation=LAL"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let team = extract_json(response.into_body()).await;
    assert_eq!(team["abbreviation"], "LAL");
    assert_eq!(team["city"], "Los Angeles");
    assert_eq!(team["nickname"], "Lakers");
    assert_eq!(team["yearFounded"], 1948);
}

#[tokio::test]
async fn test_get_team_by_id() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let uri = format!("/api/teams?id={}", LAL_ID);
    let response = app.oneshot(test_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let team = extract_json(response.into_body()).await;
    assert_eq!(team["id"], LAL_ID);
    assert_eq!(team["abbreviation"], "LAL");
}

#[tokio::test]
async fn test_get_team_not_found() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app
        .oneshot(test_request("GET", "/api/teams?abbreviation=XXX"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Team not found");
}

// =============================================================================
// Players API Tests
// =============================================================================

#[tokio::test]
async fn test_get_all_players_filters_to_active() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app
        .oneshot(test_request("GET", "/api/players"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let players = body.as_array().expect("Should be an array");
    // Cal Dunn is inactive and must not appear
    assert_eq!(players.len(), 3);
    assert!(players.iter().all(|p| p["fullName"] != "Cal Dunn"));
}

#[tokio::test]
async fn test_get_players_by_team() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let uri = format!("/api/players?teamId={}", LAL_ID);
    let response = app.oneshot(test_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let players = body.as_array().expect("Should be an array");
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p["teamId"] == LAL_ID));

    // Ordered by last name: Avery before Carter
    assert_eq!(players[0]["fullName"], "Ben Avery");
    assert_eq!(players[1]["fullName"], "Alex Carter");
}

#[tokio::test]
async fn test_get_player_by_id_not_found() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app
        .oneshot(test_request("GET", "/api/players?id=nonexistent"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Player not found");
}

// =============================================================================
// Games API Tests
// =============================================================================

#[tokio::test]
async fn test_get_all_games_most_recent_first() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app.oneshot(test_request("GET", "/api/games")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let games = body.as_array().expect("Should be an array");
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["id"], "0021700001");
    assert_eq!(games[1]["id"], "0021600055");
}

#[tokio::test]
async fn test_get_game_by_id_joins_names_and_attendance() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let uri = format!("/api/games?id={}", GAME_2018);
    let response = app.oneshot(test_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let game = extract_json(response.into_body()).await;
    assert_eq!(game["homeTeamName"], "Los Angeles Lakers");
    assert_eq!(game["visitorTeamName"], "Boston Celtics");
    assert_eq!(game["homeTeamScore"], 108);
    assert_eq!(game["visitorTeamScore"], 102);
    assert_eq!(game["season"], "22017");
    assert_eq!(game["city"], "Los Angeles");
    assert_eq!(game["attendance"], 18997);
}

#[tokio::test]
async fn test_get_games_by_team() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let uri = format!("/api/games?teamId={}", LAL_ID);
    let response = app.oneshot(test_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let games = body.as_array().expect("Should be an array");
    // Home in 2018, away in 2017
    assert_eq!(games.len(), 2);
}

#[tokio::test]
async fn test_get_game_not_found() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app
        .oneshot(test_request("GET", "/api/games?id=nonexistent"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Game not found");
}

// =============================================================================
// Play-by-Play API Tests
// =============================================================================

#[tokio::test]
async fn test_get_game_plays_with_segments() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let uri = format!("/api/games/{}/plays", GAME_2018);
    let response = app.oneshot(test_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["gameId"], GAME_2018);
    assert_eq!(body["totalPlays"], 7);
    assert_eq!(body["segmentCount"], 3);

    let segments = body["segments"].as_array().expect("Should be an array");
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0]["playCount"], 3);
    assert_eq!(segments[0]["period"], 1);
    assert_eq!(segments[0]["closingScore"], "0 - 2");
    assert_eq!(segments[1]["playCount"], 3);
    assert_eq!(segments[1]["period"], 2);
    // Trailing segment has no closing score
    assert_eq!(segments[2]["playCount"], 1);
    assert!(segments[2]["closingScore"].is_null());

    let plays = body["plays"].as_array().expect("Should be an array");
    assert_eq!(plays.len(), 7);
    assert_eq!(plays[0]["eventNum"], 1);
    assert_eq!(plays[0]["clock"], "12:00");
}

#[tokio::test]
async fn test_get_game_plays_unknown_game() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app
        .oneshot(test_request("GET", "/api/games/nonexistent/plays"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Build Info Tests
// =============================================================================

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let db = setup_test_db().await;
    let app = setup_app(db);

    let response = app
        .oneshot(test_request("GET", "/api/buildinfo"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["version"].is_string());
    assert!(body["git_hash"].is_string());
    assert!(body["build_timestamp"].is_string());
}
