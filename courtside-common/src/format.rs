//! Display formatting helpers shared by pages and tests

use chrono::NaiveDate;

use crate::models::{Game, Team};

/// "City Nickname", the name teams are listed under everywhere.
pub fn team_display_name(team: &Team) -> String {
    format!("{} {}", team.city, team.nickname)
}

/// Franchise logo URL on the league CDN.
pub fn team_logo_url(team_id: &str) -> String {
    format!("https://cdn.nba.com/logos/nba/{}/global/L/logo.svg", team_id)
}

/// "home - visitor" final score line for schedule tables.
pub fn game_score_line(game: &Game) -> String {
    format!("{} - {}", game.home_team_score, game.visitor_team_score)
}

/// Parse the date formats the dataset mixes: bare dates, SQL timestamps,
/// and ISO timestamps.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date())
        })
        .ok()
}

/// Long-form game date, e.g. "Friday, March 9, 2018". Unparseable input
/// passes through untouched.
pub fn format_game_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%A, %B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Birthdate without the weekday, e.g. "March 9, 1995".
pub fn format_birthdate(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Thousands-grouped integer, e.g. 18997 rendered as "18,997".
pub fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Roster height "6-10" rendered as 6'10".
pub fn format_height(raw: &str) -> String {
    match raw.split_once('-') {
        Some((feet, inches)) => format!("{}'{}\"", feet, inches),
        None => raw.to_string(),
    }
}
