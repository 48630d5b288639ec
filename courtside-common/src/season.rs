//! Season id arithmetic
//!
//! The dataset keys seasons by id strings like "22017": a one-character
//! league prefix followed by the four-digit start year of the season. The
//! 2017-18 season is "22017"; its predecessor is "22016".

/// Season shown when a team page is requested without a season filter.
pub const DEFAULT_SEASON: &str = "22017";

/// Split a season id into its prefix and four-digit start year.
fn split(season_id: &str) -> Option<(&str, i32)> {
    if season_id.len() < 4 || !season_id.is_ascii() {
        return None;
    }
    let (prefix, year) = season_id.split_at(season_id.len() - 4);
    year.parse::<i32>().ok().map(|y| (prefix, y))
}

/// Start year of a season, e.g. 2017 for "22017".
pub fn start_year(season_id: &str) -> Option<i32> {
    split(season_id).map(|(_, year)| year)
}

/// Display label for a season, e.g. "2017-18". Unparseable ids pass
/// through untouched.
pub fn label(season_id: &str) -> String {
    match split(season_id) {
        Some((_, year)) => format!("{}-{:02}", year, (year + 1) % 100),
        None => season_id.to_string(),
    }
}

/// Season id one year earlier, keeping the prefix.
pub fn previous(season_id: &str) -> Option<String> {
    split(season_id).map(|(prefix, year)| format!("{}{}", prefix, year - 1))
}

/// Season id one year later, keeping the prefix.
pub fn next(season_id: &str) -> Option<String> {
    split(season_id).map(|(prefix, year)| format!("{}{}", prefix, year + 1))
}
