//! Conference and division structure
//!
//! The static mapping from franchise abbreviation to (conference, division)
//! and the grouping operation behind the team index page.

use tracing::warn;

use crate::format::team_display_name;
use crate::models::Team;

/// Conference listing order. Note the index page renders these reversed
/// (Western first), matching the site's historical layout.
pub const CONFERENCE_ORDER: [&str; 2] = ["Eastern", "Western"];

/// Division listing order within a conference.
pub fn division_order(conference: &str) -> &'static [&'static str] {
    match conference {
        "Eastern" => &["Atlantic", "Central", "Southeast"],
        "Western" => &["Northwest", "Pacific", "Southwest"],
        _ => &[],
    }
}

/// Map a franchise abbreviation to its (conference, division).
///
/// Some datasets use CHO for Charlotte and PHO for Phoenix; both spellings
/// are accepted.
pub fn conference_division(abbreviation: &str) -> Option<(&'static str, &'static str)> {
    let placement = match abbreviation {
        // Eastern / Atlantic
        "BOS" | "BKN" | "NYK" | "PHI" | "TOR" => ("Eastern", "Atlantic"),
        // Eastern / Central
        "CHI" | "CLE" | "DET" | "IND" | "MIL" => ("Eastern", "Central"),
        // Eastern / Southeast
        "ATL" | "CHA" | "CHO" | "MIA" | "ORL" | "WAS" => ("Eastern", "Southeast"),
        // Western / Northwest
        "DEN" | "MIN" | "OKC" | "POR" | "UTA" => ("Western", "Northwest"),
        // Western / Pacific
        "GSW" | "LAC" | "LAL" | "PHX" | "PHO" | "SAC" => ("Western", "Pacific"),
        // Western / Southwest
        "DAL" | "HOU" | "MEM" | "NOP" | "SAS" => ("Western", "Southwest"),
        _ => return None,
    };
    Some(placement)
}

/// Teams of one division, sorted by display name.
#[derive(Debug)]
pub struct DivisionGroup {
    pub name: &'static str,
    pub teams: Vec<Team>,
}

/// Divisions of one conference, in listing order.
#[derive(Debug)]
pub struct ConferenceGroup {
    pub name: &'static str,
    pub divisions: Vec<DivisionGroup>,
}

/// Group a flat team list by conference and division.
///
/// Teams whose abbreviation is not in the mapping are logged and skipped.
pub fn group_teams(teams: Vec<Team>) -> Vec<ConferenceGroup> {
    let mut groups: Vec<ConferenceGroup> = CONFERENCE_ORDER
        .iter()
        .map(|&conference| ConferenceGroup {
            name: conference,
            divisions: division_order(conference)
                .iter()
                .map(|&name| DivisionGroup {
                    name,
                    teams: Vec::new(),
                })
                .collect(),
        })
        .collect();

    for team in teams {
        let Some((conference, division)) = conference_division(&team.abbreviation) else {
            warn!(
                "Team with abbreviation {} not found in division mapping",
                team.abbreviation
            );
            continue;
        };

        if let Some(slot) = groups
            .iter_mut()
            .find(|g| g.name == conference)
            .and_then(|g| g.divisions.iter_mut().find(|d| d.name == division))
        {
            slot.teams.push(team);
        }
    }

    for group in &mut groups {
        for division in &mut group.divisions {
            division
                .teams
                .sort_by_key(|t| team_display_name(t));
        }
    }

    groups
}
