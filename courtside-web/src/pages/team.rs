//! Team detail page: franchise card, active roster, season schedule

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use courtside_common::format::{
    format_birthdate, format_game_date, format_height, game_score_line, team_display_name,
    team_logo_url,
};
use courtside_common::season;
use serde::Deserialize;

use crate::pages::{escape_html, not_found_page, page_shell, Breadcrumb, PageError};
use crate::{db, AppState};

/// Query parameters for the team page
#[derive(Debug, Deserialize)]
pub struct TeamPageQuery {
    /// Season id filter for the schedule, e.g. "22017"
    pub season: Option<String>,
}

/// GET /teams/:abbreviation
pub async fn team_page(
    State(state): State<AppState>,
    Path(abbreviation): Path<String>,
    Query(query): Query<TeamPageQuery>,
) -> Result<Response, PageError> {
    let Some(team) = db::teams::team_by_abbreviation(&state.db, &abbreviation).await? else {
        return Ok(not_found_page(&format!(
            "No team with abbreviation {}.",
            abbreviation
        )));
    };

    let seasons = db::games::seasons_for_team(&state.db, Some(&team.id)).await?;
    // Newest first; fall back to the team's latest season, then the default
    let current_season = query
        .season
        .filter(|s| !s.is_empty())
        .or_else(|| seasons.first().cloned())
        .unwrap_or_else(|| season::DEFAULT_SEASON.to_string());

    let players = db::players::players_by_team(&state.db, &team.id).await?;
    let games = db::games::games_by_team(&state.db, &team.id, Some(&current_season)).await?;

    let display_name = team_display_name(&team);

    let mut body = format!(
        "<div class=\"section-head\" style=\"margin-top:0\">\
         <h1><img src=\"{logo}\" alt=\"{name} logo\" style=\"height:48px;width:48px;vertical-align:middle;object-fit:contain;margin-right:12px\">{name}</h1>\
         </div>\n",
        logo = team_logo_url(&team.id),
        name = escape_html(&display_name),
    );

    // Franchise facts card
    body.push_str(&format!(
        "<div class=\"card\"><div class=\"facts\">\
         <div><div class=\"label\">Full Name</div><div class=\"value\">{full_name}</div></div>\
         <div><div class=\"label\">Abbreviation</div><div class=\"value\">{abbr}</div></div>\
         <div><div class=\"label\">Location</div><div class=\"value\">{city}, {st}</div></div>\
         <div><div class=\"label\">Founded</div><div class=\"value\">{founded}</div></div>\
         </div></div>\n",
        full_name = escape_html(&team.full_name),
        abbr = escape_html(&team.abbreviation),
        city = escape_html(&team.city),
        st = escape_html(&team.state),
        founded = team.year_founded,
    ));

    // Roster
    body.push_str("<h2>Roster</h2>\n");
    if players.is_empty() {
        body.push_str("<p class=\"empty-state\">No active roster on record.</p>\n");
    } else {
        body.push_str(
            "<table class=\"listing\">\n<thead><tr>\
             <th>Player</th><th>Position</th><th>Number</th>\
             <th>Height</th><th>Weight</th><th>Birthdate</th>\
             </tr></thead>\n<tbody>\n",
        );
        for player in &players {
            body.push_str(&format!(
                "<tr><td>{name}</td><td>{position}</td><td>{jersey}</td>\
                 <td>{height}</td><td>{weight} lbs</td><td>{birthdate}</td></tr>\n",
                name = escape_html(&player.full_name),
                position = escape_html(&player.position),
                jersey = escape_html(&player.jersey),
                height = escape_html(&format_height(&player.height)),
                weight = escape_html(&player.weight),
                birthdate = escape_html(&format_birthdate(&player.birthdate)),
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    // Schedule with season navigation
    body.push_str(&format!(
        "<div class=\"section-head\"><h2>Games</h2>{nav}</div>\n",
        nav = season_nav(&team.abbreviation, &current_season, &seasons),
    ));
    if games.is_empty() {
        body.push_str(&format!(
            "<p class=\"empty-state\">No games on record for the {} season.</p>\n",
            escape_html(&season::label(&current_season))
        ));
    } else {
        body.push_str(
            "<table class=\"listing\">\n<thead><tr>\
             <th>Date</th><th></th><th>Home Team</th><th>Score</th><th></th><th>Away Team</th>\
             </tr></thead>\n<tbody>\n",
        );
        for game in &games {
            body.push_str(&format!(
                "<tr>\
                 <td><a href=\"/games/{id}\">{date}</a></td>\
                 <td><img class=\"logo\" src=\"{home_logo}\" alt=\"{home} logo\"></td>\
                 <td>{home}</td>\
                 <td><strong>{score}</strong></td>\
                 <td><img class=\"logo\" src=\"{visitor_logo}\" alt=\"{visitor} logo\"></td>\
                 <td>{visitor}</td>\
                 </tr>\n",
                id = escape_html(&game.id),
                date = escape_html(&format_game_date(&game.game_date)),
                home_logo = team_logo_url(&game.home_team_id),
                home = escape_html(&game.home_team_name),
                score = game_score_line(game),
                visitor_logo = team_logo_url(&game.visitor_team_id),
                visitor = escape_html(&game.visitor_team_name),
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str("<p class=\"backlink\"><a href=\"/teams\">&larr; Back to Teams</a></p>\n");

    let breadcrumbs = [
        Breadcrumb::link("Teams", "/teams"),
        Breadcrumb::here(display_name.clone()),
    ];
    Ok(page_shell(&display_name, &breadcrumbs, &body).into_response())
}

/// Previous/current/next season controls, bounded by the seasons the team
/// actually appears in (newest first).
fn season_nav(abbreviation: &str, current_season: &str, seasons: &[String]) -> String {
    let current_year = season::start_year(current_season);
    let min_year = seasons.last().and_then(|s| season::start_year(s));
    let max_year = seasons.first().and_then(|s| season::start_year(s));

    let mut nav = String::from("<div class=\"season-nav\">");

    let previous = season::previous(current_season).filter(|_| {
        matches!((current_year, min_year), (Some(current), Some(min)) if current > min)
    });
    match previous {
        Some(previous) => nav.push_str(&format!(
            "<a href=\"/teams/{}?season={}\">&lsaquo; {}</a>",
            escape_html(abbreviation),
            escape_html(&previous),
            escape_html(&season::label(&previous)),
        )),
        None => nav.push_str("<span class=\"nav\"></span>"),
    }

    nav.push_str(&format!(
        "<span class=\"current\"><strong>{}</strong></span>",
        escape_html(&season::label(current_season))
    ));

    let next = season::next(current_season).filter(|_| {
        matches!((current_year, max_year), (Some(current), Some(max)) if current < max)
    });
    match next {
        Some(next) => nav.push_str(&format!(
            "<a href=\"/teams/{}?season={}\">{} &rsaquo;</a>",
            escape_html(abbreviation),
            escape_html(&next),
            escape_html(&season::label(&next)),
        )),
        None => nav.push_str("<span class=\"nav\"></span>"),
    }

    nav.push_str("</div>");
    nav
}
