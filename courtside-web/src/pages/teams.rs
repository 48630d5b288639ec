//! Team index page

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use courtside_common::format::{team_display_name, team_logo_url};
use courtside_common::league;

use crate::pages::{escape_html, page_shell, Breadcrumb, PageError};
use crate::{db, AppState};

/// GET /teams
///
/// Conference/division grid of franchises. Conferences render in reverse
/// listing order (Western first), matching the site's historical layout.
pub async fn teams_index(State(state): State<AppState>) -> Result<Response, PageError> {
    let teams = db::teams::all_teams(&state.db).await?;
    let groups = league::group_teams(teams);

    let mut body = String::from("<h1>NBA Teams</h1>\n<div class=\"conference-grid\">\n");
    for group in groups.iter().rev() {
        body.push_str(&format!(
            "<section class=\"conference\">\n<h2>{} Conference</h2>\n",
            group.name
        ));
        for division in &group.divisions {
            body.push_str(&format!(
                "<div class=\"division\">\n<h3>{} Division</h3>\n<div class=\"team-grid\">\n",
                division.name
            ));
            for team in &division.teams {
                body.push_str(&format!(
                    "<a class=\"team-card\" href=\"/teams/{abbr}\">\
                     <img src=\"{logo}\" alt=\"{name} logo\" loading=\"lazy\">\
                     <div class=\"team-city\">{city}</div>\
                     <div class=\"team-nickname\">{nickname}</div>\
                     </a>\n",
                    abbr = escape_html(&team.abbreviation),
                    logo = team_logo_url(&team.id),
                    name = escape_html(&team_display_name(team)),
                    city = escape_html(&team.city),
                    nickname = escape_html(&team.nickname),
                ));
            }
            body.push_str("</div>\n</div>\n");
        }
        body.push_str("</section>\n");
    }
    body.push_str("</div>\n");

    Ok(page_shell("Teams", &[Breadcrumb::here("Teams")], &body).into_response())
}
