//! Game detail page: scoreboard header and the play-by-play viewer
//!
//! The play-by-play viewer pages through scoring segments. The cursor is
//! carried in the `segment` query parameter and clamped into range, so
//! every navigation control is a plain link computed server-side.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use courtside_common::format::{
    format_game_date, group_thousands, team_display_name, team_logo_url,
};
use courtside_common::pbp::{self, PlayByPlayView};
use courtside_common::season;
use serde::Deserialize;

use crate::pages::{escape_html, not_found_page, page_shell, Breadcrumb, PageError};
use crate::{db, AppState};

/// Query parameters for the game page
#[derive(Debug, Deserialize)]
pub struct GamePageQuery {
    /// Scoring-segment cursor; anything unparseable falls back to 0
    pub segment: Option<String>,
}

/// GET /games/:id
pub async fn game_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<GamePageQuery>,
) -> Result<Response, PageError> {
    let Some(game) = db::games::game_by_id(&state.db, &id).await? else {
        return Ok(not_found_page("No game with that id."));
    };

    let home_team = db::teams::team_by_id(&state.db, &game.home_team_id).await?;
    let visitor_team = db::teams::team_by_id(&state.db, &game.visitor_team_id).await?;
    let (Some(home_team), Some(visitor_team)) = (home_team, visitor_team) else {
        return Ok(not_found_page("Team records for this game are missing."));
    };

    let plays = db::plays::plays_for_game(&state.db, &game.id).await?;
    let cursor = query
        .segment
        .as_deref()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(0);
    let view = PlayByPlayView::with_cursor(plays, cursor);

    let home_name = team_display_name(&home_team);
    let visitor_name = team_display_name(&visitor_team);

    let mut meta = format!(
        "{} &bull; {} &bull; {}",
        escape_html(&season::label(&game.season)),
        escape_html(&format_game_date(&game.game_date)),
        escape_html(&game.city),
    );
    if let Some(attendance) = game.attendance {
        meta.push_str(&format!(" &bull; {} attendance", group_thousands(attendance)));
    }

    let mut body = format!(
        "<div class=\"meta-line\">{meta}</div>\n\
         <h1><a href=\"/teams/{home_abbr}\">{home}</a> vs <a href=\"/teams/{visitor_abbr}\">{visitor}</a></h1>\n",
        meta = meta,
        home_abbr = escape_html(&home_team.abbreviation),
        home = escape_html(&home_name),
        visitor_abbr = escape_html(&visitor_team.abbreviation),
        visitor = escape_html(&visitor_name),
    );

    // Scoreboard
    body.push_str(&format!(
        "<div class=\"card\"><div class=\"scoreboard\">\
         <div class=\"side\">\
         <img src=\"{home_logo}\" alt=\"{home} logo\">\
         <a href=\"/teams/{home_abbr}\">{home}</a>\
         <span class=\"points\">{home_points}</span>\
         </div>\
         <div class=\"vs\">VS</div>\
         <div class=\"side\">\
         <img src=\"{visitor_logo}\" alt=\"{visitor} logo\">\
         <a href=\"/teams/{visitor_abbr}\">{visitor}</a>\
         <span class=\"points\">{visitor_points}</span>\
         </div>\
         </div></div>\n",
        home_logo = team_logo_url(&home_team.id),
        home_abbr = escape_html(&home_team.abbreviation),
        home = escape_html(&home_name),
        home_points = game.home_team_score,
        visitor_logo = team_logo_url(&visitor_team.id),
        visitor_abbr = escape_html(&visitor_team.abbreviation),
        visitor = escape_html(&visitor_name),
        visitor_points = game.visitor_team_score,
    ));

    body.push_str(&play_by_play_section(&view));
    body.push_str("<p class=\"backlink\"><a href=\"/teams\">&larr; Back to Teams</a></p>\n");

    let breadcrumbs = [
        Breadcrumb::here("Games"),
        Breadcrumb::here(format!("{} vs {}", home_name, visitor_name)),
    ];
    let title = format!("{} vs {}", home_name, visitor_name);
    Ok(page_shell(&title, &breadcrumbs, &body).into_response())
}

/// Render the play-by-play viewer for the current segment.
fn play_by_play_section(view: &PlayByPlayView) -> String {
    if view.segment_count() == 0 {
        return "<div class=\"section-head\"><h2>Play-by-Play</h2></div>\
                <p class=\"empty-state\">Play-by-play data not available for this game.</p>\n"
            .to_string();
    }

    let mut section = String::from("<div class=\"section-head\"><h2>Play-by-Play</h2>");
    if view.segment_count() > 1 {
        section.push_str(&pbp_controls(view));
    }
    section.push_str("</div>\n");

    section.push_str(
        "<table class=\"listing\">\n<thead><tr>\
         <th>Period</th><th>Time</th><th>Score</th><th>Description</th>\
         </tr></thead>\n<tbody>\n",
    );
    for play in view.current_plays() {
        section.push_str(&format!(
            "<tr><td>{period}</td><td>{clock}</td><td>{score}</td><td>{description}</td></tr>\n",
            period = play.period,
            clock = escape_html(play.clock.as_deref().unwrap_or("")),
            score = escape_html(&pbp::display_score(play.score.as_deref())),
            description = escape_html(pbp::play_description(play)),
        ));
    }
    section.push_str("</tbody>\n</table>\n");
    section
}

/// Segment navigation controls: previous/next quarter and previous/next
/// scoring play, disabled at the extremes.
fn pbp_controls(view: &PlayByPlayView) -> String {
    let mut controls = String::from("<div class=\"pbp-controls\">");

    controls.push_str(&control(
        view.can_jump_prev_period(),
        view.prev_period_target(),
        "&#8676;",
        "Previous Quarter",
    ));
    controls.push_str(&control(
        view.cursor() > 0,
        view.backward_target(),
        "&larr;",
        "Previous Scoring Play",
    ));

    controls.push_str(&format!(
        "<span class=\"status\">Q{period} | Scoring Play {current} of {total}</span>",
        period = view.current_period(),
        current = view.cursor() + 1,
        total = view.segment_count(),
    ));

    controls.push_str(&control(
        view.cursor() + 1 < view.segment_count(),
        view.forward_target(),
        "&rarr;",
        "Next Scoring Play",
    ));
    controls.push_str(&control(
        view.can_jump_next_period(),
        view.next_period_target(),
        "&#8677;",
        "Next Quarter",
    ));

    controls.push_str("</div>");
    controls
}

fn control(enabled: bool, target: usize, glyph: &str, label: &str) -> String {
    if enabled {
        format!(
            "<a href=\"?segment={}\" aria-label=\"{}\">{}</a>",
            target, label, glyph
        )
    } else {
        format!("<span class=\"nav\" aria-label=\"{}\">{}</span>", label, glyph)
    }
}
