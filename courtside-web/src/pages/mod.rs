//! Server-rendered HTML pages
//!
//! Pages are assembled as plain strings in their handlers and wrapped in a
//! shared shell carrying the nav bar, breadcrumb trail, and stylesheet.

mod game;
mod team;
mod teams;

pub use game::game_page;
pub use team::team_page;
pub use teams::teams_index;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

/// GET /
///
/// The landing page is the team index.
pub async fn redirect_to_teams() -> Redirect {
    Redirect::temporary("/teams")
}

/// One entry in the breadcrumb trail. Entries without an href render as
/// plain text.
pub struct Breadcrumb {
    pub label: String,
    pub href: Option<String>,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn here(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

/// Escape text interpolated into markup
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const STYLES: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    background-color: #f9fafb;
    color: #111827;
    line-height: 1.6;
}
nav.site {
    background: #ffffff;
    border-bottom: 1px solid #e5e7eb;
    padding: 0 24px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 56px;
}
nav.site .brand { font-size: 18px; font-weight: 600; color: #111827; text-decoration: none; }
nav.site .links a { color: #6b7280; text-decoration: none; margin-left: 24px; font-size: 14px; }
nav.site .links a:hover { color: #374151; }
ol.breadcrumbs { list-style: none; display: flex; align-items: center; }
ol.breadcrumbs .sep { color: #9ca3af; margin: 0 8px; }
ol.breadcrumbs a { color: #9ca3af; text-decoration: none; font-size: 14px; }
ol.breadcrumbs a:hover { color: #4b5563; }
ol.breadcrumbs span { color: #4b5563; font-size: 14px; }
main { max-width: 1200px; margin: 0 auto; padding: 24px 16px; }
h1 { font-size: 28px; margin-bottom: 16px; }
h2 { font-size: 20px; margin: 24px 0 12px; }
h3 { font-size: 17px; margin: 12px 0 8px; color: #1f2937; }
a { color: #2563eb; }
a:hover { color: #1e40af; }
.card {
    background: #ffffff;
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    padding: 24px;
    margin-bottom: 24px;
}
table.listing {
    width: 100%;
    background: #ffffff;
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    border-collapse: collapse;
    overflow: hidden;
}
table.listing th {
    background: #f3f4f6;
    text-align: left;
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #6b7280;
    padding: 10px 16px;
}
table.listing td { padding: 10px 16px; border-top: 1px solid #e5e7eb; }
table.listing img.logo { height: 24px; width: 24px; object-fit: contain; }
.conference-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 32px; }
.division { background: #ffffff; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.06); padding: 16px; margin-bottom: 16px; }
.team-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 12px; }
.team-card { display: flex; flex-direction: column; align-items: center; text-decoration: none; padding: 12px; border-radius: 8px; }
.team-card:hover { background: #f3f4f6; }
.team-card img { height: 56px; width: 56px; object-fit: contain; margin-bottom: 8px; }
.team-city { font-weight: 500; color: #111827; font-size: 14px; white-space: nowrap; }
.team-nickname { color: #374151; font-size: 14px; white-space: nowrap; }
.facts { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
.facts .label { color: #6b7280; font-size: 14px; }
.facts .value { font-weight: 500; }
.scoreboard { display: flex; justify-content: space-around; align-items: center; text-align: center; }
.scoreboard .side { display: flex; flex-direction: column; align-items: center; width: 33%; }
.scoreboard img { height: 80px; width: 80px; object-fit: contain; margin-bottom: 8px; }
.scoreboard .points { font-size: 48px; font-weight: 700; margin-top: 8px; }
.scoreboard .vs { font-size: 24px; font-weight: 300; color: #6b7280; }
.meta-line { color: #4b5563; margin-bottom: 8px; }
.section-head { display: flex; justify-content: space-between; align-items: center; margin: 32px 0 12px; }
.season-nav a, .season-nav span.current { margin: 0 6px; }
.pbp-controls { display: flex; align-items: center; gap: 8px; }
.pbp-controls a, .pbp-controls span.nav {
    display: inline-block;
    width: 40px;
    text-align: center;
    padding: 4px 8px;
    font-weight: 700;
    border-radius: 4px;
    text-decoration: none;
}
.pbp-controls a { background: #3b82f6; color: #ffffff; }
.pbp-controls a:hover { background: #2563eb; }
.pbp-controls span.nav { background: #d1d5db; color: #ffffff; cursor: not-allowed; }
.pbp-controls .status { font-size: 14px; color: #374151; white-space: nowrap; }
.empty-state { text-align: center; padding: 48px 0; color: #4b5563; }
.backlink { margin-top: 24px; }
"#;

/// Wrap a page body in the common shell.
pub fn page_shell(title: &str, breadcrumbs: &[Breadcrumb], body: &str) -> Html<String> {
    let mut crumbs = String::new();
    for item in breadcrumbs {
        match &item.href {
            Some(href) => crumbs.push_str(&format!(
                "<li><span class=\"sep\">/</span><a href=\"{}\">{}</a></li>",
                escape_html(href),
                escape_html(&item.label)
            )),
            None => crumbs.push_str(&format!(
                "<li><span class=\"sep\">/</span><span>{}</span></li>",
                escape_html(&item.label)
            )),
        }
    }

    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title} - Courtside</title>\n\
         <style>{styles}</style>\n\
         </head>\n\
         <body>\n\
         <nav class=\"site\">\n\
         <div><a class=\"brand\" href=\"/\">Courtside</a>\n\
         <span class=\"links\"><a href=\"/teams\">Teams</a></span></div>\n\
         <ol class=\"breadcrumbs\">{crumbs}</ol>\n\
         </nav>\n\
         <main>\n{body}\n</main>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        styles = STYLES,
        crumbs = crumbs,
        body = body,
    ))
}

/// 404 page for entities that are not in the dataset.
pub fn not_found_page(message: &str) -> Response {
    let body = format!(
        "<div class=\"empty-state\"><h1>Not Found</h1><p>{}</p>\
         <p class=\"backlink\"><a href=\"/teams\">&larr; Back to Teams</a></p></div>",
        escape_html(message)
    );
    (
        StatusCode::NOT_FOUND,
        page_shell("Not Found", &[], &body),
    )
        .into_response()
}

/// Page rendering errors
#[derive(Debug)]
pub enum PageError {
    Database(String),
}

impl From<courtside_common::Error> for PageError {
    fn from(e: courtside_common::Error) -> Self {
        PageError::Database(e.to_string())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let PageError::Database(msg) = self;
        let body = format!(
            "<div class=\"empty-state\"><h1>Something went wrong</h1><p>{}</p></div>",
            escape_html(&msg)
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            page_shell("Error", &[], &body),
        )
            .into_response()
    }
}
