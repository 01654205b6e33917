pub mod routes;

use crate::common::default_handler::ASSET_VERSION;
use crate::views::{self, NavItem};
use crate::AppData;
use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "matches/next/index.html")]
pub struct NextMatchTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub club_name: String,
    pub club_short_name: String,
    pub nav: Vec<NavItem>,
    pub home_name: String,
    pub home_crest: String,
    pub away_name: String,
    pub away_crest: String,
    pub stadium: String,
    pub kickoff_date: String,
    pub kickoff_time: String,
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "matches/next/empty.html")]
pub struct NoMatchTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub club_name: String,
    pub club_short_name: String,
    pub nav: Vec<NavItem>,
}

pub async fn next_match_action(State(state): State<AppData>) -> Response {
    let club = &state.database.club;

    let now = chrono::Local::now().naive_local();

    match core::next_fixture(&state.database.fixtures, now) {
        Some(fixture) => NextMatchTemplate {
            css_version: ASSET_VERSION,
            title: format!("{} - Next match", club.short_name),
            club_name: club.name.clone(),
            club_short_name: club.short_name.clone(),
            nav: views::site_nav("/matches/next"),
            home_name: fixture.home.name.clone(),
            home_crest: fixture.home.crest_url.clone(),
            away_name: fixture.away.name.clone(),
            away_crest: fixture.away.crest_url.clone(),
            stadium: fixture.stadium.clone(),
            kickoff_date: fixture.kickoff.format("%d/%m/%Y").to_string(),
            kickoff_time: fixture.kickoff.format("%H:%M").to_string(),
        }
        .into_response(),
        None => NoMatchTemplate {
            css_version: ASSET_VERSION,
            title: format!("{} - Next match", club.short_name),
            club_name: club.name.clone(),
            club_short_name: club.short_name.clone(),
            nav: views::site_nav("/matches/next"),
        }
        .into_response(),
    }
}
