pub mod routes;

use crate::common::default_handler::ASSET_VERSION;
use crate::views::{self, NavItem};
use crate::AppData;
use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use chrono::Datelike;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "club/index.html")]
pub struct ClubGetTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub club_name: String,
    pub club_short_name: String,
    pub nav: Vec<NavItem>,
    pub crest_url: String,
    pub founded: u16,
    pub stats: Vec<ClubStat>,
}

pub struct ClubStat {
    pub label: &'static str,
    pub value: String,
}

pub async fn club_get_action(State(state): State<AppData>) -> impl IntoResponse {
    let club = &state.database.club;

    let years_of_history = chrono::Local::now().year() - i32::from(club.founded);

    let stats = vec![
        ClubStat {
            label: "Brazilian titles",
            value: club.brazilian_titles.to_string(),
        },
        ClubStat {
            label: "Libertadores",
            value: club.libertadores_titles.to_string(),
        },
        ClubStat {
            label: "Years of history",
            value: years_of_history.to_string(),
        },
        ClubStat {
            label: "Millions of supporters",
            value: format!("{}+", club.supporters_millions),
        },
    ];

    ClubGetTemplate {
        css_version: ASSET_VERSION,
        title: club.name.clone(),
        club_name: club.name.clone(),
        club_short_name: club.short_name.clone(),
        nav: views::site_nav("/club"),
        crest_url: club.crest_url.clone(),
        founded: club.founded,
        stats,
    }
}
