pub mod routes;

use crate::common::default_handler::ASSET_VERSION;
use crate::AppData;
use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "landing/index.html")]
pub struct LandingTemplate {
    pub css_version: &'static str,
    pub club_name: String,
    pub club_short_name: String,
    pub crest_url: String,
}

pub async fn landing_action(State(state): State<AppData>) -> impl IntoResponse {
    LandingTemplate {
        css_version: ASSET_VERSION,
        club_name: state.database.club.name.clone(),
        club_short_name: state.database.club.short_name.clone(),
        crest_url: state.database.club.crest_url.clone(),
    }
}
