use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn match_routes() -> Router<AppData> {
    Router::new().route("/matches/next", get(super::next_match_action))
}
