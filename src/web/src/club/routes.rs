use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn club_routes() -> Router<AppData> {
    Router::new().route("/club", get(super::club_get_action))
}
