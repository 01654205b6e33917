use crate::AppData;
use axum::routing::get;
use axum::Router;

pub fn landing_routes() -> Router<AppData> {
    Router::new().route("/", get(super::landing_action))
}
