use super::api;
use crate::AppData;
use axum::routing::{get, post};
use axum::Router;

pub fn lineup_routes() -> Router<AppData> {
    Router::new()
        .route("/lineup", get(super::lineup_get_action))
        .route("/api/lineup/tap/{player_id}", post(api::tap_action))
        .route(
            "/api/lineup/drag/start/{player_id}",
            post(api::drag_start_action),
        )
        .route("/api/lineup/drag/over", post(api::drag_over_action))
        .route("/api/lineup/drop", post(api::drop_action))
        .route("/api/lineup/drag/end", post(api::drag_end_action))
        .route("/api/lineup/notice/dismiss", post(api::notice_dismiss_action))
        .route("/api/lineup/export", get(api::export_action))
}
