use crate::club::routes::club_routes;
use crate::common::default_handler::default_handler;
use crate::landing::routes::landing_routes;
use crate::lineup::routes::lineup_routes;
use crate::matches::routes::match_routes;
use crate::AppData;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(landing_routes())
            .merge(club_routes())
            .merge(match_routes())
            .merge(lineup_routes())
            .fallback(default_handler)
    }
}
