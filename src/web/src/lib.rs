mod club;
mod common;
mod error;
mod landing;
mod lineup;
mod matches;
mod routes;
mod views;

pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use core::LineupState;
use database::DatabaseEntity;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct MatchdayServer {
    data: AppData,
}

impl MatchdayServer {
    pub fn new(data: AppData) -> Self {
        MatchdayServer { data }
    }

    pub async fn run(&self) {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], 18000));

        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind to address {}: {}", addr, e);
                panic!("Cannot start server without binding to port");
            }
        };

        info!("listen at: http://localhost:18000");

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    }
}

/// Shared application state: the static club database and the single
/// lineup editor session. Every gesture takes the write lock for its
/// whole handler, so roster mutations stay totally ordered and readers
/// only ever observe fully-committed state.
pub struct AppData {
    pub database: Arc<DatabaseEntity>,
    pub lineup: Arc<RwLock<LineupState>>,
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            database: Arc::clone(&self.database),
            lineup: Arc::clone(&self.lineup),
        }
    }
}
