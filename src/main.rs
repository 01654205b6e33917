use matchday_core::LineupState;
use database::DatabaseLoader;
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;
use tokio::sync::RwLock;
use web::{AppData, MatchdayServer};

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let database = match DatabaseLoader::load() {
        Ok(database) => database,
        Err(e) => {
            error!("failed to load the squad database: {}", e);
            return;
        }
    };

    info!(
        "{}: {} players in the squad, {} fixtures scheduled",
        database.club.short_name,
        database.roster.players().len(),
        database.fixtures.len()
    );

    let lineup = LineupState::new(database.roster.clone());

    let data = AppData {
        database: Arc::new(database),
        lineup: Arc::new(RwLock::new(lineup)),
    };

    MatchdayServer::new(data).run().await;
}
