pub mod api;
pub mod routes;

use crate::common::default_handler::ASSET_VERSION;
use crate::views::{self, NavItem};
use crate::AppData;
use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use core::LineupState;
use itertools::Itertools;
use serde::Serialize;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "lineup/index.html")]
pub struct LineupTemplate {
    pub css_version: &'static str,
    pub title: String,
    pub club_name: String,
    pub club_short_name: String,
    pub nav: Vec<NavItem>,
    pub starters: Vec<StarterToken>,
    pub bench: Vec<BenchToken>,
    pub notice_message: String,
    pub notice_duration_secs: u64,
}

/// One on-pitch token, with its render coordinate already resolved.
#[derive(Debug, Clone, Serialize)]
pub struct StarterToken {
    pub id: String,
    pub number: String,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub selected: bool,
    pub dragged: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchToken {
    pub id: String,
    pub number: String,
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoticeView {
    pub message: String,
    pub duration_secs: u64,
}

/// Everything the client needs to re-render after a gesture.
#[derive(Debug, Clone, Serialize)]
pub struct LineupViewModel {
    pub starters: Vec<StarterToken>,
    pub bench: Vec<BenchToken>,
    pub selected_id: Option<String>,
    pub dragged_id: Option<String>,
    pub notice: Option<NoticeView>,
}

pub fn build_view(lineup: &LineupState) -> LineupViewModel {
    let selected_id = lineup.selected_id().map(str::to_string);
    let dragged_id = lineup.dragged_id().map(str::to_string);

    let starters = lineup
        .roster()
        .starters()
        .into_iter()
        .map(|player| {
            let point = lineup.resolved_position(player);

            StarterToken {
                id: player.id.clone(),
                number: player.number.clone(),
                name: player.name.clone(),
                x: point.x,
                y: point.y,
                selected: selected_id.as_deref() == Some(player.id.as_str()),
                dragged: dragged_id.as_deref() == Some(player.id.as_str()),
            }
        })
        .collect_vec();

    let bench = lineup
        .roster()
        .bench()
        .into_iter()
        .map(|player| BenchToken {
            id: player.id.clone(),
            number: player.number.clone(),
            name: player.name.clone(),
            selected: selected_id.as_deref() == Some(player.id.as_str()),
        })
        .collect_vec();

    let notice = lineup.notice().map(|notice| NoticeView {
        message: notice.message.clone(),
        duration_secs: notice.duration.as_secs(),
    });

    LineupViewModel {
        starters,
        bench,
        selected_id,
        dragged_id,
        notice,
    }
}

pub async fn lineup_get_action(State(state): State<AppData>) -> impl IntoResponse {
    let club = &state.database.club;
    let lineup = state.lineup.read().await;

    let view = build_view(&lineup);
    let (notice_message, notice_duration_secs) = match view.notice {
        Some(notice) => (notice.message, notice.duration_secs),
        None => (String::new(), 0),
    };

    LineupTemplate {
        css_version: ASSET_VERSION,
        title: format!("{} - Lineup", club.short_name),
        club_name: club.name.clone(),
        club_short_name: club.short_name.clone(),
        nav: views::site_nav("/lineup"),
        starters: view.starters,
        bench: view.bench,
        notice_message,
        notice_duration_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::{Placement, Player, Roster, SlotCode};

    fn lineup() -> LineupState {
        let players = vec![
            Player::new("gk", "1", "Keeper", Placement::Slot(SlotCode::Goalkeeper), true),
            Player::new("st", "9", "Striker", Placement::Slot(SlotCode::Striker), false),
        ];

        LineupState::new(Roster::new(players).unwrap())
    }

    #[test]
    fn test_view_splits_starters_and_bench() {
        let view = build_view(&lineup());

        assert_eq!(view.starters.len(), 1);
        assert_eq!(view.starters[0].id, "gk");
        assert_eq!(view.bench.len(), 1);
        assert_eq!(view.bench[0].id, "st");
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_view_marks_the_selected_token() {
        let mut state = lineup();
        state.tap("gk").unwrap();

        let view = build_view(&state);

        assert!(view.starters[0].selected);
        assert_eq!(view.selected_id.as_deref(), Some("gk"));
    }

    #[test]
    fn test_view_resolves_slot_coordinates() {
        let view = build_view(&lineup());

        assert_eq!(view.starters[0].x, 10.0);
        assert_eq!(view.starters[0].y, 50.0);
    }
}
