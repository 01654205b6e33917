use super::{build_view, LineupViewModel};
use crate::{ApiError, ApiResult, AppData};
use axum::extract::{Path, State};
use axum::Json;
use core::{DropOutcome, LineupError, PitchBounds, PointerPosition, StarterSnapshot, TapOutcome};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct DragPayload {
    pub pointer: PointerPosition,
    pub bounds: PitchBounds,
}

#[derive(Serialize)]
pub struct GestureResponse {
    pub outcome: &'static str,
    pub lineup: LineupViewModel,
}

#[derive(Serialize)]
pub struct ExportSnapshot {
    pub club: String,
    pub opponent: String,
    pub starters: Vec<StarterSnapshot>,
}

fn gesture_error(err: LineupError) -> ApiError {
    match err {
        LineupError::UnknownPlayer(_) => ApiError::NotFound(err.to_string()),
        _ => ApiError::BadRequest(err.to_string()),
    }
}

pub async fn tap_action(
    State(state): State<AppData>,
    Path(player_id): Path<String>,
) -> ApiResult<Json<GestureResponse>> {
    let mut lineup = state.lineup.write().await;

    let outcome = match lineup.tap(&player_id).map_err(gesture_error)? {
        TapOutcome::Selected => "selected",
        TapOutcome::Deselected => "deselected",
        TapOutcome::Swapped => "swapped",
    };

    Ok(Json(GestureResponse {
        outcome,
        lineup: build_view(&lineup),
    }))
}

pub async fn drag_start_action(
    State(state): State<AppData>,
    Path(player_id): Path<String>,
) -> ApiResult<Json<GestureResponse>> {
    let mut lineup = state.lineup.write().await;

    lineup.drag_start(&player_id).map_err(gesture_error)?;

    Ok(Json(GestureResponse {
        outcome: "dragging",
        lineup: build_view(&lineup),
    }))
}

pub async fn drag_over_action(
    State(state): State<AppData>,
    Json(payload): Json<DragPayload>,
) -> Json<GestureResponse> {
    let mut lineup = state.lineup.write().await;

    lineup.drag_over(payload.pointer, payload.bounds);

    Json(GestureResponse {
        outcome: "dragging",
        lineup: build_view(&lineup),
    })
}

pub async fn drop_action(
    State(state): State<AppData>,
    Json(payload): Json<DragPayload>,
) -> Json<GestureResponse> {
    let mut lineup = state.lineup.write().await;

    let outcome = match (*lineup).drop(payload.pointer, payload.bounds) {
        DropOutcome::Placed => "placed",
        DropOutcome::Rejected => "rejected",
        DropOutcome::Ignored => "ignored",
    };

    Json(GestureResponse {
        outcome,
        lineup: build_view(&lineup),
    })
}

pub async fn drag_end_action(State(state): State<AppData>) -> Json<GestureResponse> {
    let mut lineup = state.lineup.write().await;

    lineup.drag_end();

    Json(GestureResponse {
        outcome: "drag-ended",
        lineup: build_view(&lineup),
    })
}

pub async fn notice_dismiss_action(State(state): State<AppData>) -> Json<GestureResponse> {
    let mut lineup = state.lineup.write().await;

    lineup.clear_notice();

    Json(GestureResponse {
        outcome: "notice-dismissed",
        lineup: build_view(&lineup),
    })
}

/// The committed starters plus the opposing team's display text, the
/// contract the image exporter consumes.
pub async fn export_action(State(state): State<AppData>) -> Json<ExportSnapshot> {
    let lineup = state.lineup.read().await;

    let club = &state.database.club;
    let now = chrono::Local::now().naive_local();

    let opponent = core::next_fixture(&state.database.fixtures, now)
        .map(|fixture| fixture.opponent_of(&club.name).name.clone())
        .unwrap_or_else(|| "To be announced".to_string());

    Json(ExportSnapshot {
        club: club.name.clone(),
        opponent,
        starters: lineup.starters_snapshot(),
    })
}
