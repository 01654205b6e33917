use super::{LineupError, Player, Roster, MAX_STARTERS};
use crate::field::{Placement, PitchBounds, PitchCoordinate, PointerPosition};
use log::{debug, warn};
use serde::Serialize;
use std::time::Duration;

pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// A transient, auto-dismissing message for the view layer. Held in the
/// interaction state, never in the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub duration: Duration,
}

impl Notice {
    fn starters_full() -> Notice {
        Notice {
            message: format!("Only {} players can start the match", MAX_STARTERS),
            duration: NOTICE_DURATION,
        }
    }
}

/// Drag lifecycle as an explicit state machine: a drop or a cancel are the
/// only two exits from `Dragging`.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        player_id: String,
        position: Option<PitchCoordinate>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    Selected,
    Deselected,
    Swapped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed,
    Rejected,
    Ignored,
}

/// One starter in an export snapshot: everything the image exporter needs.
#[derive(Debug, Clone, Serialize)]
pub struct StarterSnapshot {
    pub id: String,
    pub number: String,
    pub name: String,
    pub position: PitchCoordinate,
}

/// The lineup editor state: the roster plus the ephemeral interaction
/// state (pending selection, in-flight drag, active notice).
///
/// Every gesture handler runs synchronously and commits the roster as a
/// single replacement, so readers always observe a fully-applied state.
#[derive(Debug)]
pub struct LineupState {
    roster: Roster,
    selected: Option<String>,
    drag: DragState,
    notice: Option<Notice>,
}

impl LineupState {
    pub fn new(roster: Roster) -> Self {
        LineupState {
            roster,
            selected: None,
            drag: DragState::Idle,
            notice: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn dragged_id(&self) -> Option<&str> {
        match &self.drag {
            DragState::Dragging { player_id, .. } => Some(player_id),
            DragState::Idle => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Tap-select-and-swap protocol. First tap selects, tapping the
    /// selected player again deselects, tapping a different player swaps
    /// the two. The selection is cleared regardless of the swap outcome.
    pub fn tap(&mut self, player_id: &str) -> Result<TapOutcome, LineupError> {
        if self.roster.player(player_id).is_none() {
            return Err(LineupError::UnknownPlayer(player_id.to_string()));
        }

        let Some(selected_id) = self.selected.take() else {
            self.selected = Some(player_id.to_string());
            return Ok(TapOutcome::Selected);
        };

        if selected_id == player_id {
            return Ok(TapOutcome::Deselected);
        }

        self.swap(&selected_id, player_id)?;

        Ok(TapOutcome::Swapped)
    }

    /// Exchanges placement and starter status between two players, leaving
    /// identities untouched. An exchange preserves the starter count, so
    /// it cannot breach the starting-eleven cap; only a drop can.
    fn swap(&mut self, first_id: &str, second_id: &str) -> Result<(), LineupError> {
        let first = self
            .roster
            .player(first_id)
            .cloned()
            .ok_or_else(|| LineupError::UnknownPlayer(first_id.to_string()))?;
        let second = self
            .roster
            .player(second_id)
            .cloned()
            .ok_or_else(|| LineupError::UnknownPlayer(second_id.to_string()))?;

        let updated = self.roster.apply(|player| {
            if player.id == first.id {
                let mut next = player.clone();
                next.placement = second.placement;
                next.starter = second.starter;
                next
            } else if player.id == second.id {
                let mut next = player.clone();
                next.placement = first.placement;
                next.starter = first.starter;
                next
            } else {
                player.clone()
            }
        });

        debug!("lineup: swapped {} <-> {}", first.id, second.id);

        self.roster = updated;

        Ok(())
    }

    /// Begins a drag. The view layer is responsible for suppressing the
    /// native drag preview so only the tracked token is visible.
    pub fn drag_start(&mut self, player_id: &str) -> Result<(), LineupError> {
        if self.roster.player(player_id).is_none() {
            return Err(LineupError::UnknownPlayer(player_id.to_string()));
        }

        self.drag = DragState::Dragging {
            player_id: player_id.to_string(),
            position: None,
        };

        Ok(())
    }

    /// Updates the live drag position from the current pointer sample.
    /// No-op while no drag is active; never mutates the roster.
    pub fn drag_over(&mut self, pointer: PointerPosition, bounds: PitchBounds) {
        if let DragState::Dragging { position, .. } = &mut self.drag {
            *position = Some(PitchCoordinate::from_pointer(pointer, &bounds));
        }
    }

    /// Drops the dragged player at the given pointer position, capturing a
    /// free-form placement and promoting the player to the starting eleven.
    /// Dropping an existing starter only moves it. The drag state is
    /// cleared on every exit path.
    pub fn drop(&mut self, pointer: PointerPosition, bounds: PitchBounds) -> DropOutcome {
        let dragged_id = match &self.drag {
            DragState::Dragging { player_id, .. } => player_id.clone(),
            DragState::Idle => return DropOutcome::Ignored,
        };

        self.drag = DragState::Idle;

        let Some(player) = self.roster.player(&dragged_id).cloned() else {
            return DropOutcome::Ignored;
        };

        if !player.starter && self.roster.starter_count() >= MAX_STARTERS {
            warn!("lineup: drop of {} rejected, starters full", player.id);
            self.notice = Some(Notice::starters_full());
            return DropOutcome::Rejected;
        }

        let point = PitchCoordinate::from_pointer(pointer, &bounds).rounded();
        let captured = Placement::Captured(point);

        let updated = self.roster.apply(|p| {
            if p.id == player.id {
                let mut next = p.clone();
                next.placement = captured;
                next.starter = true;
                next
            } else {
                p.clone()
            }
        });

        debug!(
            "lineup: {} dropped at {:.0},{:.0}",
            player.id, point.x, point.y
        );

        self.roster = updated;

        DropOutcome::Placed
    }

    /// Ends an abandoned drag (pointer released off-target, or the drag
    /// cancelled without a drop). Always clears the drag state so no ghost
    /// drag survives the gesture.
    pub fn drag_end(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Render coordinate for a player: the live drag position while that
    /// player is being dragged, otherwise its committed placement. Total;
    /// two players may legitimately resolve to the same point.
    pub fn resolved_position(&self, player: &Player) -> PitchCoordinate {
        if let DragState::Dragging {
            player_id,
            position: Some(point),
        } = &self.drag
        {
            if *player_id == player.id {
                return *point;
            }
        }

        player.placement.coordinate()
    }

    /// A stable snapshot of the current starters for the export
    /// collaborator, taken from the committed roster only.
    pub fn starters_snapshot(&self) -> Vec<StarterSnapshot> {
        self.roster
            .starters()
            .into_iter()
            .map(|p| StarterSnapshot {
                id: p.id.clone(),
                number: p.number.clone(),
                name: p.name.clone(),
                position: p.placement.coordinate(),
            })
            .collect()
    }
}
