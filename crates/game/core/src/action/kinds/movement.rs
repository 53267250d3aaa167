use crate::action::{ActionError, ActionTransition};
use crate::engine::StateReducer;
use crate::state::{Coord, GameState, PlayerId};

use super::ensure_position;

/// Teleports a living player to the given coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MoveAction {
    pub player_id: PlayerId,
    pub x: Coord,
    pub y: Coord,
}

impl MoveAction {
    pub fn new(player_id: PlayerId, x: Coord, y: Coord) -> Self {
        Self { player_id, x, y }
    }
}

impl ActionTransition for MoveAction {
    fn actor(&self) -> Option<PlayerId> {
        Some(self.player_id)
    }

    fn pre_validate(&self, _state: &GameState) -> Result<(), ActionError> {
        ensure_position(self.x, self.y)
    }

    fn apply(&self, reducer: &mut StateReducer<'_>) -> Result<(), ActionError> {
        reducer
            .players()
            .update(self.player_id, |player| player.with_position(self.x, self.y))
            .ok_or(ActionError::ActorNotAlive(self.player_id))
    }
}
