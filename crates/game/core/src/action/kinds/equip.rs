use crate::action::{ActionError, ActionTransition};
use crate::engine::StateReducer;
use crate::state::{GameState, PlayerId};

use super::ensure_weapon;

/// Swaps the weapon a living player holds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChangeWeaponAction {
    pub player_id: PlayerId,
    pub weapon: String,
}

impl ChangeWeaponAction {
    pub fn new(player_id: PlayerId, weapon: impl Into<String>) -> Self {
        Self {
            player_id,
            weapon: weapon.into(),
        }
    }
}

impl ActionTransition for ChangeWeaponAction {
    fn actor(&self) -> Option<PlayerId> {
        Some(self.player_id)
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        ensure_weapon(state, &self.weapon)
    }

    fn apply(&self, reducer: &mut StateReducer<'_>) -> Result<(), ActionError> {
        reducer
            .players()
            .update(self.player_id, |player| player.with_weapon(self.weapon.as_str()))
            .ok_or(ActionError::ActorNotAlive(self.player_id))
    }
}
