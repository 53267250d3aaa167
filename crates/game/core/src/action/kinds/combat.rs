use crate::action::{ActionError, ActionTransition};
use crate::engine::StateReducer;
use crate::state::{GameState, PlayerId};

/// One hit from `player_id` on `target_id` with the attacker's current weapon.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AttackAction {
    pub player_id: PlayerId,
    pub target_id: PlayerId,
}

impl AttackAction {
    pub fn new(player_id: PlayerId, target_id: PlayerId) -> Self {
        Self {
            player_id,
            target_id,
        }
    }
}

impl ActionTransition for AttackAction {
    fn actor(&self) -> Option<PlayerId> {
        Some(self.player_id)
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        if state.is_alive(self.target_id) {
            Ok(())
        } else {
            Err(ActionError::TargetNotAlive(self.target_id))
        }
    }

    fn apply(&self, reducer: &mut StateReducer<'_>) -> Result<(), ActionError> {
        let state = reducer.state();
        let weapon = state
            .player(self.player_id)
            .map(|attacker| attacker.weapon.as_str())
            .ok_or(ActionError::ActorNotAlive(self.player_id))?;
        let damage = state
            .available
            .weapon(weapon)
            .map(|weapon| weapon.damage)
            .ok_or_else(|| ActionError::UnknownWeapon(weapon.to_owned()))?;

        reducer
            .players()
            .update(self.target_id, |target| target.with_damage(damage))
            .ok_or(ActionError::TargetNotAlive(self.target_id))
    }
}
