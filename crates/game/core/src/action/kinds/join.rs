use crate::action::{ActionError, ActionTransition};
use crate::engine::StateReducer;
use crate::state::{Coord, GameState, Hp, Player, PlayerId};

use super::{ensure_position, ensure_weapon};

/// A new player enters the arena.
///
/// When `hp` is omitted the player starts with the hp of its class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AddPlayerAction {
    pub player_id: PlayerId,
    pub class: String,
    pub weapon: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub hp: Option<Hp>,
    pub x: Coord,
    pub y: Coord,
}

impl AddPlayerAction {
    pub fn new(
        player_id: PlayerId,
        class: impl Into<String>,
        weapon: impl Into<String>,
        x: Coord,
        y: Coord,
    ) -> Self {
        Self {
            player_id,
            class: class.into(),
            weapon: weapon.into(),
            hp: None,
            x,
            y,
        }
    }

    #[must_use]
    pub fn with_hp(mut self, hp: Hp) -> Self {
        self.hp = Some(hp);
        self
    }
}

impl ActionTransition for AddPlayerAction {
    fn actor(&self) -> Option<PlayerId> {
        Some(self.player_id)
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), ActionError> {
        if !state.available.is_known_class(&self.class) {
            return Err(ActionError::UnknownClass(self.class.clone()));
        }
        ensure_weapon(state, &self.weapon)?;
        ensure_position(self.x, self.y)?;

        if state.world.contains(self.player_id) {
            return Err(ActionError::DuplicatePlayerId(self.player_id));
        }

        Ok(())
    }

    fn apply(&self, reducer: &mut StateReducer<'_>) -> Result<(), ActionError> {
        let hp = match self.hp {
            Some(hp) => hp,
            None => reducer
                .state()
                .available
                .class(&self.class)
                .map(|class| class.hp)
                .ok_or_else(|| ActionError::UnknownClass(self.class.clone()))?,
        };

        reducer.players().push(Player::new(
            self.player_id,
            self.class.clone(),
            self.weapon.clone(),
            hp,
            self.x,
            self.y,
        ));
        Ok(())
    }
}
