use super::common::{Coord, Hp, PlayerId};

/// A single combatant in the arena.
///
/// Players are never removed from the world; a dead player stays in the list
/// with `hp <= 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Player {
    pub player_id: PlayerId,
    pub class: String,
    pub weapon: String,
    pub hp: Hp,
    pub x: Coord,
    pub y: Coord,
}

impl Player {
    pub fn new(
        player_id: PlayerId,
        class: impl Into<String>,
        weapon: impl Into<String>,
        hp: Hp,
        x: Coord,
        y: Coord,
    ) -> Self {
        Self {
            player_id,
            class: class.into(),
            weapon: weapon.into(),
            hp,
            x,
            y,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Returns a copy moved to the given coordinates.
    #[must_use]
    pub fn with_position(&self, x: Coord, y: Coord) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }

    /// Returns a copy holding a different weapon.
    #[must_use]
    pub fn with_weapon(&self, weapon: impl Into<String>) -> Self {
        Self {
            weapon: weapon.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with `damage` subtracted from hp. Hp may go negative.
    #[must_use]
    pub fn with_damage(&self, damage: Hp) -> Self {
        Self {
            hp: self.hp - damage,
            ..self.clone()
        }
    }
}
