//! Authoritative arena state representation.
//!
//! This module owns the data structures describing the players, the static
//! catalogs and the bookkeeping of the last applied action. Runtime layers
//! read this state freely but change it exclusively through the engine.
pub mod types;

pub use types::{Available, Class, Coord, Hp, Player, PlayerId, Weapon, WorldState};

use crate::action::Action;

/// Canonical snapshot of the arena.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameState {
    /// Players currently known to the arena.
    #[cfg_attr(feature = "serde", serde(default))]
    pub world: WorldState,

    /// Class and weapon catalogs.
    pub available: Available,

    /// Most recently accepted action. Rejected actions never touch it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_action: Option<Action>,

    /// Set once by a game over action and final afterwards.
    #[cfg_attr(feature = "serde", serde(default))]
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Creates a fresh state with an empty world over the given catalogs.
    pub fn new(available: Available) -> Self {
        Self {
            world: WorldState::default(),
            available,
            last_action: None,
            winner: None,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.world.player_list
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.world.player(id)
    }

    /// Returns true if the player exists and has hp left.
    ///
    /// Unknown ids count as dead.
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.player(id).is_some_and(Player::is_alive)
    }

    /// Counts living and dead players.
    pub fn census(&self) -> Census {
        let alive = self.world.alive_players().count();
        Census {
            alive,
            dead: self.world.player_list.len() - alive,
        }
    }

    /// Returns the sole survivor when exactly one player is alive and at
    /// least one player has died.
    pub fn decisive_survivor(&self) -> Option<PlayerId> {
        let mut alive = self.world.alive_players();
        let survivor = alive.next()?;
        if alive.next().is_some() || self.world.dead_players().next().is_none() {
            return None;
        }
        Some(survivor.player_id)
    }
}

/// Alive/dead partition of the player list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Census {
    pub alive: usize,
    pub dead: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.alive + self.dead
    }
}
