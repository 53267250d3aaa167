use super::common::PlayerId;
use super::player::Player;

/// Dynamic part of the arena: every player that ever joined, in list order.
///
/// List order is observable: an updated player is re-appended at the end.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WorldState {
    #[cfg_attr(feature = "serde", serde(default))]
    pub player_list: Vec<Player>,
}

impl WorldState {
    pub fn new(player_list: Vec<Player>) -> Self {
        Self { player_list }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.player_list.iter().find(|player| player.player_id == id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }

    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.player_list.iter().filter(|player| player.is_alive())
    }

    pub fn dead_players(&self) -> impl Iterator<Item = &Player> {
        self.player_list.iter().filter(|player| !player.is_alive())
    }
}
