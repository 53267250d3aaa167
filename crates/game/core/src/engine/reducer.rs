use crate::state::{GameState, Player, PlayerId};

/// Wraps mutable access to [`GameState`] with structured sub-reducers.
pub struct StateReducer<'a> {
    state: &'a mut GameState,
}

impl<'a> StateReducer<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn players(&mut self) -> PlayersReducer<'_> {
        PlayersReducer {
            players: &mut self.state.world.player_list,
        }
    }

    pub fn declare_winner(&mut self, winner: PlayerId) {
        debug_assert!(self.state.winner.is_none());
        self.state.winner = Some(winner);
    }
}

/// Copy-on-write access to the player list.
///
/// Updates never edit a record in place: the old record is removed and the
/// rebuilt one is appended, so an updated player always ends up last.
pub struct PlayersReducer<'a> {
    players: &'a mut Vec<Player>,
}

impl<'a> PlayersReducer<'a> {
    pub fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Rebuilds the player with `id` and moves it to the end of the list.
    ///
    /// Returns `None` when no such player exists.
    pub fn update<F>(&mut self, id: PlayerId, rebuild: F) -> Option<()>
    where
        F: FnOnce(&Player) -> Player,
    {
        let index = self
            .players
            .iter()
            .position(|player| player.player_id == id)?;
        let previous = self.players.remove(index);
        self.players.push(rebuild(&previous));
        Some(())
    }
}
