use crate::action::{ActionError, ActionTransition};
use crate::engine::StateReducer;
use crate::state::PlayerId;

/// Declares the winner of the match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOverAction {
    pub winner: PlayerId,
}

impl GameOverAction {
    pub fn new(winner: PlayerId) -> Self {
        Self { winner }
    }
}

impl ActionTransition for GameOverAction {
    fn actor(&self) -> Option<PlayerId> {
        None
    }

    fn apply(&self, reducer: &mut StateReducer<'_>) -> Result<(), ActionError> {
        reducer.declare_winner(self.winner);
        Ok(())
    }
}
