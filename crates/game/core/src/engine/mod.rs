//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! action passes validation first and only then reaches its transition, so a
//! rejected action leaves the state untouched. [`reduce`] is the pure form
//! used by the store: it never mutates its input.

mod reducer;

pub use reducer::{PlayersReducer, StateReducer};

use crate::action::{Action, ActionError, ActionTransition, validate};
use crate::state::GameState;

/// Applies actions to a borrowed state in place.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Validates and applies an action.
    ///
    /// On success the action is recorded as `last_action`. On failure the
    /// state is left exactly as it was.
    pub fn execute(&mut self, action: &Action) -> Result<(), ActionError> {
        *self.state = transition(self.state, action)?;
        Ok(())
    }
}

/// Validates `action` and builds the next state from a single copy of `state`.
fn transition(state: &GameState, action: &Action) -> Result<GameState, ActionError> {
    validate(state, action)?;

    let mut next = state.clone();
    apply_transition(action, &mut StateReducer::new(&mut next))?;
    next.last_action = Some(action.clone());
    Ok(next)
}

/// Routes an already validated action to its transition.
fn apply_transition(action: &Action, reducer: &mut StateReducer<'_>) -> Result<(), ActionError> {
    match action {
        Action::AddPlayer(transition) => transition.apply(reducer),
        Action::Move(transition) => transition.apply(reducer),
        Action::ChangeWeapon(transition) => transition.apply(reducer),
        Action::Attack(transition) => transition.apply(reducer),
        Action::GameOver(transition) => transition.apply(reducer),
        Action::Unknown => Err(ActionError::UnknownActionType),
    }
}

/// Pure reducer: returns the state that results from applying `action`.
///
/// Invalid or unknown actions yield an unchanged copy of `state`.
pub fn reduce(state: &GameState, action: &Action) -> GameState {
    transition(state, action).unwrap_or_else(|_| state.clone())
}
