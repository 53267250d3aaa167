//! Action validation.
//!
//! Rules are checked in a fixed order and the first failure wins:
//!
//! 1. No action applies once a winner has been declared.
//! 2. An acting player id must not be negative.
//! 3. Except for joining, the acting player must exist and be alive.
//! 4. Type-specific checks ([`ActionTransition::pre_validate`]).
//!
//! Unknown action types are always rejected.

use crate::action::{Action, ActionError, ActionTransition};
use crate::state::GameState;

/// Checks whether `action` may be applied to `state`.
pub fn validate(state: &GameState, action: &Action) -> Result<(), ActionError> {
    if let Some(winner) = state.winner {
        return Err(ActionError::GameFinished { winner });
    }

    if let Some(actor) = action.actor() {
        if actor.is_negative() {
            return Err(ActionError::NegativePlayerId(actor));
        }
        if !matches!(action, Action::AddPlayer(_)) && !state.is_alive(actor) {
            return Err(ActionError::ActorNotAlive(actor));
        }
    }

    match action {
        Action::AddPlayer(transition) => transition.pre_validate(state),
        Action::Move(transition) => transition.pre_validate(state),
        Action::ChangeWeapon(transition) => transition.pre_validate(state),
        Action::Attack(transition) => transition.pre_validate(state),
        Action::GameOver(transition) => transition.pre_validate(state),
        Action::Unknown => Err(ActionError::UnknownActionType),
    }
}

/// Boolean projection of [`validate`].
#[inline]
pub fn is_valid_action(state: &GameState, action: &Action) -> bool {
    validate(state, action).is_ok()
}
