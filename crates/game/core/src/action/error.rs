//! Action rejection errors.
//!
//! A rejected action is never fatal: the engine leaves the state untouched
//! and reports why through [`ActionError`].

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Coord, PlayerId};

/// Reasons an action is refused by validation or by the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// A winner has already been declared.
    #[error("game already finished, player {winner} won")]
    GameFinished { winner: PlayerId },

    #[error("player id {0} is negative")]
    NegativePlayerId(PlayerId),

    /// Acting player is missing or has no hp left.
    #[error("player {0} is not alive")]
    ActorNotAlive(PlayerId),

    /// Attack target is missing or has no hp left.
    #[error("target {0} is not alive")]
    TargetNotAlive(PlayerId),

    #[error("player id {0} is already taken")]
    DuplicatePlayerId(PlayerId),

    #[error("unknown class '{0}'")]
    UnknownClass(String),

    #[error("unknown weapon '{0}'")]
    UnknownWeapon(String),

    #[error("position [{x}:{y}] has a negative coordinate")]
    NegativeCoordinates { x: Coord, y: Coord },

    #[error("unknown action type")]
    UnknownActionType,
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            GameFinished { .. } | ActorNotAlive(_) | TargetNotAlive(_) => {
                ErrorSeverity::Recoverable
            }
            DuplicatePlayerId(_) => ErrorSeverity::Recoverable,
            NegativePlayerId(_) | UnknownClass(_) | UnknownWeapon(_) => ErrorSeverity::Validation,
            NegativeCoordinates { .. } | UnknownActionType => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            GameFinished { .. } => "ACTION_GAME_FINISHED",
            NegativePlayerId(_) => "ACTION_NEGATIVE_PLAYER_ID",
            ActorNotAlive(_) => "ACTION_ACTOR_NOT_ALIVE",
            TargetNotAlive(_) => "ACTION_TARGET_NOT_ALIVE",
            DuplicatePlayerId(_) => "ACTION_DUPLICATE_PLAYER_ID",
            UnknownClass(_) => "ACTION_UNKNOWN_CLASS",
            UnknownWeapon(_) => "ACTION_UNKNOWN_WEAPON",
            NegativeCoordinates { .. } => "ACTION_NEGATIVE_COORDINATES",
            UnknownActionType => "ACTION_UNKNOWN_TYPE",
        }
    }
}
