//! Runtime error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires an initial state before building")]
    MissingInitialState,

    #[error("runtime requires a script before building")]
    MissingScript,

    #[error("initial state already declares player {winner} as the winner")]
    AlreadyFinished { winner: game_core::PlayerId },
}
