//! Deterministic arena rules shared by the runtime and the tools.
//!
//! `game-core` defines the canonical rules (actions, validation, engine and
//! world state) and exposes pure APIs only. All state mutation flows through
//! [`engine::GameEngine`], and [`engine::reduce`] offers the same pipeline as
//! a pure `(state, action) -> state` function.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionError, ActionKind, ActionTransition, AddPlayerAction, AttackAction,
    ChangeWeaponAction, GameOverAction, MoveAction, is_valid_action, validate,
};
pub use config::GameConfig;
pub use engine::{GameEngine, PlayersReducer, StateReducer, reduce};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Available, Census, Class, Coord, GameState, Hp, Player, PlayerId, Weapon, WorldState,
};
