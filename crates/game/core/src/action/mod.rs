//! Action domain.
//!
//! An [`Action`] is an immutable command describing one discrete arena event.
//! Each concrete kind lives in [`kinds`] and implements [`ActionTransition`],
//! which splits execution into a read-only validation step and a mutation
//! step driven by the engine.
//!
//! # Module Structure
//!
//! - `kinds`: one struct per action type (join, move, change weapon, attack, game over)
//! - `error`: [`ActionError`], the reason an action was rejected
//! - `validation`: the ordered rule set deciding whether an action may apply

pub mod error;
pub mod kinds;
pub mod validation;

pub use error::ActionError;
pub use kinds::{AddPlayerAction, AttackAction, ChangeWeaponAction, GameOverAction, MoveAction};
pub use validation::{is_valid_action, validate};

use crate::engine::StateReducer;
use crate::state::{GameState, PlayerId};

/// Defines how a concrete action variant checks and mutates game state.
pub trait ActionTransition {
    /// Returns the player performing this action, if any.
    fn actor(&self) -> Option<PlayerId>;

    /// Type-specific checks against the state **before** mutation.
    fn pre_validate(&self, _state: &GameState) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action through the state reducer.
    fn apply(&self, reducer: &mut StateReducer<'_>) -> Result<(), ActionError>;
}

/// Tagged arena command.
///
/// The serialized form is tagged by a `type` field (`"add player"`, `"move"`,
/// `"change weapon"`, `"attack"`, `"game over"`); any other tag becomes
/// [`Action::Unknown`], which validation always rejects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Action {
    #[cfg_attr(feature = "serde", serde(rename = "add player"))]
    AddPlayer(AddPlayerAction),

    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    Move(MoveAction),

    #[cfg_attr(feature = "serde", serde(rename = "change weapon"))]
    ChangeWeapon(ChangeWeaponAction),

    #[cfg_attr(feature = "serde", serde(rename = "attack"))]
    Attack(AttackAction),

    #[cfg_attr(feature = "serde", serde(rename = "game over"))]
    GameOver(GameOverAction),

    /// Placeholder for tags this version does not understand.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl Action {
    /// Returns the player performing this action, if the kind has one.
    pub fn actor(&self) -> Option<PlayerId> {
        match self {
            Action::AddPlayer(action) => action.actor(),
            Action::Move(action) => action.actor(),
            Action::ChangeWeapon(action) => action.actor(),
            Action::Attack(action) => action.actor(),
            Action::GameOver(action) => action.actor(),
            Action::Unknown => None,
        }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::AddPlayer(_) => ActionKind::AddPlayer,
            Action::Move(_) => ActionKind::Move,
            Action::ChangeWeapon(_) => ActionKind::ChangeWeapon,
            Action::Attack(_) => ActionKind::Attack,
            Action::GameOver(_) => ActionKind::GameOver,
            Action::Unknown => ActionKind::Unknown,
        }
    }

    /// Synthesized action declaring the winner of the match.
    pub fn game_over(winner: PlayerId) -> Self {
        Action::GameOver(GameOverAction::new(winner))
    }
}

impl From<AddPlayerAction> for Action {
    fn from(action: AddPlayerAction) -> Self {
        Action::AddPlayer(action)
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Action::Move(action)
    }
}

impl From<ChangeWeaponAction> for Action {
    fn from(action: ChangeWeaponAction) -> Self {
        Action::ChangeWeapon(action)
    }
}

impl From<AttackAction> for Action {
    fn from(action: AttackAction) -> Self {
        Action::Attack(action)
    }
}

impl From<GameOverAction> for Action {
    fn from(action: GameOverAction) -> Self {
        Action::GameOver(action)
    }
}

/// Discriminant of [`Action`], rendered with the wire tag.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
)]
pub enum ActionKind {
    #[strum(serialize = "add player")]
    AddPlayer,
    #[strum(serialize = "move")]
    Move,
    #[strum(serialize = "change weapon")]
    ChangeWeapon,
    #[strum(serialize = "attack")]
    Attack,
    #[strum(serialize = "game over")]
    GameOver,
    #[strum(serialize = "unknown")]
    Unknown,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
