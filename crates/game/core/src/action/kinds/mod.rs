//! Concrete action kinds.

mod combat;
mod equip;
mod game_over;
mod join;
mod movement;

pub use combat::AttackAction;
pub use equip::ChangeWeaponAction;
pub use game_over::GameOverAction;
pub use join::AddPlayerAction;
pub use movement::MoveAction;

use crate::action::ActionError;
use crate::state::Coord;

/// Coordinates must be non-negative on both axes.
pub(crate) fn ensure_position(x: Coord, y: Coord) -> Result<(), ActionError> {
    if x >= 0 && y >= 0 {
        Ok(())
    } else {
        Err(ActionError::NegativeCoordinates { x, y })
    }
}

/// Weapon must be present in the catalog.
pub(crate) fn ensure_weapon(
    state: &crate::state::GameState,
    weapon: &str,
) -> Result<(), ActionError> {
    if state.available.is_known_weapon(weapon) {
        Ok(())
    } else {
        Err(ActionError::UnknownWeapon(weapon.to_owned()))
    }
}
