//! Narration of state changes.
use game_core::{Action, GameState};

const INDESCRIBABLE: &str = "Something indescribable has happened";

/// Describes `state.last_action` in the context of `state`.
///
/// Attacks name the attacker's current weapon and report a kill when the
/// target is no longer alive.
pub fn describe(state: &GameState) -> String {
    let Some(action) = &state.last_action else {
        return INDESCRIBABLE.to_owned();
    };

    match action {
        Action::Attack(attack) => {
            let Some(attacker) = state.player(attack.player_id) else {
                return INDESCRIBABLE.to_owned();
            };
            let verb = if state.is_alive(attack.target_id) {
                "attacked"
            } else {
                "killed"
            };
            format!(
                "Player {} {} player {} with {}",
                attack.player_id, verb, attack.target_id, attacker.weapon
            )
        }
        Action::AddPlayer(join) => {
            format!("Player {} entered world as {}", join.player_id, join.class)
        }
        Action::Move(step) => {
            format!(
                "Player {} moved to position [{}:{}]",
                step.player_id, step.x, step.y
            )
        }
        Action::ChangeWeapon(change) => format!(
            "Player {} changed his weapon to {}",
            change.player_id, change.weapon
        ),
        Action::GameOver(game_over) => {
            format!("Game Over\nPlayer {} is the winner", game_over.winner)
        }
        Action::Unknown => INDESCRIBABLE.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        AddPlayerAction, AttackAction, Available, ChangeWeaponAction, Class, MoveAction,
        PlayerId, Weapon, reduce,
    };

    fn arena() -> GameState {
        let state = GameState::new(Available::new(
            vec![Class::new("warrior").with_hp(30), Class::new("mage").with_hp(5)],
            vec![Weapon::new("sword", 10), Weapon::new("staff", 20)],
        ));
        let state = reduce(
            &state,
            &AddPlayerAction::new(PlayerId(1), "warrior", "sword", 0, 0).into(),
        );
        reduce(
            &state,
            &AddPlayerAction::new(PlayerId(2), "mage", "staff", 1, 1).into(),
        )
    }

    #[test]
    fn fresh_state_is_indescribable() {
        let state = GameState::default();
        assert_eq!(describe(&state), "Something indescribable has happened");
    }

    #[test]
    fn join_and_move() {
        let state = arena();
        assert_eq!(describe(&state), "Player 2 entered world as mage");

        let state = reduce(&state, &MoveAction::new(PlayerId(1), 4, 7).into());
        assert_eq!(describe(&state), "Player 1 moved to position [4:7]");
    }

    #[test]
    fn attack_names_the_current_weapon() {
        let state = reduce(
            &arena(),
            &ChangeWeaponAction::new(PlayerId(2), "sword").into(),
        );
        assert_eq!(describe(&state), "Player 2 changed his weapon to sword");

        let state = reduce(&state, &AttackAction::new(PlayerId(2), PlayerId(1)).into());
        assert_eq!(describe(&state), "Player 2 attacked player 1 with sword");
    }

    #[test]
    fn lethal_attack_is_a_kill() {
        let state = reduce(&arena(), &AttackAction::new(PlayerId(1), PlayerId(2)).into());
        assert_eq!(describe(&state), "Player 1 killed player 2 with sword");

        let state = reduce(&state, &Action::game_over(PlayerId(1)));
        assert_eq!(describe(&state), "Game Over\nPlayer 1 is the winner");
    }

    #[test]
    fn rejected_action_repeats_previous_line() {
        let state = arena();
        let state = reduce(&state, &MoveAction::new(PlayerId(1), -1, 0).into());
        assert_eq!(describe(&state), "Player 2 entered world as mage");
    }
}
