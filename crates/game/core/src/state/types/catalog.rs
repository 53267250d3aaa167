use crate::config::GameConfig;

use super::common::Hp;

/// Weapon catalog entry. Damage is applied verbatim on every hit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    pub damage: Hp,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: Hp) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }
}

/// Class catalog entry.
///
/// `hp` is the starting hp of a player joining with this class when the join
/// action does not carry an explicit value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Class {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default = "default_class_hp"))]
    pub hp: Hp,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hp: GameConfig::DEFAULT_PLAYER_HP,
        }
    }

    #[must_use]
    pub fn with_hp(mut self, hp: Hp) -> Self {
        self.hp = hp;
        self
    }
}

#[cfg(feature = "serde")]
fn default_class_hp() -> Hp {
    GameConfig::DEFAULT_PLAYER_HP
}

/// Static reference data: the classes and weapons a player may pick.
///
/// Read-only for the whole simulation.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Available {
    #[cfg_attr(feature = "serde", serde(default))]
    pub classes: Vec<Class>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapons: Vec<Weapon>,
}

impl Available {
    pub fn new(classes: Vec<Class>, weapons: Vec<Weapon>) -> Self {
        Self { classes, weapons }
    }

    pub fn class(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|class| class.name == name)
    }

    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|weapon| weapon.name == name)
    }

    pub fn is_known_class(&self, name: &str) -> bool {
        self.class(name).is_some()
    }

    pub fn is_known_weapon(&self, name: &str) -> bool {
        self.weapon(name).is_some()
    }
}
