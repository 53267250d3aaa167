use std::fmt;

/// Identifier of a player taking part in the arena.
///
/// Ids come straight from scripted data, so the inner value is signed: a
/// negative id is representable and rejected by validation instead of by the
/// loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns true if the id can never belong to a player.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for PlayerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hit points. Zero or below means dead; there is no upper clamp.
pub type Hp = i64;

/// Grid coordinate. Valid positions are non-negative on both axes.
pub type Coord = i64;
