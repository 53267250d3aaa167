/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Pause between two scripted turns, in milliseconds.
    pub turn_delay_ms: u64,
}

impl GameConfig {
    /// Starting hp for catalog classes that do not declare their own.
    pub const DEFAULT_PLAYER_HP: i64 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TURN_DELAY_MS: u64 = 200;

    pub fn new() -> Self {
        Self {
            turn_delay_ms: Self::DEFAULT_TURN_DELAY_MS,
        }
    }

    pub fn turn_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.turn_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
