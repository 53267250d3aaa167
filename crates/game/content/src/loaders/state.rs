//! Initial arena state loader.

use std::path::Path;

use game_core::GameState;

use crate::loaders::{LoadResult, read_file};

/// Loader for the starting [`GameState`] from RON files.
///
/// The file usually only declares `available`; the player list, last action
/// and winner default to empty.
pub struct StateLoader;

impl StateLoader {
    /// Load the initial state from a RON file.
    pub fn load(path: &Path) -> LoadResult<GameState> {
        let content = read_file(path)?;
        Self::from_ron_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load state {}: {}", path.display(), e))
    }

    /// Parse the initial state from RON text.
    pub fn from_ron_str(content: &str) -> LoadResult<GameState> {
        let state: GameState = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse state RON: {}", e))?;

        if state.winner.is_some() {
            anyhow::bail!("initial state must not declare a winner");
        }

        Ok(state)
    }

    /// The default arena shipped with the crate.
    pub fn embedded() -> LoadResult<GameState> {
        Self::from_ron_str(include_str!("../../data/default_state.ron"))
    }
}
