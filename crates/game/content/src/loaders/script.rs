//! Scripted turn loader.
//!
//! A script is a list of turns and each turn is a list of actions, written
//! either in RON or in JSON:
//!
//! ```ron
//! [
//!     [
//!         {"type": "add player", "playerId": 1, "class": "warrior", "weapon": "sword", "x": 0, "y": 0},
//!     ],
//!     [
//!         {"type": "move", "playerId": 1, "x": 2, "y": 3},
//!     ],
//! ]
//! ```

use std::path::Path;

use game_core::Action;

use crate::loaders::{LoadResult, read_file};

/// Ordered turns, each an ordered list of actions.
pub type Script = Vec<Vec<Action>>;

/// Loader for scripted turns.
pub struct ScriptLoader;

impl ScriptLoader {
    /// Load a script, picking the format from the file extension.
    ///
    /// `.json` files are parsed as JSON, everything else as RON.
    pub fn load(path: &Path) -> LoadResult<Script> {
        let content = read_file(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let script = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_ron_str(&content)
        };
        script.map_err(|e| anyhow::anyhow!("Failed to load script {}: {}", path.display(), e))
    }

    /// Parse a script from RON text.
    ///
    /// Actions are internally tagged, which the RON deserializer only
    /// accepts through its untyped [`ron::Value`] with string map keys.
    pub fn from_ron_str(content: &str) -> LoadResult<Script> {
        let value: ron::Value = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse script RON: {}", e))?;
        value
            .into_rust()
            .map_err(|e| anyhow::anyhow!("Failed to decode script actions: {}", e))
    }

    /// Parse a script from JSON text.
    pub fn from_json_str(content: &str) -> LoadResult<Script> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse script JSON: {}", e))
    }

    /// The default skirmish shipped with the crate.
    pub fn embedded() -> LoadResult<Script> {
        Self::from_ron_str(include_str!("../../data/scripts/skirmish.ron"))
    }
}
