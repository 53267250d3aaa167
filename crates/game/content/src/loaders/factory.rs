//! Content factory for loading arena content from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, GameState};

use crate::loaders::{ConfigLoader, LoadResult, Script, ScriptLoader, StateLoader};

/// Content factory that loads all arena content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── default_state.ron
/// └── scripts/
///     ├── skirmish.ron
///     └── duel.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the starting arena from `default_state.ron`.
    pub fn load_initial_state(&self) -> LoadResult<GameState> {
        StateLoader::load(&self.data_dir.join("default_state.ron"))
    }

    /// Load `scripts/{name}.ron`, falling back to `scripts/{name}.json`.
    pub fn load_script(&self, name: &str) -> LoadResult<Script> {
        let scripts = self.data_dir.join("scripts");
        let ron_path = scripts.join(format!("{}.ron", name));
        if ron_path.exists() {
            return ScriptLoader::load(&ron_path);
        }
        ScriptLoader::load(&scripts.join(format!("{}.json", name)))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped() -> ContentFactory {
        ContentFactory::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_shipped_data_directory() {
        let factory = shipped();

        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert_eq!(
            factory.load_initial_state().unwrap(),
            StateLoader::embedded().unwrap()
        );
        assert_eq!(
            factory.load_script("skirmish").unwrap(),
            ScriptLoader::embedded().unwrap()
        );
    }

    #[test]
    fn missing_script_is_an_error() {
        assert!(shipped().load_script("no-such-script").is_err());
    }
}
