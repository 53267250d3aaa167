//! Resolves the content a run needs, from files or the embedded defaults.
use anyhow::{Context, Result};
use game_content::{ConfigLoader, Script, ScriptLoader, StateLoader};
use game_core::{GameConfig, GameState};

use crate::config::ClientConfig;

/// Everything the runtime is built from.
#[derive(Clone, Debug)]
pub struct Content {
    pub game_config: GameConfig,
    pub initial_state: GameState,
    pub script: Script,
}

/// Loads each piece from its configured path, or the embedded default.
pub fn load_content(config: &ClientConfig) -> Result<Content> {
    let mut game_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::embedded().context("embedded game config is invalid")?,
    };
    if let Some(delay) = config.turn_delay_ms {
        game_config.turn_delay_ms = delay;
    }

    let initial_state = match &config.state_path {
        Some(path) => StateLoader::load(path)?,
        None => StateLoader::embedded().context("embedded initial state is invalid")?,
    };

    let script = match &config.script_path {
        Some(path) => ScriptLoader::load(path)?,
        None => ScriptLoader::embedded().context("embedded script is invalid")?,
    };

    Ok(Content {
        game_config,
        initial_state,
        script,
    })
}
