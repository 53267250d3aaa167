//! High-level runtime orchestrator.
//!
//! The runtime owns the [`Store`], the script and the [`TurnDriver`], and
//! exposes a builder-based API for clients to assemble and run a replay.

use game_core::{Action, GameConfig, GameState};

use crate::driver::{RunOutcome, TurnDriver, TurnListener};
use crate::error::{Result, RuntimeError};
use crate::store::{Store, SubscriptionId};

/// Runtime configuration shared across the orchestrator and the driver.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
}

/// A fully assembled replay.
pub struct Runtime {
    store: Store,
    script: Vec<Vec<Action>>,
    driver: TurnDriver,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// Registers a store subscriber; see [`Store::subscribe`].
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&GameState) + Send + 'static,
    {
        self.store.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Replays the whole script.
    pub async fn run<L>(&mut self, listener: &mut L) -> RunOutcome
    where
        L: TurnListener + ?Sized,
    {
        tracing::info!(
            turns = self.script.len(),
            delay_ms = self.driver.turn_delay().as_millis() as u64,
            "starting replay"
        );
        self.driver
            .run_with(&mut self.store, &self.script, listener)
            .await
    }

    pub fn into_state(self) -> GameState {
        self.store.into_state()
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    script: Option<Vec<Vec<Action>>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            script: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial game state
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Provide the turns to replay
    pub fn script(mut self, script: Vec<Vec<Action>>) -> Self {
        self.script = Some(script);
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let state = self.state.ok_or(RuntimeError::MissingInitialState)?;
        let script = self.script.ok_or(RuntimeError::MissingScript)?;

        if let Some(winner) = state.winner {
            return Err(RuntimeError::AlreadyFinished { winner });
        }

        Ok(Runtime {
            store: Store::new(state),
            script,
            driver: TurnDriver::from_config(&self.config.game_config),
        })
    }
}
