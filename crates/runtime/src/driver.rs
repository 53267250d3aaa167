//! Paced replay of scripted turns.
//!
//! The [`TurnDriver`] waits the configured delay before every turn, then
//! dispatches that turn's actions one by one. After each dispatch it checks
//! for a decisive state (one player alive, at least one dead); when it finds
//! one it declares the survivor the winner and drops the rest of the script.

use std::time::Duration;

use game_core::{Action, GameConfig, PlayerId};

use crate::store::Store;

/// How a replay ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every scripted turn was played.
    Exhausted { turns: usize },

    /// A decisive state was reached during turn `turn` (zero-based).
    GameOver { winner: PlayerId, turn: usize },
}

impl RunOutcome {
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            RunOutcome::Exhausted { .. } => None,
            RunOutcome::GameOver { winner, .. } => Some(*winner),
        }
    }

    pub fn stopped_early(&self) -> bool {
        matches!(self, RunOutcome::GameOver { .. })
    }
}

/// Observer for driver progress.
pub trait TurnListener: Send {
    /// Called once the delay before turn `index` has elapsed.
    fn turn_started(&mut self, _index: usize) {}

    /// Called exactly once when the replay ends.
    fn finished(&mut self, _outcome: &RunOutcome) {}
}

/// Listener that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentListener;

impl TurnListener for SilentListener {}

/// Replays a script against a [`Store`].
#[derive(Debug, Clone)]
pub struct TurnDriver {
    turn_delay: Duration,
}

impl TurnDriver {
    pub fn new(turn_delay: Duration) -> Self {
        Self { turn_delay }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.turn_delay())
    }

    pub fn turn_delay(&self) -> Duration {
        self.turn_delay
    }

    /// Replays `turns` without reporting progress.
    pub async fn run(&self, store: &mut Store, turns: &[Vec<Action>]) -> RunOutcome {
        self.run_with(store, turns, &mut SilentListener).await
    }

    /// Replays `turns`, reporting progress to `listener`.
    pub async fn run_with<L>(
        &self,
        store: &mut Store,
        turns: &[Vec<Action>],
        listener: &mut L,
    ) -> RunOutcome
    where
        L: TurnListener + ?Sized,
    {
        for (index, actions) in turns.iter().enumerate() {
            tokio::time::sleep(self.turn_delay).await;

            tracing::info!(turn = index, actions = actions.len(), "turn started");
            listener.turn_started(index);

            for action in actions {
                // Rejections are logged by the store and never stop the replay.
                let _ = store.dispatch(action);

                if let Some(winner) = store.state().decisive_survivor() {
                    tracing::info!(turn = index, %winner, "decisive state reached");
                    let _ = store.dispatch(&Action::game_over(winner));
                    return finish(listener, RunOutcome::GameOver { winner, turn: index });
                }
            }
        }

        tracing::info!(turns = turns.len(), "script exhausted");
        finish(listener, RunOutcome::Exhausted { turns: turns.len() })
    }
}

impl Default for TurnDriver {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

fn finish<L>(listener: &mut L, outcome: RunOutcome) -> RunOutcome
where
    L: TurnListener + ?Sized,
{
    listener.finished(&outcome);
    outcome
}
