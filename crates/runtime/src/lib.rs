//! Runtime orchestration for the arena replay.
//!
//! This crate wires the pure rules from `game-core` into a running
//! simulation. Consumers build a [`Runtime`], subscribe to state changes and
//! await [`Runtime::run`] to replay a script turn by turn.
//!
//! Modules are organized by responsibility:
//! - [`store`] holds the state and notifies subscribers after each dispatch
//! - [`driver`] paces the scripted turns and detects the end of the game
//! - [`runtime`] hosts the orchestrator and builder
pub mod driver;
pub mod error;
pub mod runtime;
pub mod store;

pub use driver::{RunOutcome, SilentListener, TurnDriver, TurnListener};
pub use error::{Result, RuntimeError};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use store::{Store, Subscriber, SubscriptionId};
