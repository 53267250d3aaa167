//! Data-driven arena content and loaders.
//!
//! This crate supplies everything the simulation reads before it starts:
//! - the initial arena state (class and weapon catalogs, data-driven via RON)
//! - the scripted turns to replay (data-driven via RON or JSON)
//! - the game configuration (data-driven via TOML)
//!
//! A default arena and a default script are embedded in the binary so the
//! simulation runs without any data directory.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, Script, ScriptLoader, StateLoader};
