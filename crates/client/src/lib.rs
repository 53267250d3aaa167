//! Terminal client for the arena replay.
//!
//! The binary assembles content, the runtime and the presentation layer:
//! - [`config`] reads the client settings from the environment
//! - [`content`] resolves the game config, initial state and script
//! - [`logging`] installs the tracing subscriber
//! - [`presentation`] turns state changes into colored narration lines
pub mod config;
pub mod content;
pub mod logging;
pub mod presentation;

pub use config::{ClientConfig, LoggingConfig};
pub use content::{Content, load_content};
pub use presentation::{ConsoleListener, Theme, describe};
