//! Arena client binary.
//!
//! Replays a scripted skirmish and narrates every state change on stdout.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Content (game config, initial state, script) from files or embedded defaults
//! 2. Runtime (store + turn driver) via `Runtime::builder`
//! 3. Presentation (narrator subscriber + console listener)
//!
//! # Examples
//!
//! ```bash
//! # Embedded skirmish
//! cargo run -p arena-client
//!
//! # Custom script, faster pacing, no colors
//! ARENA_SCRIPT=duel.json ARENA_TURN_DELAY_MS=50 NO_COLOR=1 cargo run -p arena-client
//! ```

use anyhow::Result;
use arena_client::{ClientConfig, ConsoleListener, Theme, describe, load_content, logging};
use runtime::{Runtime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    logging::setup_logging(&config.logging)?;

    // 3. Load content
    let content = load_content(&config)?;
    tracing::info!(
        turns = content.script.len(),
        classes = content.initial_state.available.classes.len(),
        weapons = content.initial_state.available.weapons.len(),
        "Content loaded"
    );

    // 4. Build runtime
    let mut runtime = Runtime::builder()
        .config(RuntimeConfig {
            game_config: content.game_config,
        })
        .initial_state(content.initial_state)
        .script(content.script)
        .build()?;

    // 5. Narrate every state change
    let theme = Theme::new(config.color);
    runtime.subscribe(move |state| println!("{}", theme.paint(&describe(state))));

    // 6. Replay
    let outcome = runtime.run(&mut ConsoleListener).await;

    match outcome.winner() {
        Some(winner) => tracing::info!(%winner, "Replay finished"),
        None => tracing::info!("Replay finished without a winner"),
    }
    Ok(())
}
