//! Client configuration read from environment variables.
use std::env;
use std::path::PathBuf;

/// Settings for one client run.
///
/// Environment variables:
/// - `ARENA_CONFIG` - game config TOML (default: embedded)
/// - `ARENA_STATE` - initial state RON (default: embedded)
/// - `ARENA_SCRIPT` - script in RON or JSON (default: embedded skirmish)
/// - `ARENA_TURN_DELAY_MS` - overrides `turn_delay_ms` from the game config
/// - `ARENA_COLOR` - `false` disables highlighting (default: true)
/// - `NO_COLOR` - any value disables highlighting
/// - `ARENA_LOG_DIR` - also write logs to `<dir>/arena.log`
/// - `ARENA_LOG_TO_FILE` - write logs to the platform cache directory
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub config_path: Option<PathBuf>,
    pub state_path: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
    pub turn_delay_ms: Option<u64>,
    pub color: bool,
    pub logging: LoggingConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            state_path: None,
            script_path: None,
            turn_delay_ms: None,
            color: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct client configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.config_path = lookup("ARENA_CONFIG").map(PathBuf::from);
        config.state_path = lookup("ARENA_STATE").map(PathBuf::from);
        config.script_path = lookup("ARENA_SCRIPT").map(PathBuf::from);
        config.turn_delay_ms = parse(&lookup, "ARENA_TURN_DELAY_MS");

        if lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
            config.color = false;
        } else if let Some(color) = parse::<bool, _>(&lookup, "ARENA_COLOR") {
            config.color = color;
        }

        config.logging.dir = lookup("ARENA_LOG_DIR").map(PathBuf::from);
        config.logging.to_file = parse(&lookup, "ARENA_LOG_TO_FILE").unwrap_or(false);

        config
    }
}

/// Where diagnostics go besides stderr.
#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    /// Explicit log directory.
    pub dir: Option<PathBuf>,
    /// Use the platform cache directory when `dir` is unset.
    pub to_file: bool,
}

impl LoggingConfig {
    /// Resolved log directory, if file logging is enabled.
    pub fn log_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.dir {
            return Some(dir.clone());
        }
        self.to_file.then(default_log_dir)
    }
}

/// Platform cache directory, e.g. `~/.cache/arena/logs` on Linux.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "arena")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/arena"))
        .join("logs")
}

fn parse<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}
