//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. [`crate::action::ActionError`]) are defined
//! next to the code that produces them and implement [`GameError`] so callers
//! can classify and log them uniformly.

/// Severity level of an error, used for categorization when logging.
///
/// - **Recoverable**: the same action may succeed against a different state
/// - **Validation**: the action itself is malformed and will never apply
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Rejected because of the current state.
    ///
    /// Examples: actor already dead, target already dead
    Recoverable,

    /// Invalid input, rejected regardless of state.
    ///
    /// Examples: unknown weapon, negative coordinates
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }
}

/// Common trait for all game-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log filtering and for assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
