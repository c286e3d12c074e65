//! Unified error for synthesis events and their configuration.
use thiserror::Error;

/// Error raised around translation-synthesis events.
///
/// The event payloads themselves never fail; these variants cover the
/// configuration, dispatch and listener layers that surround them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// Configuration-related failure reason.
    #[error("configuration: {0}")]
    Configuration(String),
    /// A listener rejected an event.
    #[error("listener: {0}")]
    Listener(String),
    /// Error while handing an event to listeners.
    #[error("dispatch: {0}")]
    Dispatch(String),
}

/// Result alias for translation-synthesis operations.
pub type TranslationResult<T> = Result<T, TranslationError>;
