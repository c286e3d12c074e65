//! # Fluent Translation Domain
//!
//! Shared event payloads and value types for speech-translation synthesis.
//!
//! These types are produced by the session layer and handed to listener
//! code; they hold no behaviour beyond construction and read access, so
//! the dispatch crate and applications can depend on them without
//! pulling in any runtime.

pub mod audio_format;
pub mod language;
pub mod result_reason;
pub mod session_event;
pub mod session_id;
pub mod synthesis_config;
pub mod translation_error;
pub mod translation_synthesis_event;
pub mod translation_synthesis_result;

// Re-export core types
pub use audio_format::AudioFormat;
pub use language::Language;
pub use result_reason::ResultReason;
pub use session_event::{SessionEvent, SessionEventArgs};
pub use session_id::SessionId;
pub use synthesis_config::TranslationSynthesisConfig;
pub use translation_error::{TranslationError, TranslationResult};
pub use translation_synthesis_event::TranslationSynthesisEventArgs;
pub use translation_synthesis_result::TranslationSynthesisResult;

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{
        AudioFormat, Language, ResultReason, SessionEvent, SessionEventArgs, SessionId,
        TranslationError, TranslationResult, TranslationSynthesisConfig,
        TranslationSynthesisEventArgs, TranslationSynthesisResult,
    };
}
