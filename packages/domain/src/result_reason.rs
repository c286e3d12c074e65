//! Reason codes attached to recognition, translation and synthesis results.
use serde::{Deserialize, Serialize};

/// Why a result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultReason {
    /// Speech could not be recognized.
    NoMatch,
    /// The operation was canceled.
    Canceled,
    /// Intermediate recognition hypothesis.
    RecognizingSpeech,
    /// Final recognition result.
    RecognizedSpeech,
    /// Intermediate translation hypothesis.
    TranslatingSpeech,
    /// Final translation result.
    TranslatedSpeech,
    /// A chunk of synthesized audio is available.
    SynthesizingAudio,
    /// Synthesis of the current utterance finished.
    SynthesizingAudioCompleted,
    /// Synthesis of a new utterance started.
    SynthesizingAudioStarted,
}

impl ResultReason {
    /// True for the reasons used by synthesis results.
    pub const fn is_synthesis(self) -> bool {
        matches!(
            self,
            Self::SynthesizingAudio
                | Self::SynthesizingAudioCompleted
                | Self::SynthesizingAudioStarted
        )
    }
}
