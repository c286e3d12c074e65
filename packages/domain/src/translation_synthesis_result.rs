//! Synthesized audio produced while translating speech.
//!
//! The result is opaque to the event layer: it is built upstream by the
//! engine binding and only referenced by the events that announce it.

use crate::result_reason::ResultReason;
use serde::{Deserialize, Serialize};

/// Synthesis output for one translation event.
///
/// A non-empty audio frame carries [`ResultReason::SynthesizingAudio`];
/// an empty frame marks the end of synthesis for the current utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSynthesisResult {
    reason: ResultReason,
    audio: Vec<u8>,
}

impl TranslationSynthesisResult {
    /// Create a result with an explicit reason.
    pub fn new(reason: ResultReason, audio: Vec<u8>) -> Self {
        Self { reason, audio }
    }

    /// Create a result whose reason is derived from the audio frame.
    pub fn from_audio(audio: Vec<u8>) -> Self {
        let reason = if audio.is_empty() {
            ResultReason::SynthesizingAudioCompleted
        } else {
            ResultReason::SynthesizingAudio
        };
        Self { reason, audio }
    }

    /// End-of-synthesis marker.
    pub fn completed() -> Self {
        Self::from_audio(Vec::new())
    }

    /// Reason this result was produced.
    pub fn reason(&self) -> ResultReason {
        self.reason
    }

    /// Synthesized audio bytes, in the configured output format.
    pub fn audio(&self) -> &[u8] {
        &self.audio
    }

    /// Number of audio bytes.
    pub fn audio_len(&self) -> usize {
        self.audio.len()
    }

    /// Whether this result closes the current utterance.
    pub fn is_completed(&self) -> bool {
        self.reason == ResultReason::SynthesizingAudioCompleted
    }

    /// Consume the result, returning the audio bytes.
    pub fn into_audio(self) -> Vec<u8> {
        self.audio
    }
}
