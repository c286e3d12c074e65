//! Turns synthesized audio for one session into published events.

use crate::event_bus::SynthesisEventBus;
use fluent_translation_domain::{
    SessionId, TranslationError, TranslationSynthesisConfig, TranslationSynthesisEventArgs,
    TranslationSynthesisResult,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-session producer of translation synthesis events.
///
/// The session id is fixed for the emitter's lifetime and stamped on
/// every event it publishes. Audio is passed through untouched.
#[derive(Debug)]
pub struct SynthesisEmitter {
    session_id: SessionId,
    config: TranslationSynthesisConfig,
    bus: Arc<SynthesisEventBus>,
    emitted: AtomicU64,
}

impl SynthesisEmitter {
    /// Create an emitter for a session, generating an id when none is given.
    pub fn new(
        config: TranslationSynthesisConfig,
        session_id: Option<SessionId>,
        bus: Arc<SynthesisEventBus>,
    ) -> Result<Self, TranslationError> {
        config.validate()?;
        let session_id = session_id.unwrap_or_default();

        tracing::debug!(
            session_id = %session_id,
            synthesis = config.synthesis_enabled(),
            format = ?config.output_format,
            "Synthesis emitter created"
        );

        Ok(Self {
            session_id,
            config,
            bus,
            emitted: AtomicU64::new(0),
        })
    }

    /// Session this emitter publishes for.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Configuration the emitter was created with.
    pub fn config(&self) -> &TranslationSynthesisConfig {
        &self.config
    }

    /// Number of events published so far.
    pub fn emitted_events(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    /// Publish a chunk of synthesized audio.
    ///
    /// An empty chunk closes the current utterance. Returns `None` when
    /// synthesis is disabled, otherwise the number of listeners that
    /// accepted the event.
    pub async fn emit_audio(&self, chunk: Vec<u8>) -> Result<Option<usize>, TranslationError> {
        if !self.config.synthesis_enabled() {
            tracing::debug!(
                session_id = %self.session_id,
                bytes = chunk.len(),
                "Synthesis disabled, dropping audio"
            );
            return Ok(None);
        }

        let result = TranslationSynthesisResult::from_audio(chunk);
        let args = TranslationSynthesisEventArgs::new(result, Some(self.session_id.clone()));
        let delivered = self.bus.publish(args).await?;
        self.emitted.fetch_add(1, Ordering::Relaxed);
        Ok(Some(delivered))
    }

    /// Publish the end-of-synthesis marker for the current utterance.
    pub async fn emit_completed(&self) -> Result<Option<usize>, TranslationError> {
        self.emit_audio(Vec::new()).await
    }
}
