//! Synthesis configuration for a translation session.

use crate::audio_format::AudioFormat;
use crate::language::Language;
use crate::translation_error::{TranslationError, TranslationResult};
use serde::{Deserialize, Serialize};

/// Translation synthesis configuration value object.
///
/// Synthesis only happens when a voice is configured; without one the
/// pipeline still translates but emits no audio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSynthesisConfig {
    /// Language spoken into the recognizer.
    pub source_language: Language,
    /// Languages the speech is translated into.
    pub target_languages: Vec<Language>,
    /// Voice used to speak the translation.
    #[serde(default)]
    pub voice_name: Option<String>,
    /// Encoding of synthesized audio.
    #[serde(default)]
    pub output_format: AudioFormat,
}

impl TranslationSynthesisConfig {
    /// Create a configuration translating `source_language` into `target_language`.
    pub fn new(source_language: Language, target_language: Language) -> Self {
        Self {
            source_language,
            target_languages: vec![target_language],
            voice_name: None,
            output_format: AudioFormat::default(),
        }
    }

    /// Set the synthesis voice.
    pub fn with_voice(mut self, voice_name: impl Into<String>) -> Self {
        self.voice_name = Some(voice_name.into());
        self
    }

    /// Add another target language.
    pub fn with_target_language(mut self, language: Language) -> Self {
        self.target_languages.push(language);
        self
    }

    /// Set the output encoding.
    pub fn with_output_format(mut self, format: AudioFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Whether synthesis events will be produced.
    pub fn synthesis_enabled(&self) -> bool {
        self.voice_name
            .as_deref()
            .is_some_and(|voice| !voice.trim().is_empty())
    }

    /// Check the configuration for values no session could use.
    pub fn validate(&self) -> TranslationResult<()> {
        if self.target_languages.is_empty() {
            return Err(TranslationError::Configuration(
                "at least one target language is required".to_string(),
            ));
        }

        let languages = std::iter::once(&self.source_language).chain(&self.target_languages);
        for language in languages {
            if language.code().trim().is_empty() {
                return Err(TranslationError::Configuration(
                    "language tags must not be blank".to_string(),
                ));
            }
        }

        if let Some(voice) = &self.voice_name {
            if voice.trim().is_empty() {
                return Err(TranslationError::Configuration(
                    "voice name must not be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for TranslationSynthesisConfig {
    fn default() -> Self {
        Self::new(Language::ENGLISH_US, Language::GERMAN)
    }
}
