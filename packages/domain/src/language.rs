//! BCP-47 language tag (e.g. "en-US").
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(Cow<'static, str>);

impl Language {
    /// Create a language tag from a static code.
    pub const fn new(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Create a language tag from an owned code, e.g. one read from config.
    pub fn owned(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    /// Get the underlying language code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// English (US)
    pub const ENGLISH_US: Self = Self::new("en-US");

    /// English (UK)
    pub const ENGLISH_UK: Self = Self::new("en-GB");

    /// Spanish
    pub const SPANISH: Self = Self::new("es-ES");

    /// French
    pub const FRENCH: Self = Self::new("fr-FR");

    /// German
    pub const GERMAN: Self = Self::new("de-DE");

    /// Japanese
    pub const JAPANESE: Self = Self::new("ja-JP");

    /// Chinese (Simplified)
    pub const CHINESE_SIMPLIFIED: Self = Self::new("zh-CN");
}
