//! Output encodings for synthesized translation audio.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AudioFormat {
    /// RIFF/WAV, 16-bit PCM at 16 kHz, mono.
    #[default]
    Riff16Khz16BitMonoPcm,
    /// RIFF/WAV, 16-bit PCM at 24 kHz, mono.
    Riff24Khz16BitMonoPcm,
    /// Headerless 16-bit PCM at 16 kHz, mono.
    Raw16Khz16BitMonoPcm,
    /// Headerless 16-bit PCM at 24 kHz, mono.
    Raw24Khz16BitMonoPcm,
    /// MP3 24 kHz, 48 kbps.
    Audio24Khz48KbitrateMonoMp3,
    /// Ogg/Opus 16 kHz, mono.
    Ogg16Khz16BitMonoOpus,
}

impl AudioFormat {
    /// Sample rate of the encoded audio in Hz.
    pub const fn sample_rate(self) -> u32 {
        match self {
            Self::Riff16Khz16BitMonoPcm | Self::Raw16Khz16BitMonoPcm | Self::Ogg16Khz16BitMonoOpus => {
                16_000
            }
            Self::Riff24Khz16BitMonoPcm
            | Self::Raw24Khz16BitMonoPcm
            | Self::Audio24Khz48KbitrateMonoMp3 => 24_000,
        }
    }

    /// Whether frames carry a container header.
    pub const fn has_header(self) -> bool {
        !matches!(self, Self::Raw16Khz16BitMonoPcm | Self::Raw24Khz16BitMonoPcm)
    }
}
