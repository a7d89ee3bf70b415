//! Error types for the audio backend.

use dialog_synth_spec::SpecError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Tone frequency is not finite.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Tone duration is not finite, or too long for a WAV file.
    #[error("invalid duration: {duration} seconds")]
    InvalidDuration {
        /// The invalid duration.
        duration: f64,
    },

    /// Voice parameters failed validation.
    #[error(transparent)]
    Params(#[from] SpecError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Returns a stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidFrequency { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::Params(_) => "AUDIO_003",
            AudioError::Io(_) => "AUDIO_004",
        }
    }
}
