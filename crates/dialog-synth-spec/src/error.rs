//! Error types for voice configuration and input resolution.

use thiserror::Error;

/// Result type for configuration operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised while resolving what to synthesize and how.
///
/// All of these abort before any synthesis happens, so no partial output is
/// ever written for them.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Neither a character name nor a preset with a name was provided.
    #[error(
        "no character identity: provide a character name, or a character preset containing a \"name\" key"
    )]
    MissingCharacter,

    /// Neither direct text nor a readable text file was provided.
    #[error("no text to synthesize: provide text directly or an input file")]
    MissingText,

    /// The character name cannot be used as an output directory.
    #[error("unsafe character name '{name}': {message}")]
    UnsafeCharacterName {
        /// The offending name.
        name: String,
        /// Why it was rejected.
        message: String,
    },

    /// A voice parameter is out of its valid domain.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name (camelCase, as written in presets).
        name: String,
        /// Error message.
        message: String,
    },

    /// Preset file is not valid JSON or has wrongly typed fields.
    #[error("failed to parse character preset: {0}")]
    Preset(#[from] serde_json::Error),
}

impl SpecError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns a stable error code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::MissingCharacter => "E001",
            SpecError::MissingText => "E002",
            SpecError::UnsafeCharacterName { .. } => "E003",
            SpecError::InvalidParameter { .. } => "E004",
            SpecError::Preset(_) => "E005",
        }
    }
}
