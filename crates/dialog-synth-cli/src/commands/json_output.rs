//! JSON output types for machine-readable CLI output.
//!
//! With `--json`, a run prints exactly one [`SynthOutput`] to stdout and
//! nothing else, so other tools can parse the result programmatically.

use dialog_synth_spec::VoiceParams;
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// Configuration errors pass through the `E00x` codes and synthesis errors the
/// `AUDIO_00x` codes of the library crates.
pub mod error_codes {
    /// Input file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Output file or directory could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// Any other failure
    pub const INTERNAL: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "AUDIO_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// One written clip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClipReport {
    /// Sentence index in the document.
    pub index: usize,
    /// Sentence text.
    pub text: String,
    /// Path of the written file.
    pub path: String,
    /// Number of samples.
    pub samples: usize,
    /// Length in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

/// A sentence that produced no audio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedSentence {
    /// Sentence index in the document.
    pub index: usize,
    /// Sentence text.
    pub text: String,
}

/// Result of a synthesis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynthOutput {
    /// Whether every file was written.
    pub success: bool,
    /// Character name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// Seed used for the pitch walk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Resolved voice parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<VoiceParams>,
    /// Directory the clips were written to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    /// Written clips in sentence order.
    pub clips: Vec<ClipReport>,
    /// Sentences without vowels.
    pub skipped: Vec<SkippedSentence>,
    /// Errors, empty on success.
    pub errors: Vec<JsonError>,
}

impl SynthOutput {
    /// Creates a failed result.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            character: None,
            seed: None,
            params: None,
            out_dir: None,
            clips: Vec::new(),
            skipped: Vec::new(),
            errors,
        }
    }
}
