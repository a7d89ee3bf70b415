//! CLI argument definitions for the dialog-synth command-line interface.
//!
//! The `#[derive(Parser)]` types live here so that `main.rs` only dispatches
//! and tests can parse argument lists directly.

use std::path::PathBuf;

use clap::{Args, Parser};
use dialog_synth_spec::VoiceOverrides;

/// Default directory clips are written under.
pub const DEFAULT_OUT_ROOT: &str = "output";

/// dialog-synth - abstract dialogue voice synthesizer
///
/// Turns text into a babbling chiptune voice, one WAV file per sentence, and
/// plays it back while revealing the text unless --no-demo is set.
#[derive(Parser, Debug)]
#[command(name = "dialog-synth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Character voice name, also the output folder name
    #[arg(short, long)]
    pub character: Option<String>,

    /// Character preset .json file (ignored when --character is given)
    #[arg(short = 'p', long, value_name = "FILE")]
    pub character_preset: Option<PathBuf>,

    /// Text to synthesize, overrides --file
    #[arg(short, long)]
    pub text: Option<String>,

    /// Input text file
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Only write the .wav files, without the playback demonstration
    #[arg(short, long)]
    pub no_demo: bool,

    #[command(flatten)]
    pub voice: VoiceArgs,

    /// Seed for the pitch walk (random when omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Output root directory
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUT_ROOT)]
    pub out_root: PathBuf,

    /// Output a machine-readable JSON report (no colored output, no demo)
    #[arg(long)]
    pub json: bool,
}

/// Voice parameter flags. Anything left unset falls back to the preset, then
/// to the built-in default.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct VoiceArgs {
    /// Time length of each character [default: 50]
    #[arg(long, value_name = "MS")]
    pub character_length: Option<f64>,

    /// Time length of each space between words [default: 20]
    #[arg(long, value_name = "MS")]
    pub space_length: Option<f64>,

    /// Time length of the break after each punctuation mark [default: 200]
    #[arg(long, value_name = "MS")]
    pub punctuation_length: Option<f64>,

    /// Frequency offset for syllables ending in a period, negated for a
    /// question mark [default: -120]
    #[arg(long, value_name = "HZ", allow_negative_numbers = true)]
    pub punctuation_frequency_offset: Option<f64>,

    /// Multiplier for the speed of the text [default: 1]
    #[arg(long)]
    pub speed_multiplier: Option<f64>,

    /// Multiplier for the frequency of the voice [default: 1]
    #[arg(long)]
    pub frequency_multiplier: Option<f64>,

    /// Multiplier for the volume of the voice [default: 0.75]
    #[arg(long)]
    pub volume_multiplier: Option<f64>,

    /// Extra speed multiplier for sentences ending in '!' [default: 1.75]
    #[arg(long)]
    pub exclamation_speed_multiplier: Option<f64>,
}

impl VoiceArgs {
    /// The flags as an override layer.
    pub fn overrides(&self) -> VoiceOverrides {
        VoiceOverrides {
            character_length: self.character_length,
            space_length: self.space_length,
            punctuation_length: self.punctuation_length,
            punctuation_frequency_offset: self.punctuation_frequency_offset,
            speed_multiplier: self.speed_multiplier,
            frequency_multiplier: self.frequency_multiplier,
            volume_multiplier: self.volume_multiplier,
            exclamation_speed_multiplier: self.exclamation_speed_multiplier,
        }
    }
}
