//! dialog-synth voice configuration
//!
//! This crate defines what a voice is: the resolved [`VoiceParams`] that drive
//! synthesis, the partial [`VoiceOverrides`] that command-line flags and
//! character presets contribute, and the [`Character`] that owns a preset.
//!
//! # Resolution
//!
//! Parameters are layered with explicit presence checks: explicit overrides
//! first, then the character preset, then built-in defaults.
//!
//! ```
//! use dialog_synth_spec::{validate_params, Character, VoiceOverrides, VoiceParams};
//!
//! let character = Character::from_preset_json(r#"{"name": "Guard", "speedMultiplier": 0.8}"#)
//!     .unwrap()
//!     .unwrap();
//! let explicit = VoiceOverrides {
//!     character_length: Some(40.0),
//!     ..Default::default()
//! };
//!
//! let params = VoiceParams::resolve(&[&explicit, &character.overrides]);
//! assert_eq!(params.character_length, 40.0);
//! assert_eq!(params.speed_multiplier, 0.8);
//! assert_eq!(params.space_length, 20.0);
//! assert!(validate_params(&params).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`params`]: parameter types, fixed constants, layered resolution
//! - [`character`]: character identity and preset parsing
//! - [`validation`]: domain checks for resolved parameters
//! - [`error`]: error type shared by the above

pub mod character;
pub mod error;
pub mod params;
pub mod validation;

pub use character::Character;
pub use error::{SpecError, SpecResult};
pub use params::{
    FrequencyRange, VoiceOverrides, VoiceParams, FREQUENCY_RANGE, MAX_AMPLITUDE, SAMPLE_RATE,
    SHAPE_HEADROOM, SILENCE_FREQUENCY,
};
pub use validation::validate_params;
