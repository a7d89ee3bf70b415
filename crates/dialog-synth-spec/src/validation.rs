//! Voice parameter validation.
//!
//! Explicit zeros survive resolution, so values are checked here before any
//! synthesis starts instead of being silently replaced by defaults.

use crate::error::{SpecError, SpecResult};
use crate::params::VoiceParams;

/// Validates that a value is finite.
///
/// # Example
/// ```
/// use dialog_synth_spec::validation::validate_finite;
///
/// assert!(validate_finite("punctuationFrequencyOffset", -120.0).is_ok());
/// assert!(validate_finite("punctuationFrequencyOffset", f64::NAN).is_err());
/// ```
pub fn validate_finite(name: &str, value: f64) -> SpecResult<()> {
    if !value.is_finite() {
        return Err(SpecError::invalid_param(
            name,
            format!("must be finite, got {}", value),
        ));
    }
    Ok(())
}

/// Validates that a value is finite and `>= 0`.
pub fn validate_non_negative(name: &str, value: f64) -> SpecResult<()> {
    validate_finite(name, value)?;
    if value < 0.0 {
        return Err(SpecError::invalid_param(
            name,
            format!("must be >= 0, got {}", value),
        ));
    }
    Ok(())
}

/// Validates that a value is finite and `> 0`.
///
/// # Example
/// ```
/// use dialog_synth_spec::validation::validate_positive;
///
/// assert!(validate_positive("speedMultiplier", 1.5).is_ok());
/// assert!(validate_positive("speedMultiplier", 0.0).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> SpecResult<()> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(SpecError::invalid_param(
            name,
            format!("must be greater than 0, got {}", value),
        ));
    }
    Ok(())
}

/// Validates a resolved parameter set.
///
/// Speeds divide durations and the frequency multiplier must keep tones at a
/// positive pitch, so those three must be strictly positive.
pub fn validate_params(params: &VoiceParams) -> SpecResult<()> {
    validate_non_negative("characterLength", params.character_length)?;
    validate_non_negative("spaceLength", params.space_length)?;
    validate_non_negative("punctuationLength", params.punctuation_length)?;
    validate_finite(
        "punctuationFrequencyOffset",
        params.punctuation_frequency_offset,
    )?;
    validate_positive("speedMultiplier", params.speed_multiplier)?;
    validate_positive("frequencyMultiplier", params.frequency_multiplier)?;
    validate_non_negative("volumeMultiplier", params.volume_multiplier)?;
    validate_positive(
        "exclamationSpeedMultiplier",
        params.exclamation_speed_multiplier,
    )?;
    Ok(())
}
