//! Voice parameters and layered override resolution.

use serde::{Deserialize, Serialize};

/// Output sample rate in Hz. Tones and the WAV header both use it.
pub const SAMPLE_RATE: u32 = 44_100;

/// Full-scale amplitude of a signed 8-bit sample.
pub const MAX_AMPLITUDE: f64 = 128.0;

/// Distance kept between the chiptune shape's ceiling and full scale.
pub const SHAPE_HEADROOM: f64 = 16.0;

/// Frequency of the low, inverted middle section of a silence tone.
pub const SILENCE_FREQUENCY: f64 = 50.0;

/// Range the random pitch walk is clamped to.
pub const FREQUENCY_RANGE: FrequencyRange = FrequencyRange {
    min: 250.0,
    max: 350.0,
};

/// Inclusive frequency interval in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    /// Lower bound in Hz.
    pub min: f64,
    /// Upper bound in Hz.
    pub max: f64,
}

impl FrequencyRange {
    /// Midpoint of the range.
    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Largest step the pitch walk may take from one syllable to the next.
    pub fn step(&self) -> f64 {
        self.mid() / 2.0
    }

    /// Clamps a frequency into the range.
    pub fn clamp(&self, freq: f64) -> f64 {
        freq.clamp(self.min, self.max)
    }

    /// Returns true if `freq` lies within the range.
    pub fn contains(&self, freq: f64) -> bool {
        (self.min..=self.max).contains(&freq)
    }
}

/// Fully resolved voice parameters.
///
/// Built once per run from [`VoiceOverrides`] layers and never mutated while
/// synthesizing. Lengths are in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceParams {
    /// Length of one character of a syllable (ms).
    pub character_length: f64,
    /// Pause after each word (ms).
    pub space_length: f64,
    /// Pause after a syllable ending in punctuation (ms).
    pub punctuation_length: f64,
    /// Added to syllables ending in `.`, subtracted for `?` (Hz).
    pub punctuation_frequency_offset: f64,
    /// Global speed factor; durations are divided by it.
    pub speed_multiplier: f64,
    /// Scales every syllable frequency and the taper frequency.
    pub frequency_multiplier: f64,
    /// Scales the full-scale amplitude.
    pub volume_multiplier: f64,
    /// Extra speed factor for sentences ending in `!`.
    pub exclamation_speed_multiplier: f64,
}

impl Default for VoiceParams {
    fn default() -> Self {
        Self {
            character_length: 50.0,
            space_length: 20.0,
            punctuation_length: 200.0,
            punctuation_frequency_offset: -120.0,
            speed_multiplier: 1.0,
            frequency_multiplier: 1.0,
            volume_multiplier: 0.75,
            exclamation_speed_multiplier: 1.75,
        }
    }
}

impl VoiceParams {
    /// Resolves parameters from override layers.
    ///
    /// `layers` is ordered from highest to lowest priority; any field left
    /// unset by every layer falls back to [`VoiceParams::default`]. Presence is
    /// what counts, so an explicit `0.0` wins over lower layers.
    pub fn resolve(layers: &[&VoiceOverrides]) -> Self {
        let mut params = Self::default();
        for layer in layers.iter().rev() {
            layer.apply_to(&mut params);
        }
        params
    }

    /// Duration factor for a sentence: the inverse of its effective speed.
    pub fn time_multiplier(&self, exclaimed: bool) -> f64 {
        let mut speed = self.speed_multiplier;
        if exclaimed {
            speed *= self.exclamation_speed_multiplier;
        }
        1.0 / speed
    }

    /// Amplitude used for every voiced and taper tone.
    pub fn volume(&self) -> f64 {
        MAX_AMPLITUDE * self.volume_multiplier
    }

    /// Hard ceiling applied by the chiptune waveform.
    pub fn shape_ceiling(&self) -> f64 {
        self.volume() - SHAPE_HEADROOM
    }

    /// Frequency of taper tones.
    pub fn taper_frequency(&self) -> f64 {
        FREQUENCY_RANGE.mid() * self.frequency_multiplier
    }
}

/// A partial set of voice parameters.
///
/// Command-line flags and character presets are both expressed as overrides
/// and layered by [`VoiceParams::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punctuation_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub punctuation_frequency_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclamation_speed_multiplier: Option<f64>,
}

impl VoiceOverrides {
    /// Writes every set field into `params`.
    pub fn apply_to(&self, params: &mut VoiceParams) {
        if let Some(v) = self.character_length {
            params.character_length = v;
        }
        if let Some(v) = self.space_length {
            params.space_length = v;
        }
        if let Some(v) = self.punctuation_length {
            params.punctuation_length = v;
        }
        if let Some(v) = self.punctuation_frequency_offset {
            params.punctuation_frequency_offset = v;
        }
        if let Some(v) = self.speed_multiplier {
            params.speed_multiplier = v;
        }
        if let Some(v) = self.frequency_multiplier {
            params.frequency_multiplier = v;
        }
        if let Some(v) = self.volume_multiplier {
            params.volume_multiplier = v;
        }
        if let Some(v) = self.exclamation_speed_multiplier {
            params.exclamation_speed_multiplier = v;
        }
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
