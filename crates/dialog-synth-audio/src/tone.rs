//! Tone generation: one fixed-pitch segment of signed 8-bit samples.
//!
//! The waveform is a pluggable [`WaveShape`]. Voiced syllables use the clipped
//! triangle [`Shape::Chiptune`]; gaps between words and punctuation use plain
//! sines built by [`ToneRequest::taper`] and [`ToneRequest::silence`].

use std::f64::consts::PI;

use dialog_synth_spec::{VoiceParams, SILENCE_FREQUENCY};

use crate::error::{AudioError, AudioResult};
use crate::wav::MAX_DATA_LEN;

const TWO_PI: f64 = 2.0 * PI;

/// Waveform shaping strategy.
pub trait WaveShape {
    /// Returns the level of sample `index` within a cycle of `cycle` samples,
    /// before rounding, for a tone of amplitude `volume`.
    fn level(&self, index: usize, cycle: usize, volume: f64) -> f64;
}

/// Built-in waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Sine at the given volume.
    Sine,
    /// Triangle built from `asin(sin(x))`, hard-limited from above.
    Chiptune {
        /// Highest level the shape may reach.
        ceiling: f64,
    },
}

impl Shape {
    /// Chiptune shape with the ceiling derived from the voice's volume.
    pub fn chiptune(params: &VoiceParams) -> Self {
        Shape::Chiptune {
            ceiling: params.shape_ceiling(),
        }
    }
}

impl WaveShape for Shape {
    fn level(&self, index: usize, cycle: usize, volume: f64) -> f64 {
        let phase = TWO_PI * index as f64 / cycle as f64;
        match *self {
            Shape::Sine => phase.sin() * volume,
            Shape::Chiptune { ceiling } => {
                let level = (2.0 * volume / PI) * phase.sin().asin();
                level.min(ceiling)
            }
        }
    }
}

/// Instruction to synthesize one segment of audio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneRequest {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Duration in seconds.
    pub duration: f64,
    /// Amplitude in 8-bit sample units. Negative values invert polarity.
    pub volume: f64,
    /// Waveform shape.
    pub shape: Shape,
}

impl ToneRequest {
    /// Creates a sine tone.
    pub fn sine(frequency: f64, duration: f64, volume: f64) -> Self {
        Self {
            frequency,
            duration,
            volume,
            shape: Shape::Sine,
        }
    }

    /// Sine at the voice's taper frequency and volume, used to ease into and
    /// out of gaps.
    pub fn taper(duration: f64, params: &VoiceParams) -> Self {
        Self::sine(params.taper_frequency(), duration, params.volume())
    }

    /// Pause after punctuation: a quarter-length taper, a half-length low
    /// tone of inverted polarity, and another quarter-length taper.
    pub fn silence(duration: f64, params: &VoiceParams) -> [Self; 3] {
        [
            Self::taper(duration / 4.0, params),
            Self::sine(SILENCE_FREQUENCY, duration / 2.0, -params.volume()),
            Self::taper(duration / 4.0, params),
        ]
    }

    /// Number of samples this request renders to.
    pub fn num_samples(&self, sample_rate: u32) -> usize {
        if self.duration > 0.0 {
            (self.duration * sample_rate as f64).round() as usize
        } else {
            0
        }
    }
}

/// Number of whole samples in one cycle of `frequency`, at least one.
pub fn samples_per_cycle(frequency: f64, sample_rate: u32) -> usize {
    ((sample_rate as f64 / frequency).floor() as usize).max(1)
}

/// Rounds a level to the nearest sample value, clipped to the 8-bit range.
pub fn quantize(level: f64) -> i8 {
    level.round().clamp(i8::MIN as f64, i8::MAX as f64) as i8
}

/// Renders samples for an arbitrary shape.
///
/// # Arguments
/// * `frequency` - Tone frequency in Hz; zero or negative yields no samples
/// * `duration` - Length in seconds; zero or negative yields no samples
/// * `volume` - Amplitude in sample units
/// * `shape` - Waveform strategy
/// * `sample_rate` - Output sample rate in Hz
pub fn generate_samples(
    frequency: f64,
    duration: f64,
    volume: f64,
    shape: &dyn WaveShape,
    sample_rate: u32,
) -> AudioResult<Vec<i8>> {
    if !frequency.is_finite() {
        return Err(AudioError::InvalidFrequency { freq: frequency });
    }
    if !duration.is_finite() {
        return Err(AudioError::InvalidDuration { duration });
    }
    // Punctuation offsets can push a pitch to or below zero; such a tone has
    // no cycle and renders as nothing.
    if duration <= 0.0 || frequency <= 0.0 {
        return Ok(Vec::new());
    }

    let count = (duration * sample_rate as f64).round();
    if count > MAX_DATA_LEN as f64 {
        return Err(AudioError::InvalidDuration { duration });
    }
    let num_samples = count as usize;
    let cycle = samples_per_cycle(frequency, sample_rate);

    Ok((0..num_samples)
        .map(|i| quantize(shape.level(i % cycle, cycle, volume)))
        .collect())
}

/// Renders a tone request.
pub fn generate_tone(request: &ToneRequest, sample_rate: u32) -> AudioResult<Vec<i8>> {
    generate_samples(
        request.frequency,
        request.duration,
        request.volume,
        &request.shape,
        sample_rate,
    )
}
