//! Clip assembly: one flat sample buffer and one WAV file per sentence.

use crate::error::{AudioError, AudioResult};
use crate::segment::Sentence;
use crate::tone::{generate_tone, ToneRequest};
use crate::wav::{pcm_hash, samples_to_pcm8, write_wav_to_vec, WavFormat, MAX_DATA_LEN};

/// Number of leading sentence characters used in a clip's file name.
pub const FILE_PREFIX_CHARS: usize = 19;

/// Extension of clip files.
pub const CLIP_EXTENSION: &str = "wav";

/// Synthesized audio for one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    /// Position of the sentence in the document.
    pub index: usize,
    /// Sentence text.
    pub text: String,
    /// Signed 8-bit samples, never empty.
    pub samples: Vec<i8>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl Clip {
    /// File name without extension, see [`clip_file_stem`].
    pub fn file_stem(&self) -> String {
        clip_file_stem(self.index, &self.text)
    }

    /// File name with extension.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem(), CLIP_EXTENSION)
    }

    /// Unsigned 8-bit PCM payload.
    pub fn pcm(&self) -> Vec<u8> {
        samples_to_pcm8(&self.samples)
    }

    /// Complete WAV file bytes.
    pub fn to_wav(&self) -> Vec<u8> {
        write_wav_to_vec(&WavFormat::mono_u8(self.sample_rate), &self.pcm())
    }

    /// BLAKE3 hash of the PCM payload.
    pub fn pcm_hash(&self) -> String {
        pcm_hash(&self.pcm())
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Builds a clip name from a sentence's index and the start of its text.
///
/// The prefix is the first [`FILE_PREFIX_CHARS`] characters, trimmed, with
/// only the first space replaced by `_`; later spaces are kept so existing
/// output directories keep their names.
pub fn clip_file_stem(index: usize, text: &str) -> String {
    let prefix: String = text.chars().take(FILE_PREFIX_CHARS).collect();
    format!("{}_{}", index, prefix.trim().replacen(' ', "_", 1))
}

/// Concatenates sample sequences in order into a clip.
///
/// Returns `None` when there are no samples, which is how vowel-less
/// sentences drop out.
pub fn assemble<I>(sentence: &Sentence, parts: I, sample_rate: u32) -> Option<Clip>
where
    I: IntoIterator<Item = Vec<i8>>,
{
    let samples: Vec<i8> = parts.into_iter().flatten().collect();
    if samples.is_empty() {
        return None;
    }

    Some(Clip {
        index: sentence.index,
        text: sentence.text.clone(),
        samples,
        sample_rate,
    })
}

/// Renders tone requests and assembles them into a clip.
///
/// Fails with [`AudioError::InvalidDuration`] before rendering anything if
/// the clip would be too long for a WAV file.
pub fn render_clip(
    sentence: &Sentence,
    tones: &[ToneRequest],
    sample_rate: u32,
) -> AudioResult<Option<Clip>> {
    let total = tones
        .iter()
        .fold(0usize, |sum, tone| sum.saturating_add(tone.num_samples(sample_rate)));
    if total > MAX_DATA_LEN {
        return Err(AudioError::InvalidDuration {
            duration: tones.iter().map(|tone| tone.duration.max(0.0)).sum(),
        });
    }

    let parts = tones
        .iter()
        .map(|tone| generate_tone(tone, sample_rate))
        .collect::<AudioResult<Vec<_>>>()?;
    Ok(assemble(sentence, parts, sample_rate))
}
