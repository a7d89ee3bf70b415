//! Document-level synthesis entry point.

use dialog_synth_spec::{validate_params, VoiceParams, SAMPLE_RATE};
use rand::Rng;

use crate::clip::{render_clip, Clip};
use crate::error::AudioResult;
use crate::prosody::{PitchState, Prosody};
use crate::segment::{split_sentences, Sentence};

/// One sentence of the document with its audio, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceOutput {
    /// The sentence as segmented.
    pub sentence: Sentence,
    /// Rendered clip; `None` for vowel-less sentences.
    pub clip: Option<Clip>,
}

/// Result of synthesizing a whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    /// Non-blank sentences in source order.
    pub sentences: Vec<SentenceOutput>,
    /// Pitch walk position after the last voiced syllable.
    pub pitch: PitchState,
}

impl Synthesis {
    /// Iterates over the clips that were produced.
    pub fn clips(&self) -> impl Iterator<Item = &Clip> {
        self.sentences.iter().filter_map(|s| s.clip.as_ref())
    }

    /// Sentences that produced no audio.
    pub fn silent_sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.sentences
            .iter()
            .filter(|s| s.clip.is_none())
            .map(|s| &s.sentence)
    }
}

/// Synthesizes every sentence of `text`.
///
/// Parameters are validated first. Blank sentences are dropped; sentence
/// indices still count them. The pitch walk starts at the middle of the range
/// and carries over from one sentence to the next.
///
/// # Arguments
/// * `text` - Document text
/// * `params` - Resolved voice parameters
/// * `rng` - Source for the pitch walk; a seeded RNG makes output reproducible
pub fn synthesize<R: Rng + ?Sized>(
    text: &str,
    params: &VoiceParams,
    rng: &mut R,
) -> AudioResult<Synthesis> {
    validate_params(params)?;

    let prosody = Prosody::new(params);
    let mut pitch = PitchState::new(prosody.range());
    let mut sentences = Vec::new();

    for sentence in split_sentences(text) {
        if sentence.is_blank() {
            continue;
        }

        let (tones, next) = prosody.plan_sentence(&sentence.text, pitch, rng);
        pitch = next;

        let clip = render_clip(&sentence, &tones, SAMPLE_RATE)?;
        sentences.push(SentenceOutput { sentence, clip });
    }

    Ok(Synthesis { sentences, pitch })
}
