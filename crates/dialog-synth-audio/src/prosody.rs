//! Prosody: turns segmented text into tone requests.
//!
//! Every voiced syllable draws its pitch from a bounded random walk that runs
//! across the whole document. The walk's position is the [`PitchState`], which
//! is passed in and handed back for each sentence rather than held anywhere
//! shared, so sentences must be planned in order.

use dialog_synth_spec::{FrequencyRange, VoiceParams, FREQUENCY_RANGE};
use rand::Rng;

use crate::segment::{self, Word};
use crate::tone::{Shape, ToneRequest};

/// Frequency of the previously voiced syllable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchState {
    previous: f64,
}

impl Default for PitchState {
    fn default() -> Self {
        Self::new(&FREQUENCY_RANGE)
    }
}

impl PitchState {
    /// Starts the walk at the middle of `range`.
    pub fn new(range: &FrequencyRange) -> Self {
        Self {
            previous: range.mid(),
        }
    }

    /// Frequency the next draw is relative to.
    pub fn previous(&self) -> f64 {
        self.previous
    }

    /// Draws the next frequency and returns it with the advanced state.
    pub fn advance<R: Rng + ?Sized>(self, range: &FrequencyRange, rng: &mut R) -> (f64, Self) {
        let next = draw_frequency(self.previous, range, rng);
        (next, Self { previous: next })
    }
}

/// Draws a whole-Hz frequency within `range.step()` of `previous`, clamped to
/// `range`.
pub fn draw_frequency<R: Rng + ?Sized>(previous: f64, range: &FrequencyRange, rng: &mut R) -> f64 {
    let low = (previous - range.step()).max(range.min);
    let high = (previous + range.step()).min(range.max);
    if low > high {
        return range.clamp(previous);
    }

    let r: f64 = rng.gen();
    (r * (high - low + 1.0) + low).floor().clamp(low, high)
}

/// Plans tones for sentences of one voice.
#[derive(Debug, Clone)]
pub struct Prosody<'a> {
    params: &'a VoiceParams,
    range: FrequencyRange,
}

impl<'a> Prosody<'a> {
    /// Creates a planner over the standard frequency range.
    pub fn new(params: &'a VoiceParams) -> Self {
        Self {
            params,
            range: FREQUENCY_RANGE,
        }
    }

    /// Voice parameters in use.
    pub fn params(&self) -> &VoiceParams {
        self.params
    }

    /// Frequency range of the pitch walk.
    pub fn range(&self) -> &FrequencyRange {
        &self.range
    }

    /// Final frequency of a syllable given its drawn pitch.
    ///
    /// The offset is applied after the range clamp and may leave the range.
    pub fn syllable_frequency(&self, drawn: f64, syllable: &str) -> f64 {
        let frequency = drawn * self.params.frequency_multiplier;
        if syllable.ends_with('.') {
            frequency + self.params.punctuation_frequency_offset
        } else if syllable.ends_with('?') {
            frequency - self.params.punctuation_frequency_offset
        } else {
            frequency
        }
    }

    /// Plans every tone of one sentence.
    ///
    /// # Arguments
    /// * `sentence` - Sentence text, leading whitespace already trimmed
    /// * `pitch` - Walk position left by the previous sentence
    /// * `rng` - Source for the pitch walk
    ///
    /// # Returns
    /// The tone requests in playback order and the walk position to hand to
    /// the next sentence.
    pub fn plan_sentence<R: Rng + ?Sized>(
        &self,
        sentence: &str,
        mut pitch: PitchState,
        rng: &mut R,
    ) -> (Vec<ToneRequest>, PitchState) {
        let params = self.params;
        let time = params.time_multiplier(sentence.ends_with('!'));
        let shape = Shape::chiptune(params);
        let mut tones = Vec::new();

        for word in segment::words(sentence) {
            match word {
                Word::Unvoiced(_) => continue,
                Word::Empty => {}
                Word::Voiced(syllables) => {
                    for syllable in syllables {
                        let (drawn, next) = pitch.advance(&self.range, rng);
                        pitch = next;

                        let char_count = syllable.chars().count() as f64;
                        tones.push(ToneRequest {
                            frequency: self.syllable_frequency(drawn, syllable),
                            duration: params.character_length * char_count * time / 1000.0,
                            volume: params.volume(),
                            shape,
                        });

                        if segment::ends_with_punctuation(syllable) {
                            let pause = params.punctuation_length * time / 1000.0;
                            tones.extend(ToneRequest::silence(pause, params));
                        }
                    }
                }
            }

            tones.push(ToneRequest::taper(
                params.space_length * time / 1000.0,
                params,
            ));
        }

        (tones, pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use rand::rngs::mock::StepRng;

    fn voiced(tones: &[ToneRequest]) -> Vec<&ToneRequest> {
        tones
            .iter()
            .filter(|t| matches!(t.shape, Shape::Chiptune { .. }))
            .collect()
    }

    #[test]
    fn test_pitch_state_starts_at_mid() {
        assert_eq!(PitchState::default().previous(), 300.0);
    }

    #[test]
    fn test_draw_stays_in_range() {
        let mut rng = create_rng(7);
        let mut pitch = PitchState::default();
        for _ in 0..10_000 {
            let (freq, next) = pitch.advance(&FREQUENCY_RANGE, &mut rng);
            assert!(FREQUENCY_RANGE.contains(freq), "{} out of range", freq);
            assert_eq!(freq.fract(), 0.0);
            pitch = next;
        }
    }

    #[test]
    fn test_draw_extremes() {
        let mut low = StepRng::new(0, 0);
        assert_eq!(draw_frequency(300.0, &FREQUENCY_RANGE, &mut low), 250.0);

        let mut high = StepRng::new(u64::MAX, 0);
        assert_eq!(draw_frequency(300.0, &FREQUENCY_RANGE, &mut high), 350.0);
    }

    #[test]
    fn test_draw_respects_step() {
        let narrow = FrequencyRange {
            min: 100.0,
            max: 1000.0,
        };
        // step = mid / 2 = 275
        let mut high = StepRng::new(u64::MAX, 0);
        assert_eq!(draw_frequency(200.0, &narrow, &mut high), 475.0);
        let mut low = StepRng::new(0, 0);
        assert_eq!(draw_frequency(900.0, &narrow, &mut low), 625.0);
    }

    #[test]
    fn test_punctuation_offset() {
        let params = VoiceParams::default();
        let prosody = Prosody::new(&params);
        assert_eq!(prosody.syllable_frequency(300.0, "fine."), 180.0);
        assert_eq!(prosody.syllable_frequency(300.0, "ok?"), 420.0);
        assert_eq!(prosody.syllable_frequency(300.0, "hey!"), 300.0);
        assert_eq!(prosody.syllable_frequency(300.0, "well,"), 300.0);
    }

    #[test]
    fn test_offset_applies_after_multiplier() {
        let params = VoiceParams {
            frequency_multiplier: 2.0,
            ..Default::default()
        };
        let prosody = Prosody::new(&params);
        assert_eq!(prosody.syllable_frequency(250.0, "so."), 380.0);
    }

    #[test]
    fn test_plan_question() {
        let params = VoiceParams::default();
        let prosody = Prosody::new(&params);
        let mut rng = StepRng::new(0, 0);

        let (tones, pitch) = prosody.plan_sentence("Are you ok?", PitchState::default(), &mut rng);

        // A-re | you | ok? + silence(3), and a taper after each of the 3 words.
        assert_eq!(tones.len(), 4 + 3 + 3);
        let syllables = voiced(&tones);
        assert_eq!(syllables.len(), 4);
        assert_eq!(syllables[0].frequency, 250.0);
        assert_eq!(syllables[3].frequency, 250.0 + 120.0);
        assert_eq!(syllables[0].duration, 0.05);
        assert_eq!(syllables[2].duration, 0.15);
        assert_eq!(syllables[3].duration, 0.15);
        assert_eq!(pitch.previous(), 250.0);

        assert_eq!(tones[tones.len() - 1], ToneRequest::taper(0.02, &params));
    }

    #[test]
    fn test_plan_exclamation_is_faster() {
        let params = VoiceParams::default();
        let prosody = Prosody::new(&params);
        let mut rng = StepRng::new(0, 0);

        let (tones, _) = prosody.plan_sentence("Hi!", PitchState::default(), &mut rng);
        // Hi! + silence(3) + space taper
        assert_eq!(tones.len(), 5);
        let expected = 50.0 * 3.0 / 1.75 / 1000.0;
        assert!((tones[0].duration - expected).abs() < 1e-12);

        let silence = ToneRequest::silence(0.2 / 1.75, &params);
        for (tone, want) in tones[1..4].iter().zip(silence.iter()) {
            assert!((tone.duration - want.duration).abs() < 1e-12);
            assert_eq!(tone.frequency, want.frequency);
        }
    }

    #[test]
    fn test_plan_unvoiced_sentence_is_empty() {
        let params = VoiceParams::default();
        let prosody = Prosody::new(&params);
        let mut rng = create_rng(1);
        let start = PitchState::default();

        let (tones, pitch) = prosody.plan_sentence("Hmm.", start, &mut rng);
        assert!(tones.is_empty());
        assert_eq!(pitch, start);
    }

    #[test]
    fn test_plan_empty_word_keeps_space_gap() {
        let params = VoiceParams::default();
        let prosody = Prosody::new(&params);
        let mut rng = create_rng(1);

        let (single, _) = prosody.plan_sentence("so go", PitchState::default(), &mut rng);
        let (double, _) = prosody.plan_sentence("so  go", PitchState::default(), &mut rng);
        assert_eq!(double.len(), single.len() + 1);
    }

    #[test]
    fn test_plan_threads_pitch_state() {
        let params = VoiceParams::default();
        let prosody = Prosody::new(&params);

        let mut rng_a = create_rng(99);
        let (_, mid) = prosody.plan_sentence("one two", PitchState::default(), &mut rng_a);
        let (second_a, _) = prosody.plan_sentence("three four", mid, &mut rng_a);

        let mut rng_b = create_rng(99);
        let (_, mid_b) = prosody.plan_sentence("one two", PitchState::default(), &mut rng_b);
        assert_eq!(mid, mid_b);
        let (second_b, _) = prosody.plan_sentence("three four", mid_b, &mut rng_b);
        assert_eq!(second_a, second_b);
    }
}
