//! Narration schedule: character-by-character text reveal paced like the audio.
//!
//! The schedule is a plain list of steps so that callers decide how to print
//! and how to wait. Pauses follow the same timing rules as the prosody engine,
//! plus one trailing punctuation pause per sentence.

use std::time::Duration;

use dialog_synth_spec::VoiceParams;

use crate::segment::{self, Word};

/// One step of a narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationStep {
    /// Print one character.
    Print(char),
    /// Wait before the next step.
    Pause(Duration),
}

/// Converts milliseconds to a duration; anything not positive and finite is
/// zero.
pub fn millis(ms: f64) -> Duration {
    if ms.is_finite() && ms > 0.0 {
        Duration::from_secs_f64(ms / 1000.0)
    } else {
        Duration::ZERO
    }
}

/// Builds the narration schedule for one sentence.
///
/// Words without vowels have no audio, so they are printed at once with a
/// trailing space and no pauses. They are not skipped, which keeps the
/// revealed text identical to the sentence.
pub fn narrate(sentence: &str, params: &VoiceParams) -> Vec<NarrationStep> {
    let time = params.time_multiplier(sentence.ends_with('!'));
    let char_pause = millis(params.character_length * time);
    let space_pause = millis(params.space_length * time);
    let punctuation_pause = millis(params.punctuation_length * time);

    let mut steps = Vec::new();
    for word in segment::words(sentence) {
        match word {
            Word::Unvoiced(text) => {
                steps.extend(text.chars().map(NarrationStep::Print));
                steps.push(NarrationStep::Print(' '));
                continue;
            }
            Word::Empty => {}
            Word::Voiced(syllables) => {
                for syllable in syllables {
                    for c in syllable.chars() {
                        steps.push(NarrationStep::Print(c));
                        steps.push(NarrationStep::Pause(char_pause));
                    }
                    if segment::ends_with_punctuation(syllable) {
                        steps.push(NarrationStep::Pause(punctuation_pause));
                    }
                }
            }
        }

        steps.push(NarrationStep::Pause(space_pause));
        steps.push(NarrationStep::Print(' '));
    }

    steps.push(NarrationStep::Pause(punctuation_pause));
    steps
}

/// Sum of all pauses in a schedule.
pub fn total_duration(steps: &[NarrationStep]) -> Duration {
    steps
        .iter()
        .map(|step| match step {
            NarrationStep::Pause(d) => *d,
            NarrationStep::Print(_) => Duration::ZERO,
        })
        .sum()
}

/// Characters printed by a schedule.
pub fn printed_text(steps: &[NarrationStep]) -> String {
    steps
        .iter()
        .filter_map(|step| match step {
            NarrationStep::Print(c) => Some(*c),
            NarrationStep::Pause(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::synthesize;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_millis() {
        assert_eq!(millis(50.0), Duration::from_millis(50));
        assert_eq!(millis(0.0), Duration::ZERO);
        assert_eq!(millis(-5.0), Duration::ZERO);
        assert_eq!(millis(f64::INFINITY), Duration::ZERO);
    }

    #[test]
    fn test_narrate_hi() {
        let steps = narrate("Hi!", &VoiceParams::default());
        let time = 1.0 / 1.75;
        let char_pause = millis(50.0 * time);
        let punctuation_pause = millis(200.0 * time);

        assert_eq!(
            steps,
            vec![
                NarrationStep::Print('H'),
                NarrationStep::Pause(char_pause),
                NarrationStep::Print('i'),
                NarrationStep::Pause(char_pause),
                NarrationStep::Print('!'),
                NarrationStep::Pause(char_pause),
                NarrationStep::Pause(punctuation_pause),
                NarrationStep::Pause(millis(20.0 * time)),
                NarrationStep::Print(' '),
                NarrationStep::Pause(punctuation_pause),
            ]
        );
    }

    #[test]
    fn test_narrate_prints_every_word() {
        let steps = narrate("Hmm, well  ok.", &VoiceParams::default());
        assert_eq!(printed_text(&steps), "Hmm, well  ok. ");
    }

    #[test]
    fn test_unvoiced_word_has_no_pause() {
        let steps = narrate("Hmm", &VoiceParams::default());
        assert_eq!(
            steps,
            vec![
                NarrationStep::Print('H'),
                NarrationStep::Print('m'),
                NarrationStep::Print('m'),
                NarrationStep::Print(' '),
                NarrationStep::Pause(millis(200.0)),
            ]
        );
    }

    #[test]
    fn test_narration_tracks_clip_length() {
        let params = VoiceParams::default();
        let text = "Well, that's fine. Are you sure about that?";
        let mut rng = create_rng(5);
        let synthesis = synthesize(text, &params, &mut rng).unwrap();

        for output in &synthesis.sentences {
            let clip = output.clip.as_ref().unwrap();
            let steps = narrate(&output.sentence.text, &params);
            let trailing = params.punctuation_length
                * params.time_multiplier(output.sentence.is_exclaimed())
                / 1000.0;
            let narrated = total_duration(&steps).as_secs_f64() - trailing;

            // Each tone rounds to the nearest sample.
            assert!(
                (narrated - clip.duration_seconds()).abs() < 0.001,
                "{}: narrated {} vs clip {}",
                output.sentence.text,
                narrated,
                clip.duration_seconds()
            );
        }
    }
}
