//! dialog-synth audio backend
//!
//! Turns dialogue text into an abstract, pitch-varying "voice": one short
//! tonal burst per syllable, gaps between words and after punctuation, and one
//! 8-bit WAV clip per sentence.
//!
//! # Pipeline
//!
//! 1. [`segment`] splits text into sentences, words, and syllables.
//! 2. [`prosody`] turns each sentence into [`ToneRequest`]s, drawing syllable
//!    pitch from a random walk whose [`PitchState`] runs across the document.
//! 3. [`tone`] renders each request to signed 8-bit samples.
//! 4. [`clip`] concatenates one sentence's samples into a [`Clip`] and
//!    serializes it with [`wav`].
//!
//! [`synthesize`] runs all of it over a document. [`narration`] produces the
//! matching text-reveal schedule for playback front ends.
//!
//! # Determinism
//!
//! All randomness comes from the caller's RNG. With [`create_rng`] and a fixed
//! seed, the same text and parameters give byte-identical clips.
//!
//! ```
//! use dialog_synth_audio::{create_rng, synthesize};
//! use dialog_synth_spec::VoiceParams;
//!
//! let params = VoiceParams::default();
//! let a = synthesize("Hi! Are you ok?", &params, &mut create_rng(7)).unwrap();
//! let b = synthesize("Hi! Are you ok?", &params, &mut create_rng(7)).unwrap();
//!
//! assert_eq!(a.clips().count(), 2);
//! assert_eq!(a, b);
//! ```

pub mod clip;
pub mod error;
pub mod generate;
pub mod narration;
pub mod prosody;
pub mod rng;
pub mod segment;
pub mod tone;
pub mod wav;

pub use clip::{assemble, clip_file_stem, render_clip, Clip};
pub use error::{AudioError, AudioResult};
pub use generate::{synthesize, SentenceOutput, Synthesis};
pub use narration::{narrate, NarrationStep};
pub use prosody::{PitchState, Prosody};
pub use rng::create_rng;
pub use segment::{split_sentences, split_syllables, Sentence};
pub use tone::{generate_tone, Shape, ToneRequest, WaveShape};
