//! Deterministic WAV file writer.
//!
//! Clips are written as 8-bit unsigned mono PCM with no timestamps or other
//! variable metadata, so identical samples always give identical files.

mod format;
mod pcm;
mod writer;


pub use format::WavFormat;
pub use pcm::{extract_pcm_data, pcm_hash};
pub use writer::{samples_to_pcm8, write_wav, write_wav_to_vec, MAX_DATA_LEN};
