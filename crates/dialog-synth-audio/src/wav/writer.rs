//! RIFF/WAVE serialization.

use std::io::{self, Write};

use super::format::WavFormat;

/// Size of the RIFF, fmt, and data chunk headers.
pub(crate) const HEADER_LEN: usize = 44;

/// Largest PCM payload whose RIFF size, including a pad byte, fits in 32 bits.
pub const MAX_DATA_LEN: usize = u32::MAX as usize - (HEADER_LEN - 8) - 1;

/// Writes a complete WAV file to a writer.
///
/// An odd-sized data chunk is followed by one pad byte, as RIFF requires.
/// Payloads longer than [`MAX_DATA_LEN`] fail with `InvalidInput`.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = u32::try_from(pcm_data.len())
        .ok()
        .filter(|&len| len as usize <= MAX_DATA_LEN)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} bytes of PCM data exceed the WAV size limit", pcm_data.len()),
            )
        })?;
    let pad = data_size % 2;
    let riff_size = 36 + data_size + pad;

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&riff_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;
    if pad == 1 {
        writer.write_all(&[0])?;
    }

    Ok(())
}

/// Writes a WAV file to a byte vector.
///
/// # Panics
/// If `pcm_data` is longer than [`MAX_DATA_LEN`].
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len() + 1);
    write_wav(&mut buffer, format, pcm_data).expect("PCM data within the WAV size limit");
    buffer
}

/// Converts signed 8-bit samples to unsigned 8-bit PCM by adding 128.
pub fn samples_to_pcm8(samples: &[i8]) -> Vec<u8> {
    samples
        .iter()
        .map(|&sample| (sample as i16 + 128) as u8)
        .collect()
}
