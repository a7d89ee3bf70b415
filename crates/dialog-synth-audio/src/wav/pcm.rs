//! Reading PCM back out of clip files, and hashing it.

use super::writer::HEADER_LEN;

fn read_u32_le(bytes: &[u8], at: usize) -> Option<u32> {
    let field = bytes.get(at..at + 4)?;
    Some(u32::from_le_bytes([field[0], field[1], field[2], field[3]]))
}

/// Returns the payload of the `data` chunk of a RIFF/WAVE buffer.
///
/// Chunks before `data` are skipped along with their pad bytes. Returns
/// `None` for anything that is not a WAVE file or whose data chunk runs past
/// the end of the buffer.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_LEN || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE"
    {
        return None;
    }

    let mut chunk = 12;
    loop {
        let id = wav_data.get(chunk..chunk + 4)?;
        let size = read_u32_le(wav_data, chunk + 4)? as usize;
        let body = chunk + 8;

        if id == b"data" {
            return wav_data.get(body..body.checked_add(size)?);
        }
        chunk = body.checked_add(size)?.checked_add(size % 2)?;
    }
}

/// BLAKE3 hex digest of an unsigned 8-bit PCM payload.
///
/// The header is not hashed, so clips compare equal by sound alone.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}
