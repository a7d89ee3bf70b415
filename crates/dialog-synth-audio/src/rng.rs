//! Deterministic RNG for the pitch walk.
//!
//! Every random draw made while synthesizing a document comes from one PCG32
//! stream, so a fixed seed reproduces the same contour and the same bytes.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The seed is duplicated into both halves of the 64-bit state.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}
