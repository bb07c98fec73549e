//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the engine flows through this module. Each wave gets its own
//! stream, derived from the engine seed, the reset epoch and the wave's sequence
//! number, so waves never share noise and runs are reproducible.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives the seed for one wave.
///
/// Hashes the engine seed, reset epoch and wave sequence number (all
/// little-endian) with BLAKE3 and keeps the first four bytes.
pub fn derive_wave_seed(base_seed: u32, epoch: u32, sequence: u64) -> u32 {
    let mut input = Vec::with_capacity(16);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&epoch.to_le_bytes());
    input.extend_from_slice(&sequence.to_le_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates the RNG for one wave.
pub fn create_wave_rng(base_seed: u32, epoch: u32, sequence: u64) -> Pcg32 {
    create_rng(derive_wave_seed(base_seed, epoch, sequence))
}
