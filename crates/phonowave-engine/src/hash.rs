//! Frame fingerprints.

use phonowave_spec::SpectrogramFrame;

/// BLAKE3 hex digest over a sequence of frames.
///
/// Hashes each frame's time index (u64, little-endian), then its bins and peak as
/// little-endian `f64` bytes. Identical frame sequences always hash identically.
pub fn frames_hash<'a, I>(frames: I) -> String
where
    I: IntoIterator<Item = &'a SpectrogramFrame>,
{
    let mut hasher = blake3::Hasher::new();
    for frame in frames {
        hasher.update(&(frame.time_index as u64).to_le_bytes());
        for bin in &frame.bins {
            hasher.update(&bin.to_le_bytes());
        }
        hasher.update(&frame.peak.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}
