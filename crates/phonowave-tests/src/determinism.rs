//! Determinism checks.
//!
//! Runs a producer several times and compares BLAKE3 digests of its output.

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// Index of the first run whose output differed, if any.
    pub first_mismatch: Option<usize>,
}

/// Runs `produce` `runs` times (at least twice) and compares the outputs.
pub fn verify_determinism<F, T>(produce: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> T,
    T: AsRef<[u8]>,
{
    let runs = runs.max(2);
    let reference = blake3::hash(produce().as_ref());
    let first_mismatch = (1..runs).find(|_| blake3::hash(produce().as_ref()) != reference);

    DeterminismResult {
        is_deterministic: first_mismatch.is_none(),
        runs,
        hash: reference.to_hex().to_string(),
        first_mismatch,
    }
}

/// Panics if `produce` is not deterministic over `runs` runs.
pub fn assert_deterministic<F, T>(produce: F, runs: usize) -> String
where
    F: Fn() -> T,
    T: AsRef<[u8]>,
{
    let result = verify_determinism(produce, runs);
    assert!(
        result.is_deterministic,
        "output changed on run {:?} of {}",
        result.first_mismatch, result.runs
    );
    result.hash
}
