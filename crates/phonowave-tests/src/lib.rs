//! Phonowave End-to-End Test Infrastructure
//!
//! This crate holds integration tests that exercise the engine across crate
//! boundaries:
//!
//! - Properties: coordinate round-trip, bilateral symmetry, frame normalization
//! - Lifecycle: wave expiry, reset, id uniqueness
//! - **Determinism**: identical seeds give identical frames and renders
//! - CLI: scripted simulation and PNG rendering through the command layer
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p phonowave-tests
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{assert_deterministic, verify_determinism, DeterminismResult};
pub use fixtures::{run_until_idle, Workspace};
