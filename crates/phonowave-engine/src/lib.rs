//! Phonowave Engine
//!
//! This crate implements the wave synthesis and field-sampling core of Phonowave:
//! synthetic spectrograms for phonetic sounds, mapped into a bilaterally mirrored
//! polar wedge and sampled as a height field, frame by frame.
//!
//! # Overview
//!
//! - **Coordinate transform** - logical (frequency, time) to display (x, y, z) and back,
//!   with the full spectrum mirrored onto both halves of the wedge
//! - **Synthesizer** - envelope-shaped Gaussian peaks per phonetic profile, trill
//!   modulation, fricative noise, per-frame normalization
//! - **Engine** - owns the active waves and the simulation clock; each
//!   [`WaveEngine::update_time`] call ages waves, surfaces their current frames and
//!   purges expired ones
//! - **Field strategies** - spectrogram splatting or the analytic wedge ripple, selected
//!   at construction and sampled through [`FieldStrategy`]
//!
//! # Determinism
//!
//! All randomness flows through PCG32 streams seeded per wave from the engine seed
//! via BLAKE3. Two engines built from the same config and fed the same triggers and
//! ticks produce identical frames.
//!
//! # Example
//!
//! ```
//! use phonowave_engine::WaveEngine;
//! use phonowave_spec::{EngineConfig, PhoneticType};
//!
//! let mut engine = WaveEngine::new(EngineConfig::default()).unwrap();
//! engine.generate_wave(PhoneticType::Plosive);
//! assert_eq!(engine.active_wave_count(), 1);
//!
//! let report = engine.update_time(1.0 / 30.0);
//! assert_eq!(report.frames.len(), 1);
//!
//! // Plosives last 12 frames; one simulated second retires it.
//! engine.update_time(1.0);
//! assert_eq!(engine.active_wave_count(), 0);
//! ```
//!
//! # Crate Structure
//!
//! - [`engine`] - the wave/field engine
//! - [`envelope`] - attack/sustain/decay envelope and trill modulation
//! - [`field`] - field sampling strategies
//! - [`hash`] - frame fingerprints for determinism checks
//! - [`rng`] - deterministic RNG with seed derivation
//! - [`synthesis`] - spectrogram frame synthesizer
//! - [`transform`] - coordinate transform and grid generator
//! - [`wave`] - active wave instances

pub mod engine;
pub mod envelope;
pub mod error;
pub mod field;
pub mod hash;
pub mod rng;
pub mod synthesis;
pub mod transform;
pub mod wave;

// Re-export main types at crate root
pub use engine::{SurfacedFrame, TickReport, WaveEngine};
pub use error::{EngineError, EngineResult};
pub use field::{FieldStrategy, SpectrogramStrategy, Strategy, WedgeStrategy};
pub use hash::frames_hash;
pub use synthesis::Synthesizer;
pub use transform::{CoordinateTransform, GridPoints, GRID_TIME_THRESHOLD};
pub use wave::{Wave, WaveId, WaveState};
