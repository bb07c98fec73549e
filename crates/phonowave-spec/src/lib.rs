//! Phonowave Domain Types
//!
//! This crate provides the shared data model for Phonowave: the closed set of
//! phonetic types and their static synthesis profiles, logical and display
//! coordinates, spectrogram frames, and the engine configuration.
//!
//! # Overview
//!
//! Phonowave renders synthetic phonetic sounds as wave surfaces radiating from a
//! simulated mouth point into a wedge-shaped polar field. Everything in this crate
//! is plain data:
//!
//! - **Phonetic profiles**: immutable, one per [`PhoneticType`], looked up with
//!   [`profile_for`]
//! - **Coordinates**: [`LogicalCoordinate`] (normalized frequency/time) and
//!   [`DisplayCoordinate`] (lateral, height, radial)
//! - **Frames**: [`SpectrogramFrame`], 100 normalized bins between 100 Hz and 8 kHz
//! - **Configuration**: [`EngineConfig`], loadable from JSON and validated up front
//!
//! # Example
//!
//! ```
//! use phonowave_spec::{profile_for, EngineConfig, PhoneticType};
//!
//! let profile = profile_for(PhoneticType::Trill);
//! assert!(profile.modulation_rate.is_some());
//!
//! let config = EngineConfig::from_json(r#"{ "frame_rate": 60.0, "seed": 7 }"#).unwrap();
//! assert!(config.validate().is_ok());
//! ```
//!
//! # Modules
//!
//! - [`band`]: audible band constants and Hz/bin/normalized conversions
//! - [`config`]: engine configuration and its validation
//! - [`coordinate`]: logical and display coordinates
//! - [`error`]: configuration error type
//! - [`frame`]: spectrogram frame type
//! - [`phonetic`]: phonetic types and the static profile table
//! - [`validation`]: reusable numeric validation helpers

pub mod band;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod frame;
pub mod phonetic;
pub mod validation;

// Re-export commonly used types at the crate root
pub use band::{
    bin_to_hz, frequency_to_hz, hz_to_bin, hz_to_frequency, BIN_COUNT, BIN_SPACING_HZ, F_MAX_HZ,
    F_MIN_HZ,
};
pub use config::{EngineConfig, FieldGeometry, FieldModel, WedgeParams, JAVELIN_HALF_ANGLE};
pub use coordinate::{DisplayCoordinate, LogicalCoordinate, Side};
pub use error::{ConfigError, ConfigResult};
pub use frame::SpectrogramFrame;
pub use phonetic::{profile_for, PhoneticProfile, PhoneticType, UnknownPhoneticType};
