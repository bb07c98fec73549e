//! Phonowave CLI library.
//!
//! This crate provides the functionality behind the `phonowave` binary: config and
//! trigger-script loading, logging setup, PNG output, and the subcommands that drive
//! a [`WaveEngine`](phonowave_engine::WaveEngine) headlessly.

pub mod commands;
pub mod input;
pub mod logging;
pub mod png;
