//! Attack/sustain/decay envelope and trill amplitude modulation.
//!
//! Unlike a note-driven ADSR, the phonetic envelope is a pure function of the
//! position on the wave timeline:
//!
//! ```text
//!  1 |  /
//!    | /  ________
//!  s |/           \
//!    |             \
//!  0 +--------------+--> frame
//!    0  a        D-d D
//! ```

use std::f64::consts::TAU;

use phonowave_spec::PhoneticProfile;

/// Lowest gain of the trill modulation.
pub const TRILL_FLOOR: f64 = 0.7;

/// Swing of the trill modulation above its floor.
pub const TRILL_DEPTH: f64 = 0.3;

/// Envelope gain at a (possibly fractional) frame position.
///
/// Ramps linearly from 0 to 1 across the attack window, holds the sustain level,
/// then ramps linearly from sustain to 0 across the trailing decay window.
/// Positions outside `[0, duration]` give 0.
pub fn envelope_at(profile: &PhoneticProfile, time_index: f64) -> f64 {
    let duration = profile.duration;
    if !time_index.is_finite() || time_index < 0.0 || time_index > duration {
        return 0.0;
    }

    if profile.attack > 0.0 && time_index < profile.attack {
        return time_index / profile.attack;
    }

    let decay_start = duration - profile.decay;
    if profile.decay > 0.0 && time_index > decay_start {
        let remaining = (duration - time_index) / profile.decay;
        return (profile.sustain_level * remaining).max(0.0);
    }

    profile.sustain_level
}

/// Periodic gain applied to trills: `0.7 + 0.3 * sin(2π * rate * seconds)`.
pub fn trill_modulation(rate_hz: f64, seconds: f64) -> f64 {
    TRILL_FLOOR + TRILL_DEPTH * (TAU * rate_hz * seconds).sin()
}
