//! Phonetic types and the static synthesis profile table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of phonetic categories that can trigger a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneticType {
    /// Sustained voiced sound with stable formants.
    Vowel,
    /// Rapidly modulated voiced sound (rolled r).
    Trill,
    /// Broadband turbulent noise (s, sh, f).
    Fricative,
    /// Short burst after a closure release (p, t, k).
    Plosive,
}

impl PhoneticType {
    /// All phonetic types, in table order.
    pub const ALL: [PhoneticType; 4] = [
        PhoneticType::Vowel,
        PhoneticType::Trill,
        PhoneticType::Fricative,
        PhoneticType::Plosive,
    ];

    /// Lowercase name used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneticType::Vowel => "vowel",
            PhoneticType::Trill => "trill",
            PhoneticType::Fricative => "fricative",
            PhoneticType::Plosive => "plosive",
        }
    }

    /// Static synthesis profile for this type.
    pub fn profile(&self) -> &'static PhoneticProfile {
        profile_for(*self)
    }
}

impl fmt::Display for PhoneticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a name outside the closed phonetic set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown phonetic type '{0}' (expected vowel, trill, fricative, or plosive)")]
pub struct UnknownPhoneticType(pub String);

impl FromStr for PhoneticType {
    type Err = UnknownPhoneticType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vowel" => Ok(PhoneticType::Vowel),
            "trill" => Ok(PhoneticType::Trill),
            "fricative" => Ok(PhoneticType::Fricative),
            "plosive" => Ok(PhoneticType::Plosive),
            _ => Err(UnknownPhoneticType(s.to_string())),
        }
    }
}

/// Synthesis parameters for one phonetic type.
///
/// Times are measured in frames of the wave timeline. Profiles are immutable and
/// shared by reference through [`profile_for`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneticProfile {
    /// Phonetic type this profile describes.
    #[serde(rename = "type")]
    pub kind: PhoneticType,
    /// Total wave length in frames.
    pub duration: f64,
    /// Peak/centre frequencies in Hz. Never empty.
    pub peak_frequencies: &'static [f64],
    /// Bandwidth of each peak in Hz.
    pub bandwidth: f64,
    /// Base amplitude of each peak.
    pub amplitude: f64,
    /// Attack window in frames (linear ramp 0 -> 1).
    pub attack: f64,
    /// Level held between attack and decay (0.0 to 1.0).
    pub sustain_level: f64,
    /// Trailing decay window in frames (linear ramp sustain -> 0).
    pub decay: f64,
    /// Amplitude modulation rate in Hz (trill only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modulation_rate: Option<f64>,
}

impl PhoneticProfile {
    /// Last frame index of the wave, `floor(duration)`.
    pub fn max_time_index(&self) -> usize {
        self.duration.max(0.0).floor() as usize
    }

    /// Number of frames a wave of this type pre-generates.
    pub fn frame_count(&self) -> usize {
        self.max_time_index() + 1
    }

    /// The dominant (first) peak frequency in Hz.
    pub fn primary_frequency(&self) -> f64 {
        self.peak_frequencies.first().copied().unwrap_or(crate::F_MIN_HZ)
    }
}

// Open /a/ formants.
static VOWEL: PhoneticProfile = PhoneticProfile {
    kind: PhoneticType::Vowel,
    duration: 60.0,
    peak_frequencies: &[730.0, 1090.0, 2440.0],
    bandwidth: 150.0,
    amplitude: 1.0,
    attack: 10.0,
    sustain_level: 0.8,
    decay: 20.0,
    modulation_rate: None,
};

static TRILL: PhoneticProfile = PhoneticProfile {
    kind: PhoneticType::Trill,
    duration: 45.0,
    peak_frequencies: &[500.0, 1500.0, 2500.0],
    bandwidth: 200.0,
    amplitude: 0.9,
    attack: 5.0,
    sustain_level: 0.7,
    decay: 15.0,
    modulation_rate: Some(8.0),
};

static FRICATIVE: PhoneticProfile = PhoneticProfile {
    kind: PhoneticType::Fricative,
    duration: 40.0,
    peak_frequencies: &[4500.0, 6200.0],
    bandwidth: 1200.0,
    amplitude: 0.7,
    attack: 3.0,
    sustain_level: 0.6,
    decay: 12.0,
    modulation_rate: None,
};

static PLOSIVE: PhoneticProfile = PhoneticProfile {
    kind: PhoneticType::Plosive,
    duration: 12.0,
    peak_frequencies: &[300.0, 1800.0, 3500.0],
    bandwidth: 800.0,
    amplitude: 1.0,
    attack: 1.0,
    sustain_level: 0.4,
    decay: 8.0,
    modulation_rate: None,
};

/// Looks up the static profile for a phonetic type.
pub fn profile_for(kind: PhoneticType) -> &'static PhoneticProfile {
    match kind {
        PhoneticType::Vowel => &VOWEL,
        PhoneticType::Trill => &TRILL,
        PhoneticType::Fricative => &FRICATIVE,
        PhoneticType::Plosive => &PLOSIVE,
    }
}
