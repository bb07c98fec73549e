//! Active wave instances.

use std::fmt;

use phonowave_spec::{PhoneticType, SpectrogramFrame};
use serde::{Deserialize, Serialize};

/// Unique identifier of a wave, e.g. `vowel-0.3`.
///
/// The format is `{type}-{epoch}.{sequence}`: the epoch increases on every engine
/// reset, so ids are never reused by one engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaveId(String);

impl WaveId {
    pub(crate) fn new(kind: PhoneticType, epoch: u32, sequence: u64) -> Self {
        Self(format!("{}-{}.{}", kind, epoch, sequence))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveState {
    /// Created, no frame surfaced yet.
    Pending,
    /// Surfacing one frame per tick.
    Active,
    /// Past its last frame. Terminal.
    Expired,
}

/// One triggered phonetic wave with its pre-generated spectrogram.
#[derive(Debug, Clone)]
pub struct Wave {
    id: WaveId,
    kind: PhoneticType,
    birth_time: f64,
    spectrograms: Vec<SpectrogramFrame>,
    current_time_index: usize,
    max_time_index: usize,
    state: WaveState,
}

impl Wave {
    /// Creates a pending wave. `spectrograms` must hold at least one frame.
    pub(crate) fn new(
        id: WaveId,
        kind: PhoneticType,
        birth_time: f64,
        spectrograms: Vec<SpectrogramFrame>,
    ) -> Self {
        let max_time_index = spectrograms.len().saturating_sub(1);
        Self {
            id,
            kind,
            birth_time,
            spectrograms,
            current_time_index: 0,
            max_time_index,
            state: WaveState::Pending,
        }
    }

    /// Wave id.
    pub fn id(&self) -> &WaveId {
        &self.id
    }

    /// Phonetic type that triggered the wave.
    pub fn kind(&self) -> PhoneticType {
        self.kind
    }

    /// Simulation clock value at creation.
    pub fn birth_time(&self) -> f64 {
        self.birth_time
    }

    /// All frames of the wave, indexed by time index.
    pub fn spectrograms(&self) -> &[SpectrogramFrame] {
        &self.spectrograms
    }

    /// Frame at a time index.
    pub fn frame(&self, time_index: usize) -> Option<&SpectrogramFrame> {
        self.spectrograms.get(time_index)
    }

    /// Frame at the current time index.
    pub fn current_frame(&self) -> Option<&SpectrogramFrame> {
        self.frame(self.current_time_index)
    }

    /// Index of the most recently surfaced frame.
    pub fn current_time_index(&self) -> usize {
        self.current_time_index
    }

    /// Index of the last frame.
    pub fn max_time_index(&self) -> usize {
        self.max_time_index
    }

    /// Lifecycle state.
    pub fn state(&self) -> WaveState {
        self.state
    }

    /// True until the wave expires.
    pub fn is_active(&self) -> bool {
        self.state != WaveState::Expired
    }

    /// Seconds since creation at a given clock value.
    pub fn age(&self, clock: f64) -> f64 {
        (clock - self.birth_time).max(0.0)
    }

    /// Fraction of the timeline already surfaced, in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.max_time_index == 0 {
            return 1.0;
        }
        self.current_time_index as f64 / self.max_time_index as f64
    }

    /// Moves the wave to the frame matching `clock`.
    ///
    /// Returns the newly current frame, or `None` once the timeline has been
    /// exhausted, in which case the wave is marked expired.
    pub(crate) fn advance(&mut self, clock: f64, frame_rate: f64) -> Option<&SpectrogramFrame> {
        if self.state == WaveState::Expired {
            return None;
        }

        let index = (self.age(clock) * frame_rate).floor();
        if index > self.max_time_index as f64 {
            self.state = WaveState::Expired;
            return None;
        }

        self.current_time_index = index as usize;
        self.state = WaveState::Active;
        self.current_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(frames: usize) -> Wave {
        let spectrograms = (0..frames).map(SpectrogramFrame::silent).collect();
        Wave::new(
            WaveId::new(PhoneticType::Plosive, 0, 0),
            PhoneticType::Plosive,
            1.0,
            spectrograms,
        )
    }

    #[test]
    fn test_id_format() {
        let id = WaveId::new(PhoneticType::Trill, 2, 15);
        assert_eq!(id.as_str(), "trill-2.15");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"trill-2.15\"");
    }

    #[test]
    fn test_new_wave_is_pending() {
        let w = wave(5);
        assert_eq!(w.state(), WaveState::Pending);
        assert!(w.is_active());
        assert_eq!(w.max_time_index(), 4);
        assert_eq!(w.current_time_index(), 0);
    }

    #[test]
    fn test_advance_tracks_clock() {
        let mut w = wave(5);
        let frame = w.advance(1.0 + 2.5 / 10.0, 10.0).map(|f| f.time_index);
        assert_eq!(frame, Some(2));
        assert_eq!(w.state(), WaveState::Active);
        assert!((w.progress() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_advance_expires_past_last_frame() {
        let mut w = wave(5);
        assert!(w.advance(1.45, 10.0).is_some());
        assert!(w.advance(1.5, 10.0).is_none());
        assert_eq!(w.state(), WaveState::Expired);
        assert!(!w.is_active());
        // Never reactivated
        assert!(w.advance(1.0, 10.0).is_none());
        assert_eq!(w.state(), WaveState::Expired);
        assert!(w.current_time_index() <= w.max_time_index());
    }

    #[test]
    fn test_age_before_birth() {
        let w = wave(1);
        assert_eq!(w.age(0.0), 0.0);
        assert_eq!(w.progress(), 1.0);
    }
}
