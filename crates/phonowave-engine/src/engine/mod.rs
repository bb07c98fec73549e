//! The wave/field engine.
//!
//! [`WaveEngine`] owns the simulation clock, the wave id counter and the set of
//! active waves. It has no timers of its own: the presentation layer drives it by
//! calling [`WaveEngine::update_time`] once per rendered frame.
//!
//! All operations are synchronous. The engine is a plain owned value; sharing one
//! across threads means wrapping it in a single `Mutex`, since `update_time` both
//! reads and compacts the wave set.


use phonowave_spec::{
    profile_for, DisplayCoordinate, EngineConfig, FieldModel, LogicalCoordinate, PhoneticType,
    SpectrogramFrame,
};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::error::EngineResult;
use crate::field::{FieldStrategy, Strategy};
use crate::rng::create_wave_rng;
use crate::synthesis::Synthesizer;
use crate::transform::CoordinateTransform;
use crate::wave::{Wave, WaveId};

/// A frame surfaced by one wave during a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfacedFrame {
    /// Wave that produced the frame.
    pub wave_id: WaveId,
    /// Phonetic type of that wave.
    #[serde(rename = "type")]
    pub kind: PhoneticType,
    /// The wave's current frame.
    pub frame: SpectrogramFrame,
}

/// Result of one [`WaveEngine::update_time`] call.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TickReport {
    /// Simulation clock after the tick, in seconds.
    pub clock: f64,
    /// One frame per wave still active after the tick.
    pub frames: Vec<SurfacedFrame>,
    /// Waves retired (and purged) by the tick.
    pub expired: Vec<WaveId>,
}

/// Owns and ages the active phonetic waves.
#[derive(Debug, Clone)]
pub struct WaveEngine {
    config: EngineConfig,
    transform: CoordinateTransform,
    synthesizer: Synthesizer,
    strategy: Strategy,
    clock: f64,
    epoch: u32,
    next_sequence: u64,
    waves: Vec<Wave>,
}

impl WaveEngine {
    /// Creates an engine from a config, validating it first.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: EngineConfig) -> Self {
        Self {
            config,
            transform: CoordinateTransform::new(config.geometry),
            synthesizer: Synthesizer::new(config.frame_rate),
            strategy: Strategy::from_config(&config),
            clock: 0.0,
            epoch: 0,
            next_sequence: 0,
            waves: Vec::new(),
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The coordinate transform for this engine's field geometry.
    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// The field sampling model in use.
    pub fn model(&self) -> FieldModel {
        self.strategy.model()
    }

    /// Current simulation clock in seconds.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Creates a wave for a phonetic trigger and pre-generates its spectrogram.
    ///
    /// The wave is born at the current clock and counts as active immediately.
    pub fn generate_wave(&mut self, kind: PhoneticType) -> WaveId {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let id = WaveId::new(kind, self.epoch, sequence);
        let mut rng = create_wave_rng(self.config.seed, self.epoch, sequence);
        let spectrograms = self.synthesizer.synthesize_wave(kind, &mut rng);

        debug!(
            wave = %id,
            frames = spectrograms.len(),
            birth = self.clock,
            "generated wave"
        );

        self.waves
            .push(Wave::new(id.clone(), kind, self.clock, spectrograms));
        id
    }

    /// Advances the clock by `delta_time` seconds and ages every wave.
    ///
    /// Negative or non-finite deltas leave the clock where it is. Each wave moves
    /// to frame `floor((clock - birth) * frame_rate)`; waves past their last frame
    /// expire and are purged before this returns.
    pub fn update_time(&mut self, delta_time: f64) -> TickReport {
        if delta_time.is_finite() && delta_time > 0.0 {
            self.clock += delta_time;
        }

        let clock = self.clock;
        let frame_rate = self.config.frame_rate;
        let mut report = TickReport {
            clock,
            ..TickReport::default()
        };

        for wave in &mut self.waves {
            let kind = wave.kind();
            match wave.advance(clock, frame_rate).cloned() {
                Some(frame) => report.frames.push(SurfacedFrame {
                    wave_id: wave.id().clone(),
                    kind,
                    frame,
                }),
                None => {
                    debug!(wave = %wave.id(), clock, "wave expired");
                    report.expired.push(wave.id().clone());
                }
            }
        }

        self.waves.retain(Wave::is_active);

        trace!(
            clock,
            active = self.waves.len(),
            surfaced = report.frames.len(),
            expired = report.expired.len(),
            "tick"
        );
        report
    }

    /// Advances the clock to an absolute time. Earlier times are ignored.
    pub fn update_to(&mut self, clock: f64) -> TickReport {
        self.update_time(clock - self.clock)
    }

    /// Number of waves that have not expired.
    pub fn active_wave_count(&self) -> usize {
        self.waves.iter().filter(|w| w.is_active()).count()
    }

    /// Iterates over the live waves in creation order.
    pub fn active_waves(&self) -> impl Iterator<Item = &Wave> {
        self.waves.iter().filter(|w| w.is_active())
    }

    /// Looks up a live wave by id.
    pub fn wave(&self, id: &WaveId) -> Option<&Wave> {
        self.waves.iter().find(|w| w.id() == id)
    }

    /// Clears every wave and rewinds the clock and id counter.
    ///
    /// Ids issued afterwards carry a new epoch and never repeat earlier ones.
    pub fn reset(&mut self) {
        info!(
            cleared = self.waves.len(),
            epoch = self.epoch + 1,
            "engine reset"
        );
        self.waves.clear();
        self.clock = 0.0;
        self.next_sequence = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Field height at a logical coordinate. Inputs are clamped to [0, 1].
    pub fn height_at(&self, frequency: f64, time: f64) -> f64 {
        self.sample(LogicalCoordinate::new(frequency, time))
    }

    /// Field height at a logical coordinate.
    pub fn sample(&self, coord: LogicalCoordinate) -> f64 {
        self.strategy.height_at(&self.waves, self.clock, coord)
    }

    /// Lifts a display-space vertex to the current field height.
    pub fn sample_display(&self, vertex: DisplayCoordinate) -> DisplayCoordinate {
        let logical = self.transform.display_to_logical(vertex);
        vertex.with_height(self.sample(logical))
    }

    /// Samples the field on a regular logical grid, row by row outward.
    ///
    /// Returns `(time_steps + 1)` rows of `(freq_steps + 1)` heights.
    pub fn height_field(&self, freq_steps: usize, time_steps: usize) -> Vec<Vec<f64>> {
        let freq_steps = freq_steps.max(1);
        let time_steps = time_steps.max(1);
        (0..=time_steps)
            .map(|j| {
                let time = j as f64 / time_steps as f64;
                (0..=freq_steps)
                    .map(|i| self.height_at(i as f64 / freq_steps as f64, time))
                    .collect()
            })
            .collect()
    }

    /// Duration of a phonetic type's wave in simulated seconds.
    pub fn wave_lifetime(&self, kind: PhoneticType) -> f64 {
        profile_for(kind).frame_count() as f64 / self.config.frame_rate
    }
}

impl Default for WaveEngine {
    fn default() -> Self {
        Self::from_valid(EngineConfig::default())
    }
}
