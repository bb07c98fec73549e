//! Simulate command implementation
//!
//! Drives the engine through a trigger script with fixed ticks and reports what
//! surfaced, the way a frame loop would see it.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use phonowave_engine::{frames_hash, SurfacedFrame, WaveEngine, WaveId};
use phonowave_spec::{EngineConfig, PhoneticType, SpectrogramFrame};
use serde::Serialize;

use crate::input::{load_config, load_script, ScriptAction, ScriptEvent};

/// Longest run accepted, in ticks.
pub const MAX_TICKS: usize = 1_000_000;

/// Per-tick summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickSummary {
    /// Script time at the end of the tick.
    pub time: f64,
    /// Engine clock at the end of the tick (rewinds on reset).
    pub clock: f64,
    /// Waves generated at the start of the tick.
    pub generated: Vec<WaveId>,
    /// Whether the engine was reset at the start of the tick.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub reset: bool,
    /// Active waves after the tick.
    pub active: usize,
    /// Frames surfaced by the tick.
    pub surfaced: usize,
    /// Waves that expired during the tick.
    pub expired: Vec<WaveId>,
}

/// Result of a scripted simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub fps: f64,
    pub duration: f64,
    pub ticks: usize,
    pub waves_generated: usize,
    pub resets: usize,
    pub frames_surfaced: usize,
    pub waves_expired: usize,
    pub max_active: usize,
    /// BLAKE3 digest of every surfaced frame in order.
    pub frames_hash: String,
    pub timeline: Vec<TickSummary>,
}

/// Default run length: the last event plus the longest wave lifetime plus one tick.
pub fn default_duration(engine: &WaveEngine, events: &[ScriptEvent], fps: f64) -> f64 {
    let last_event = events.iter().map(|e| e.at).fold(0.0, f64::max);
    let longest = PhoneticType::ALL
        .iter()
        .map(|kind| engine.wave_lifetime(*kind))
        .fold(0.0, f64::max);
    last_event + longest + 1.0 / fps
}

/// Runs a script against a fresh engine.
///
/// An event fires at the start of the first tick whose script time has reached its
/// `at`. Script time keeps running across resets; the engine clock does not.
pub fn simulate(
    config: EngineConfig,
    events: &[ScriptEvent],
    fps: f64,
    duration: Option<f64>,
) -> Result<SimulationReport> {
    if !fps.is_finite() || fps <= 0.0 {
        bail!("--fps must be a positive number, got {}", fps);
    }
    let mut engine = WaveEngine::new(config)?;
    let duration = match duration {
        Some(d) if d.is_finite() && d >= 0.0 => d,
        Some(d) => bail!("--duration must be a non-negative number, got {}", d),
        None => default_duration(&engine, events, fps),
    };

    let dt = 1.0 / fps;
    let ticks = (duration * fps).ceil();
    if ticks > MAX_TICKS as f64 {
        bail!(
            "run of {}s at {} fps needs {} ticks, more than the limit of {}",
            duration,
            fps,
            ticks,
            MAX_TICKS
        );
    }
    let ticks = ticks as usize;
    let mut pending = events.iter().peekable();
    let mut surfaced: Vec<SpectrogramFrame> = Vec::new();
    let mut timeline = Vec::with_capacity(ticks);
    let mut resets = 0;
    let mut waves_generated = 0;

    for tick in 0..ticks {
        let start = tick as f64 * dt;
        let mut summary_generated = Vec::new();
        let mut summary_reset = false;

        while let Some(event) = pending.next_if(|e| e.at <= start) {
            match event.action() {
                Some(ScriptAction::Trigger(kind)) => {
                    summary_generated.push(engine.generate_wave(kind));
                    waves_generated += 1;
                }
                Some(ScriptAction::Reset) => {
                    engine.reset();
                    summary_reset = true;
                    resets += 1;
                }
                None => {}
            }
        }

        let report = engine.update_time(dt);
        let frame_count = report.frames.len();
        surfaced.extend(report.frames.into_iter().map(|s: SurfacedFrame| s.frame));

        timeline.push(TickSummary {
            time: (tick + 1) as f64 * dt,
            clock: report.clock,
            generated: summary_generated,
            reset: summary_reset,
            active: engine.active_wave_count(),
            surfaced: frame_count,
            expired: report.expired,
        });
    }

    if pending.peek().is_some() {
        tracing::warn!(
            skipped = pending.count(),
            "script events after the end of the run were not fired"
        );
    }

    Ok(SimulationReport {
        fps,
        duration,
        ticks,
        waves_generated,
        resets,
        frames_surfaced: surfaced.len(),
        waves_expired: timeline.iter().map(|t| t.expired.len()).sum(),
        max_active: timeline.iter().map(|t| t.active).max().unwrap_or(0),
        frames_hash: frames_hash(&surfaced),
        timeline,
    })
}

/// Run the simulate command
///
/// # Arguments
/// * `script_path` - Trigger script
/// * `config_path` - Optional engine config
/// * `fps` - Tick rate of the simulated frame loop
/// * `duration` - Run length in seconds (default: until every wave has expired)
/// * `json` - Print the full report as JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    script_path: &Path,
    config_path: Option<&Path>,
    fps: f64,
    duration: Option<f64>,
    json: bool,
) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let events = load_script(script_path)?;
    let report = simulate(config, &events, fps, duration)?;

    if json {
        let text =
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    for tick in report.timeline.iter().filter(|t| !t.generated.is_empty() || t.reset) {
        if tick.reset {
            println!("{:>8.3}s  {}", tick.time - 1.0 / fps, "reset".yellow());
        }
        for id in &tick.generated {
            println!("{:>8.3}s  {} {}", tick.time - 1.0 / fps, "wave".green(), id);
        }
    }
    println!(
        "{} ticks, {} waves, {} resets, {} frames surfaced, {} expired, peak {} active",
        report.ticks,
        report.waves_generated,
        report.resets,
        report.frames_surfaced,
        report.waves_expired,
        report.max_active,
    );
    println!("frames hash: {}", report.frames_hash.dimmed());
    Ok(ExitCode::SUCCESS)
}
