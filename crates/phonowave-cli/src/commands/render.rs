//! Render command implementation
//!
//! Writes either a wave's spectrogram or a snapshot of the height field as a
//! grayscale PNG.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use phonowave_engine::rng::create_wave_rng;
use phonowave_engine::{Synthesizer, WaveEngine};
use phonowave_spec::{DisplayCoordinate, EngineConfig, PhoneticType, BIN_COUNT};

use crate::input::load_config;
use crate::png::{write_grayscale, GrayImage, MAX_DIMENSION};

/// Pixel value for a flat field.
const FLAT: u8 = 128;

/// Renders the spectrograms of the given types, stacked top to bottom.
///
/// Bins run left to right (low to high frequency) and frames run downward. Each
/// wave is scaled by its own loudest raw energy. The waves use the same random
/// streams as the first waves an engine with this config would generate.
pub fn spectrogram_image(config: &EngineConfig, kinds: &[PhoneticType]) -> GrayImage {
    let synthesizer = Synthesizer::new(config.frame_rate);
    let waves: Vec<_> = kinds
        .iter()
        .enumerate()
        .map(|(sequence, kind)| {
            let mut rng = create_wave_rng(config.seed, 0, sequence as u64);
            synthesizer.synthesize_wave(*kind, &mut rng)
        })
        .collect();

    let height: usize = waves.iter().map(Vec::len).sum();
    let mut image = GrayImage::filled(BIN_COUNT as u32, height as u32, 0);

    let mut row = 0u32;
    for frames in &waves {
        let loudest = frames.iter().map(|f| f.peak).fold(0.0, f64::max);
        for frame in frames {
            if loudest > 0.0 {
                for bin in 0..BIN_COUNT {
                    let level = frame.raw_energy(bin) / loudest;
                    image.set(bin as u32, row, to_gray(level));
                }
            }
            row += 1;
        }
    }
    image
}

/// Renders the height field of `engine` over the wedge.
///
/// The source sits at the bottom edge; the image is `size` pixels tall and as wide
/// as the field's aspect ratio requires. Points off the field are black; a flat
/// field is mid-gray.
pub fn field_image(engine: &WaveEngine, size: u32) -> GrayImage {
    let transform = engine.transform();
    let max_radius = transform.geometry().max_radius;
    let half_width = transform.half_width_at(max_radius);

    let height = size.max(1);
    let width = ((height as f64 * 2.0 * half_width / max_radius).ceil() as u32).max(1);
    let mut image = GrayImage::filled(width, height, 0);

    for py in 0..height {
        let z = (1.0 - (py as f64 + 0.5) / height as f64) * max_radius;
        for px in 0..width {
            let x = ((px as f64 + 0.5) / width as f64 * 2.0 - 1.0) * half_width;
            let vertex = DisplayCoordinate::new(x, 0.0, z);
            if !transform.contains(vertex) {
                continue;
            }
            let y = engine.sample_display(vertex).y;
            image.set(px, py, to_gray(0.5 + y * 0.5));
        }
    }
    image
}

/// Runs a fresh engine: triggers every kind at time 0 and advances to `at`.
pub fn field_snapshot(
    config: EngineConfig,
    kinds: &[PhoneticType],
    at: f64,
) -> Result<WaveEngine> {
    if !at.is_finite() || at < 0.0 {
        bail!("--at must be a non-negative number of seconds, got {}", at);
    }
    let mut engine = WaveEngine::new(config)?;
    for kind in kinds {
        engine.generate_wave(*kind);
    }
    engine.update_to(at);
    Ok(engine)
}

fn to_gray(level: f64) -> u8 {
    (level.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Options for the render command.
#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    pub kinds: &'a [PhoneticType],
    pub config_path: Option<&'a Path>,
    pub out: &'a Path,
    pub scale: u32,
    /// Render the height field at this many seconds instead of spectrograms.
    pub field_at: Option<f64>,
    pub size: u32,
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(options: RenderOptions<'_>) -> Result<ExitCode> {
    if options.kinds.is_empty() {
        bail!("at least one --type is required");
    }
    if options.field_at.is_some() && options.size > MAX_DIMENSION {
        bail!("--size must be at most {}, got {}", MAX_DIMENSION, options.size);
    }
    let config = load_config(options.config_path)?;

    let image = match options.field_at {
        Some(at) => {
            let engine = field_snapshot(config, options.kinds, at)?;
            tracing::debug!(active = engine.active_wave_count(), at, "rendering field");
            field_image(&engine, options.size)
        }
        None => spectrogram_image(&config, options.kinds),
    }
    .upscaled(options.scale)
    .context("Invalid --scale")?;

    write_grayscale(&image, options.out)
        .with_context(|| format!("Failed to write {}", options.out.display()))?;

    println!(
        "{} {} ({}x{})",
        "wrote".green(),
        options.out.display(),
        image.width,
        image.height
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonowave_spec::{hz_to_bin, profile_for, FieldModel};

    #[test]
    fn spectrogram_rows_follow_frame_counts() {
        let config = EngineConfig::default();
        let image = spectrogram_image(&config, &[PhoneticType::Plosive, PhoneticType::Vowel]);
        let rows = profile_for(PhoneticType::Plosive).frame_count()
            + profile_for(PhoneticType::Vowel).frame_count();
        assert_eq!(image.width as usize, BIN_COUNT);
        assert_eq!(image.height as usize, rows);
    }

    #[test]
    fn spectrogram_brightest_near_first_peak() {
        let image = spectrogram_image(&EngineConfig::default(), &[PhoneticType::Vowel]);
        // first frame is silent (attack starts at zero)
        assert!((0..image.width).all(|x| image.get(x, 0) == Some(0)));

        let row = 30;
        let peak_bin = hz_to_bin(730.0).round() as u32;
        let brightest = (0..image.width)
            .max_by_key(|x| image.get(*x, row).unwrap_or(0))
            .unwrap();
        assert!(brightest.abs_diff(peak_bin) <= 1);
    }

    #[test]
    fn flat_field_is_mid_gray_inside_wedge() {
        let engine = WaveEngine::default();
        let image = field_image(&engine, 40);
        let centre = image.width / 2;
        assert_eq!(image.get(centre, 20), Some(FLAT));
        // the wedge is narrow next to the source
        assert_eq!(image.get(0, image.height - 1), Some(0));
    }

    #[test]
    fn wedge_field_shows_ripples() {
        let config = EngineConfig::default().with_model(FieldModel::Wedge);
        let engine = field_snapshot(config, &[PhoneticType::Vowel], 1.0).unwrap();
        let image = field_image(&engine, 64);
        assert!(image.data.iter().any(|&v| v != FLAT && v != 0));
    }

    #[test]
    fn run_writes_png() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("vowel.png");
        let kinds = [PhoneticType::Vowel];
        run(RenderOptions {
            kinds: &kinds,
            config_path: None,
            out: &out,
            scale: 2,
            field_at: None,
            size: 64,
        })
        .unwrap();
        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(&bytes[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn run_rejects_oversized_output() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("huge.png");
        let kinds = [PhoneticType::Plosive];
        let options = RenderOptions {
            kinds: &kinds,
            config_path: None,
            out: &out,
            scale: 50_000_000,
            field_at: None,
            size: 64,
        };
        let err = run(options.clone()).unwrap_err();
        assert!(format!("{:#}", err).contains("exceeds"));

        let err = run(RenderOptions {
            scale: 1,
            field_at: Some(0.5),
            size: u32::MAX,
            ..options
        })
        .unwrap_err();
        assert!(err.to_string().contains("--size"));
        assert!(!out.exists());
    }

    #[test]
    fn rejects_negative_snapshot_time() {
        assert!(field_snapshot(EngineConfig::default(), &[PhoneticType::Trill], -1.0).is_err());
    }
}
