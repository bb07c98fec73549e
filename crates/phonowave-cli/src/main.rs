//! Phonowave CLI - headless driver for the wave engine
//!
//! This binary inspects the phonetic profile table, dumps field geometry, runs
//! trigger scripts through the engine and renders spectrograms or field snapshots.

use clap::{Parser, Subcommand};
use phonowave_spec::PhoneticType;
use std::path::PathBuf;
use std::process::ExitCode;

use phonowave_cli::commands;
use phonowave_cli::commands::render::RenderOptions;
use phonowave_cli::logging;

/// Phonowave - Phonetic wave synthesis and field sampling
#[derive(Parser)]
#[command(name = "phonowave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the phonetic profile table
    Profiles {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the field's grid points as JSON
    Grid {
        /// Grid divisions across the wedge
        #[arg(long, default_value_t = 32)]
        freq_steps: usize,

        /// Grid divisions away from the source
        #[arg(long, default_value_t = 32)]
        time_steps: usize,

        /// Path to an engine config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run a trigger script through the engine with fixed ticks
    Simulate {
        /// Path to the trigger script JSON file
        #[arg(short, long)]
        script: PathBuf,

        /// Path to an engine config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Ticks per second of the simulated frame loop
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// Run length in seconds (default: until every wave has expired)
        #[arg(long)]
        duration: Option<f64>,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render spectrograms or a field snapshot to a grayscale PNG
    Render {
        /// Phonetic type(s) to render (vowel, trill, fricative, plosive)
        #[arg(short = 't', long = "type", required = true)]
        kinds: Vec<PhoneticType>,

        /// Path to an engine config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output PNG path
        #[arg(short, long)]
        out: PathBuf,

        /// Integer upscale factor
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=64))]
        scale: u32,

        /// Render the height field instead of spectrograms
        #[arg(long, requires = "at")]
        field: bool,

        /// Simulated seconds to advance before the field snapshot
        #[arg(long)]
        at: Option<f64>,

        /// Field snapshot height in pixels
        #[arg(long, default_value_t = 128, value_parser = clap::value_parser!(u32).range(1..=4096))]
        size: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Profiles { json } => commands::profiles::run(json),
        Commands::Grid {
            freq_steps,
            time_steps,
            config,
            output,
        } => commands::grid::run(config.as_deref(), freq_steps, time_steps, output.as_deref()),
        Commands::Simulate {
            script,
            config,
            fps,
            duration,
            json,
        } => commands::simulate::run(&script, config.as_deref(), fps, duration, json),
        Commands::Render {
            kinds,
            config,
            out,
            scale,
            field,
            at,
            size,
        } => commands::render::run(RenderOptions {
            kinds: &kinds,
            config_path: config.as_deref(),
            out: &out,
            scale,
            field_at: if field { at } else { None },
            size,
        }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_simulate() {
        let cli = Cli::try_parse_from([
            "phonowave",
            "simulate",
            "--script",
            "script.json",
            "--fps",
            "30",
        ])
        .unwrap();
        match cli.command {
            Commands::Simulate {
                script,
                config,
                fps,
                duration,
                json,
            } => {
                assert_eq!(script, PathBuf::from("script.json"));
                assert!(config.is_none());
                assert_eq!(fps, 30.0);
                assert!(duration.is_none());
                assert!(!json);
            }
            _ => panic!("expected simulate command"),
        }
    }

    #[test]
    fn test_cli_parses_render_types() {
        let cli = Cli::try_parse_from([
            "phonowave",
            "render",
            "--type",
            "vowel",
            "-t",
            "Trill",
            "--out",
            "out.png",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                kinds, field, at, ..
            } => {
                assert_eq!(kinds, vec![PhoneticType::Vowel, PhoneticType::Trill]);
                assert!(!field);
                assert!(at.is_none());
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_type() {
        let err = Cli::try_parse_from([
            "phonowave",
            "render",
            "--type",
            "click",
            "--out",
            "out.png",
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("click"));
    }

    #[test]
    fn test_cli_field_requires_at() {
        let err = Cli::try_parse_from([
            "phonowave",
            "render",
            "--type",
            "vowel",
            "--out",
            "out.png",
            "--field",
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("--at"));
    }

    #[test]
    fn test_cli_bounds_scale_and_size() {
        let base = ["phonowave", "render", "--type", "vowel", "--out", "out.png"];
        for extra in [["--scale", "0"], ["--scale", "65"], ["--size", "5000"]] {
            let args = base.iter().chain(extra.iter()).copied();
            assert!(Cli::try_parse_from(args).is_err(), "{:?} accepted", extra);
        }
        let args = base.iter().chain(["--scale", "64"].iter()).copied();
        assert!(Cli::try_parse_from(args).is_ok());
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let cli = Cli::try_parse_from(["phonowave", "profiles", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
