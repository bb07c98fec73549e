//! Profiles command implementation
//!
//! Prints the static phonetic profile table.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use phonowave_spec::{profile_for, PhoneticProfile, PhoneticType};

/// Run the profiles command
///
/// # Arguments
/// * `json` - Print the table as JSON instead of text
///
/// # Returns
/// Exit code: 0 on success
pub fn run(json: bool) -> Result<ExitCode> {
    let profiles: Vec<&PhoneticProfile> =
        PhoneticType::ALL.iter().map(|k| profile_for(*k)).collect();

    if json {
        let text =
            serde_json::to_string_pretty(&profiles).context("Failed to serialize profiles")?;
        println!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    for profile in profiles {
        println!("{}", format_profile(profile));
    }
    Ok(ExitCode::SUCCESS)
}

fn format_profile(profile: &PhoneticProfile) -> String {
    let peaks: Vec<String> = profile
        .peak_frequencies
        .iter()
        .map(|hz| format!("{:.0}", hz))
        .collect();
    let mut line = format!(
        "{:<10} {} frames, peaks [{}] Hz, bw {:.0} Hz, amp {:.2}, A/S/D {:.0}/{:.2}/{:.0}",
        profile.kind.to_string().bold(),
        profile.duration,
        peaks.join(", "),
        profile.bandwidth,
        profile.amplitude,
        profile.attack,
        profile.sustain_level,
        profile.decay,
    );
    if let Some(rate) = profile.modulation_rate {
        line.push_str(&format!(", mod {:.1} Hz", rate));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_mentions_modulation_for_trill() {
        colored::control::set_override(false);
        let line = format_profile(profile_for(PhoneticType::Trill));
        assert!(line.starts_with("trill"));
        assert!(line.contains("mod 8.0 Hz"));

        let line = format_profile(profile_for(PhoneticType::Vowel));
        assert!(line.contains("peaks [730, 1090, 2440]"));
        assert!(!line.contains("mod"));
    }

    #[test]
    fn run_json_succeeds() {
        assert_eq!(run(true).unwrap(), ExitCode::SUCCESS);
    }
}
