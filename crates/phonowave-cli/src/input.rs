//! Config and trigger-script loading.

use std::fs;
use std::path::{Path, PathBuf};

use phonowave_spec::{ConfigError, EngineConfig, PhoneticType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading CLI inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// File could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is malformed or invalid.
    #[error("{}: [{}] {source}", .path.display(), .source.code())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    /// Script JSON could not be parsed.
    #[error("{}: invalid script: {source}", .path.display())]
    ScriptParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Script event is malformed.
    #[error("script event {index}: {message}")]
    ScriptEvent { index: usize, message: String },
}

/// One entry of a trigger script.
///
/// Exactly one of `trigger` or `reset` must be set:
///
/// ```json
/// [
///   { "at": 0.0, "trigger": "vowel" },
///   { "at": 0.4, "trigger": "fricative" },
///   { "at": 2.0, "reset": true }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEvent {
    /// Simulation time in seconds at which the event fires.
    pub at: f64,
    /// Phonetic type to trigger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<PhoneticType>,
    /// Clear the engine instead of triggering.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reset: bool,
}

/// Action of a validated script event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptAction {
    /// Generate a wave.
    Trigger(PhoneticType),
    /// Reset the engine.
    Reset,
}

impl ScriptEvent {
    /// Validated action of this event.
    pub fn action(&self) -> Option<ScriptAction> {
        match (self.trigger, self.reset) {
            (Some(kind), false) => Some(ScriptAction::Trigger(kind)),
            (None, true) => Some(ScriptAction::Reset),
            _ => None,
        }
    }
}

/// Loads an engine config, or returns the default when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig, InputError> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let json = read(path)?;
    EngineConfig::from_json_validated(&json).map_err(|source| InputError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a trigger script and returns its events sorted by time.
///
/// The sort is stable, so events sharing a timestamp keep file order.
pub fn parse_script(json: &str, path: &Path) -> Result<Vec<ScriptEvent>, InputError> {
    let mut events: Vec<ScriptEvent> =
        serde_json::from_str(json).map_err(|source| InputError::ScriptParse {
            path: path.to_path_buf(),
            source,
        })?;

    for (index, event) in events.iter().enumerate() {
        if !event.at.is_finite() || event.at < 0.0 {
            return Err(InputError::ScriptEvent {
                index,
                message: format!("'at' must be a non-negative number, got {}", event.at),
            });
        }
        if event.action().is_none() {
            return Err(InputError::ScriptEvent {
                index,
                message: "exactly one of 'trigger' or 'reset' must be set".to_string(),
            });
        }
    }

    events.sort_by(|a, b| a.at.total_cmp(&b.at));
    Ok(events)
}

/// Loads a trigger script from a file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, InputError> {
    let json = read(path)?;
    parse_script(&json, path)
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn script(json: &str) -> Result<Vec<ScriptEvent>, InputError> {
        parse_script(json, Path::new("test.json"))
    }

    #[test]
    fn test_default_config_without_path() {
        assert_eq!(load_config(None).unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{ "seed": 12, "model": "wedge" }"#).unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.seed, 12);
    }

    #[test]
    fn test_invalid_config_reports_code() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, r#"{ "frame_rate": 0 }"#).unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("CFG_002"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_script(Path::new("/nonexistent/script.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
    }

    #[test]
    fn test_script_sorted_stably() {
        let events = script(
            r#"[
                { "at": 1.0, "trigger": "trill" },
                { "at": 0.0, "trigger": "vowel" },
                { "at": 1.0, "reset": true }
            ]"#,
        )
        .unwrap();
        let actions: Vec<_> = events.iter().filter_map(ScriptEvent::action).collect();
        assert_eq!(
            actions,
            vec![
                ScriptAction::Trigger(PhoneticType::Vowel),
                ScriptAction::Trigger(PhoneticType::Trill),
                ScriptAction::Reset,
            ]
        );
    }

    #[test]
    fn test_script_rejects_ambiguous_event() {
        let err = script(r#"[{ "at": 0.0, "trigger": "vowel", "reset": true }]"#).unwrap_err();
        assert!(err.to_string().contains("exactly one"));
        let err = script(r#"[{ "at": 0.0 }]"#).unwrap_err();
        assert!(matches!(err, InputError::ScriptEvent { index: 0, .. }));
    }

    #[test]
    fn test_script_rejects_negative_time() {
        let err = script(r#"[{ "at": -1.0, "trigger": "vowel" }]"#).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_script_rejects_unknown_type() {
        let err = script(r#"[{ "at": 0.0, "trigger": "click" }]"#).unwrap_err();
        assert!(matches!(err, InputError::ScriptParse { .. }));
    }
}
