//! Error types for the engine.

use phonowave_spec::ConfigError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while constructing an engine.
///
/// Once constructed, the engine has no failure paths: out-of-range inputs are
/// clamped rather than rejected.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The supplied configuration failed validation.
    #[error("invalid engine config ({}): {0}", .0.code())]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Stable error code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Config(err) => err.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonowave_spec::EngineConfig;

    #[test]
    fn test_config_error_converts() {
        let config = EngineConfig {
            frame_rate: -1.0,
            ..EngineConfig::default()
        };
        let err: EngineError = config.validate().unwrap_err().into();
        assert_eq!(err.code(), "CFG_002");
        assert!(err.to_string().contains("frame_rate"));
        assert!(err.to_string().contains("CFG_002"));
    }
}
