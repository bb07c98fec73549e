//! Error types for configuration loading and validation.

use thiserror::Error;

use crate::validation::CommonValidationError;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config JSON could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Frame rate is not a positive finite number.
    #[error("invalid frame rate: {0}")]
    InvalidFrameRate(CommonValidationError),

    /// Field geometry is unusable.
    #[error("invalid field geometry: {0}")]
    InvalidGeometry(CommonValidationError),

    /// Wedge sampling parameters are unusable.
    #[error("invalid wedge parameters: {0}")]
    InvalidWedge(CommonValidationError),
}

impl ConfigError {
    /// Stable error code for diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Parse(_) => "CFG_001",
            ConfigError::InvalidFrameRate(_) => "CFG_002",
            ConfigError::InvalidGeometry(_) => "CFG_003",
            ConfigError::InvalidWedge(_) => "CFG_004",
        }
    }
}
