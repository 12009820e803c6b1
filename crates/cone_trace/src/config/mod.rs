//! Configuration system
//!
//! Trace tuning, debug drawing defaults and dataset locations live in one
//! serializable structure that can be loaded from TOML or RON.

pub use serde::{Serialize, Deserialize};

use crate::dataset::DatasetConfig;
use crate::debug::DebugTraceOptions;
use crate::foundation::math::Real;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values that parse but make no sense
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// # Cone Trace Configuration
///
/// Tuning shared by every trace issued through a `ConeTracer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeTraceConfig {
    /// Length of each sphere sweep. Zero-length sweeps report no impact
    /// point, so every sphere is swept this far toward the cone start.
    pub sweep_offset: Real,
    /// Interpolated spheres closer than this to the end of the cone are
    /// folded into the end sphere
    pub end_tolerance: Real,
    /// Debug drawing used when a call does not supply its own options
    pub debug: DebugTraceOptions,
    /// Dataset locations
    pub dataset: DatasetConfig,
}

impl ConeTraceConfig {
    /// Default sweep length
    pub const DEFAULT_SWEEP_OFFSET: Real = 0.01;

    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self {
            sweep_offset: Self::DEFAULT_SWEEP_OFFSET,
            end_tolerance: 1.0e-6,
            debug: DebugTraceOptions::default(),
            dataset: DatasetConfig::default(),
        }
    }

    /// Set the sweep length
    pub fn with_sweep_offset(mut self, offset: Real) -> Self {
        self.sweep_offset = offset;
        self
    }

    /// Set default debug drawing
    pub fn with_debug(mut self, debug: DebugTraceOptions) -> Self {
        self.debug = debug;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sweep_offset.is_finite() || self.sweep_offset <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "sweep_offset must be positive, got {}",
                self.sweep_offset
            )));
        }

        if !self.end_tolerance.is_finite() || self.end_tolerance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "end_tolerance must be finite and non-negative, got {}",
                self.end_tolerance
            )));
        }

        if self.debug.circle_segments < 3 || self.debug.half_circle_segments < 2 {
            return Err(ConfigError::Invalid(
                "debug circles need at least 3 segments (2 for half circles)".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ConeTraceConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ConeTraceConfig {}
