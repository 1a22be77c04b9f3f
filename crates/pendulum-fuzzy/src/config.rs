//! Engine configuration.
//!
//! Only the defuzzification grid is configurable. Label shapes and the rule
//! table are fixed.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defuzzify::SampleGrid;
use crate::error::{EngineError, Result};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// The force-domain sample grid used for the centroid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// First sample. Default: -100.0.
    #[serde(default = "default_start")]
    pub start: f64,
    /// Exclusive upper bound. Default: 100.0.
    #[serde(default = "default_end")]
    pub end: f64,
    /// Distance between samples. Default: 0.05.
    #[serde(default = "default_step")]
    pub step: f64,
}

fn default_start() -> f64 {
    -100.0
}

fn default_end() -> f64 {
    100.0
}

fn default_step() -> f64 {
    0.05
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            step: default_step(),
        }
    }
}

impl SamplingConfig {
    pub fn grid(&self) -> Result<SampleGrid> {
        SampleGrid::new(self.start, self.end, self.step)
    }
}

impl EngineConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<()> {
        self.sampling.grid().map(|_| ())
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EngineError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_standard_grid() {
        let config = EngineConfig::default();
        assert_eq!(config.sampling.grid().unwrap(), SampleGrid::standard());
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = EngineConfig::from_toml_str("[sampling]\nstep = 0.1\n").unwrap();
        assert_eq!(config.sampling.step, 0.1);
        assert_eq!(config.sampling.start, -100.0);
        assert_eq!(config.sampling.grid().unwrap().len(), 2000);
    }

    #[test]
    fn invalid_grid_is_rejected() {
        let err = EngineConfig::from_toml_str("[sampling]\nstep = -0.5\n").unwrap_err();
        assert!(matches!(err, EngineError::InvalidGrid { .. }));

        let err = EngineConfig::from_toml_str("[sampling]\nstart = 5.0\nend = 1.0\n").unwrap_err();
        assert!(matches!(err, EngineError::InvalidGrid { .. }));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = EngineConfig::from_toml_str("[sampling\nstep = ").unwrap_err();
        assert!(matches!(err, EngineError::Toml(_)));
    }

    #[test]
    fn serialized_default_parses_back() {
        let text = EngineConfig::default().to_toml_string().unwrap();
        assert!(text.contains("[sampling]"));
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), EngineConfig::default());
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, EngineError::NotFound { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "[sampling]\nstart = -50.0\nend = 50.0\nstep = 0.5\n").unwrap();
        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.sampling.grid().unwrap().len(), 200);
    }
}
