//! `pendulum.toml` parsing and discovery.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use pendulum_fuzzy::{EngineConfig, SamplingConfig};

pub const FILE_NAME: &str = "pendulum.toml";

/// The project file: engine sampling plus CLI output preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Sample grid for defuzzification.
    #[serde(default)]
    pub sampling: SamplingConfig,
    /// How results are printed.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Decimal places for printed numbers.
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// `text` or `json`.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_precision() -> usize {
    4
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl ProjectConfig {
    /// Search upward from `start_dir` for a `pendulum.toml`, returning it and
    /// the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(FILE_NAME);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse and validate a project file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(s: &str) -> Result<Self> {
        let config: ProjectConfig = toml::from_str(s)?;
        config.engine_config().validate()?;
        if config.output.precision > 17 {
            bail!(
                "output precision must be at most 17, got {}",
                config.output.precision
            );
        }
        Ok(config)
    }

    /// Resolve the config: an explicit path wins, otherwise search upward
    /// from `cwd`, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        Ok(Self::find_and_load(cwd)?
            .map(|(config, dir)| {
                log::info!("using {}", dir.join(FILE_NAME).display());
                config
            })
            .unwrap_or_default())
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            sampling: self.sampling.clone(),
        }
    }

    /// The file written by `pendulum init`.
    pub fn template() -> String {
        r#"# Defuzzification sample grid over the force domain.
[sampling]
start = -100.0
end = 100.0
step = 0.05

[output]
precision = 4
format = "text"
"#
        .to_string()
    }
}
