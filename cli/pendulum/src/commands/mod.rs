//! CLI command implementations.

pub mod decide;
pub mod init;
pub mod labels;
pub mod rules;
pub mod sweep;
pub mod trace;

use crate::project::{OutputConfig, OutputFormat};

/// Resolved output settings for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub precision: usize,
    pub format: OutputFormat,
}

impl Output {
    /// Config values, with `--json` forcing JSON.
    pub fn new(config: &OutputConfig, json: bool) -> Self {
        Self {
            precision: config.precision,
            format: if json { OutputFormat::Json } else { config.format },
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn num(&self, x: f64) -> String {
        format!("{x:.*}", self.precision)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(&OutputConfig::default(), false)
    }
}
