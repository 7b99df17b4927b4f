//! Project configuration loaded from gapscan.toml
//!
//! The file is optional; every field has a default so a missing file is
//! the default configuration. CLI flags always win over file values.

use crate::engine::DEFAULT_WINDOW_DAYS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Config file name searched in the working directory.
pub const CONFIG_FILE: &str = "gapscan.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub gate: GateConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default render format: text, json, or markdown.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    /// Exit nonzero when any gap at or above this severity exists.
    #[serde(default)]
    pub fail_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Trailing window for trend analysis, in days.
    #[serde(default = "default_window")]
    pub trend_window_days: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            trend_window_days: default_window(),
        }
    }
}

fn default_window() -> i64 {
    DEFAULT_WINDOW_DAYS
}

/// Load `gapscan.toml` from `dir`, falling back to defaults when absent.
pub fn load_project_config(dir: &Path) -> Result<ProjectConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        debug!("no {CONFIG_FILE} found, using defaults");
        return Ok(ProjectConfig::default());
    }
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: ProjectConfig =
        toml::from_str(&raw).with_context(|| format!("invalid config in {}", path.display()))?;
    debug!(path = %path.display(), "loaded project config");
    Ok(config)
}
