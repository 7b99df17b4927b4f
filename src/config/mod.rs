//! Configuration module for gapscan
//!
//! This module handles:
//! - Project-level configuration (gapscan.toml)
//! - Output and CI-gate defaults
//! - Trend-window tuning

mod project_config;

pub use project_config::{
    load_project_config, AnalysisConfig, GateConfig, OutputConfig, ProjectConfig,
};
