//! gapscan - NIST 800-171 / CMMC gap analysis
//!
//! A local-first compliance tool: it reduces an assessment-state
//! snapshot plus a control catalog into a severity-ranked remediation
//! plan, deterministically.

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod models;
pub mod reporters;
