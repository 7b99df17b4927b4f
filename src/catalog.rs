//! Catalog and assessment-state loading
//!
//! The catalog, assessment state, and edit history arrive as JSON files
//! authored by the surrounding assessment tooling. Deserialization
//! enforces the structural contract (a control without an objectives
//! array is a parse error, not a half-built report); `validate` covers
//! the one invariant serde cannot express: globally unique objective
//! ids.

use crate::models::{AssessmentState, Catalog, EditHistory};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate objective id '{id}' (objective ids must be globally unique)")]
    DuplicateObjective { id: String },
}

impl Catalog {
    /// Check catalog invariants, failing fast on the first violation.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for family in &self.families {
            for control in &family.controls {
                for objective in &control.objectives {
                    if !seen.insert(objective.id.as_str()) {
                        return Err(CatalogError::DuplicateObjective {
                            id: objective.id.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Total objective count across all families and controls.
    pub fn objective_count(&self) -> usize {
        self.families
            .iter()
            .flat_map(|f| &f.controls)
            .map(|c| c.objectives.len())
            .sum()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load and validate a control catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = read_json(path)?;
    catalog.validate()?;
    debug!(
        families = catalog.families.len(),
        objectives = catalog.objective_count(),
        "loaded catalog"
    );
    Ok(catalog)
}

/// Load an assessment-state snapshot.
pub fn load_state(path: &Path) -> Result<AssessmentState, CatalogError> {
    read_json(path)
}

/// Load an edit-history file.
pub fn load_history(path: &Path) -> Result<EditHistory, CatalogError> {
    read_json(path)
}
