//! Capability manifests.
//!
//! A manifest is a JSON document declaring which interface versions each
//! named subject provides and which requirements to check against them.
//! Loading enforces the `manifest_version` marker so consumers cannot
//! silently read a document written for a different layout. Verification
//! replays the declared claims through a fresh [`ClaimTable`] and reports
//! every failed requirement, not just the first.

use crate::registry::{ClaimTable, SubjectId};
use crate::version::Version;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Version marker for capability manifest documents.
pub const MANIFEST_VERSION: &str = "capver_manifest_v1";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest input is empty")]
    Empty,
    #[error("reading manifest {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("parsing manifest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported manifest_version '{found}', expected {MANIFEST_VERSION}")]
    UnsupportedVersion { found: String },
}

/// A capability manifest document.
#[derive(Clone, Debug, Deserialize)]
pub struct Manifest {
    pub manifest_version: String,
    #[serde(default)]
    pub subjects: Vec<SubjectDecl>,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// One named subject and the interface versions it provides.
#[derive(Clone, Debug, Deserialize)]
pub struct SubjectDecl {
    pub name: String,
    #[serde(default)]
    pub provides: Vec<Provision>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Provision {
    pub interface: String,
    pub version: Version,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Requirement {
    pub subject: String,
    pub interface: String,
    pub minimum: Version,
}

impl Manifest {
    /// Parse a manifest from JSON text and verify its version marker.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        if text.trim().is_empty() {
            return Err(ManifestError::Empty);
        }
        let manifest: Manifest = serde_json::from_str(text)?;
        if manifest.manifest_version != MANIFEST_VERSION {
            return Err(ManifestError::UnsupportedVersion {
                found: manifest.manifest_version,
            });
        }
        Ok(manifest)
    }

    /// Read and parse a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// Check every requirement in `manifest` against its declared subjects.
///
/// Returns one message per failed requirement; an empty vec means the
/// manifest verifies. A requirement naming a subject with no declarations is
/// a failure, not a panic.
pub fn verify(manifest: &Manifest) -> Vec<String> {
    let mut table = ClaimTable::default();
    let mut ids: BTreeMap<&str, SubjectId> = BTreeMap::new();
    for subject in &manifest.subjects {
        let id = *ids
            .entry(subject.name.as_str())
            .or_insert_with(SubjectId::next);
        for provision in &subject.provides {
            table.declare(id, &provision.interface, provision.version);
        }
    }

    let mut failures = Vec::new();
    for requirement in &manifest.requirements {
        let Some(&id) = ids.get(requirement.subject.as_str()) else {
            failures.push(format!(
                "requirement on {} names unknown subject '{}'",
                requirement.interface, requirement.subject
            ));
            continue;
        };
        if let Err(err) = table.require(id, &requirement.interface, requirement.minimum) {
            failures.push(format!("{}: {err}", requirement.subject));
        }
    }
    failures
}
