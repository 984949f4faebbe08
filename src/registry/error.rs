use crate::registry::claims::SubjectId;
use crate::version::{Version, VersionError};
use thiserror::Error;

/// No registered version satisfied a requirement.
///
/// Carries the requested minimum and the versions that were registered for
/// the (subject, interface) pair so callers can report what was actually
/// available. An unregistered pair fails with an empty `registered` list.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error(
    "{subject} provides no version of {interface} compatible with {minimum} (registered: {})",
    list_versions(.registered)
)]
pub struct FailedRequirement {
    pub subject: SubjectId,
    pub interface: String,
    pub minimum: Version,
    pub registered: Vec<Version>,
}

/// Umbrella error for registry operations.
///
/// `require` can fail either because a version argument in string form did
/// not parse, or because nothing registered satisfies the requirement.
/// Matching on [`RegistryError::FailedRequirement`] catches the specific
/// kind; matching on `RegistryError` catches both.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    Version(#[from] VersionError),
    #[error(transparent)]
    FailedRequirement(#[from] FailedRequirement),
}

fn list_versions(versions: &[Version]) -> String {
    if versions.is_empty() {
        return "none".to_string();
    }
    versions
        .iter()
        .map(Version::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
