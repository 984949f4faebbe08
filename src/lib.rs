//! Comparable component versions and a runtime interface capability
//! registry.
//!
//! Two composed facilities. [`Version`] and [`VersionIdentifier`] are
//! immutable dotted-decimal version values with total lexicographic
//! ordering over their components; parsing and rendering are inverses for
//! every valid value. The registry ([`ClaimTable`] and the process-wide
//! facade in [`registry::process`]) is a side-table mapping (subject
//! identity, interface name) to the set of versions that subject declares:
//! providers `register`, consumers `require` a minimum version and receive
//! a [`FailedRequirement`] when no registered version in the same major
//! family is at least the requested minor.patch.
//!
//! [`manifest`] adds a JSON document form of the same claims so the `capver`
//! binary can verify declared requirements offline.

pub mod manifest;
pub mod registry;
pub mod version;

pub use manifest::{MANIFEST_VERSION, Manifest, ManifestError};
pub use registry::{ClaimTable, FailedRequirement, RegistryError, SubjectId, satisfies};
pub use version::{IntoVersion, Version, VersionError, VersionIdentifier};
