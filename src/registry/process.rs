//! Process-wide default registry.
//!
//! One [`ClaimTable`] behind a mutex, for providers and consumers that do
//! not thread a table through their call graph. The mutex is the external
//! synchronization the core table deliberately omits; operations here are
//! short lock-hold lookups and inserts.

use crate::registry::claims::{ClaimTable, SubjectId};
use crate::registry::error::RegistryError;
use crate::version::{IntoVersion, Version, VersionError};
use std::sync::{Mutex, OnceLock, PoisonError};

/// Interface name under which the crate registers its own API version.
pub const CRATE_INTERFACE: &str = "capver";

/// The API version declared for [`CRATE_INTERFACE`].
pub const CRATE_API_VERSION: Version = Version::new(1, 0, 0);

fn table() -> &'static Mutex<ClaimTable> {
    static TABLE: OnceLock<Mutex<ClaimTable>> = OnceLock::new();
    TABLE.get_or_init(|| Mutex::new(ClaimTable::default()))
}

/// Record a claim in the process-wide table; see [`ClaimTable::register`].
pub fn register<V: IntoVersion>(
    subject: SubjectId,
    interface: &str,
    version: V,
) -> Result<(), VersionError> {
    table()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .register(subject, interface, version)
}

/// Check a requirement against the process-wide table; see
/// [`ClaimTable::require`].
pub fn require<V: IntoVersion>(
    subject: SubjectId,
    interface: &str,
    minimum: V,
) -> Result<(), RegistryError> {
    table()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .require(subject, interface, minimum)
}

/// Versions registered in the process-wide table for (subject, interface).
pub fn claims(subject: SubjectId, interface: &str) -> Vec<Version> {
    table()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .claims(subject, interface)
}

/// The crate's own subject, registered under [`CRATE_INTERFACE`] at
/// [`CRATE_API_VERSION`] on first access.
pub fn crate_subject() -> SubjectId {
    static SUBJECT: OnceLock<SubjectId> = OnceLock::new();
    *SUBJECT.get_or_init(|| {
        let subject = SubjectId::next();
        table()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .declare(subject, CRATE_INTERFACE, CRATE_API_VERSION);
        subject
    })
}
