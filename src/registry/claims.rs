//! Claim table: which subject declares which interface versions.
//!
//! Storage is a nested `BTreeMap` so iteration order is deterministic, and
//! the per-interface `BTreeSet` gives registration set semantics: declaring
//! the identical (subject, interface, version) triple twice leaves one claim.

use crate::registry::error::{FailedRequirement, RegistryError};
use crate::version::{IntoVersion, Version, VersionError};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity for a subject.
///
/// Ids are allocated from a process-wide counter rather than derived from an
/// object address; an address can be reused after its subject is dropped, an
/// allocated id never aliases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubjectId(u64);

impl SubjectId {
    /// Allocate a fresh id, distinct from every id allocated before it.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subject#{}", self.0)
    }
}

/// Whether `registered` satisfies a requirement for at least `minimum`.
///
/// Same major family, and not older than the requested minor.patch within
/// it. A different major family never satisfies, even when numerically
/// higher.
pub fn satisfies(registered: Version, minimum: Version) -> bool {
    registered.major == minimum.major
        && (registered.minor, registered.patch) >= (minimum.minor, minimum.patch)
}

/// Registry of interface version claims, keyed by subject identity and
/// interface name.
#[derive(Debug, Default)]
pub struct ClaimTable {
    claims: BTreeMap<SubjectId, BTreeMap<String, BTreeSet<Version>>>,
}

impl ClaimTable {
    /// Record that `subject` implements `interface` at `version`.
    ///
    /// Accepts a [`Version`] or its string form; only the string form can
    /// fail. Re-registering an identical triple is a no-op.
    pub fn register<V: IntoVersion>(
        &mut self,
        subject: SubjectId,
        interface: &str,
        version: V,
    ) -> Result<(), VersionError> {
        let version = version.into_version()?;
        self.declare(subject, interface, version);
        Ok(())
    }

    /// Infallible form of [`ClaimTable::register`] for an already-parsed
    /// version.
    pub fn declare(&mut self, subject: SubjectId, interface: &str, version: Version) {
        self.claims
            .entry(subject)
            .or_default()
            .entry(interface.to_string())
            .or_default()
            .insert(version);
    }

    /// Assert that some registered version for (subject, interface)
    /// satisfies `minimum`; see [`satisfies`] for the rule.
    pub fn require<V: IntoVersion>(
        &self,
        subject: SubjectId,
        interface: &str,
        minimum: V,
    ) -> Result<(), RegistryError> {
        let minimum = minimum.into_version()?;
        let registered = self.claims(subject, interface);
        if registered.iter().any(|v| satisfies(*v, minimum)) {
            return Ok(());
        }
        Err(FailedRequirement {
            subject,
            interface: interface.to_string(),
            minimum,
            registered,
        }
        .into())
    }

    /// Versions registered for (subject, interface), ascending. Empty when
    /// the pair has never been registered.
    pub fn claims(&self, subject: SubjectId, interface: &str) -> Vec<Version> {
        self.claims
            .get(&subject)
            .and_then(|interfaces| interfaces.get(interface))
            .map(|versions| versions.iter().copied().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfies_holds_within_the_major_family() {
        let registered = Version::new(1, 5, 1);
        assert!(satisfies(registered, Version::new(1, 1, 0)));
        assert!(satisfies(registered, Version::new(1, 5, 1)));
        assert!(satisfies(registered, Version::new(1, 4, 9)));
        assert!(!satisfies(registered, Version::new(1, 5, 2)));
        assert!(!satisfies(registered, Version::new(1, 6, 0)));
    }

    #[test]
    fn satisfies_never_crosses_major_families() {
        assert!(!satisfies(Version::new(2, 0, 0), Version::new(1, 0, 0)));
        assert!(!satisfies(Version::new(1, 9, 9), Version::new(2, 0, 0)));
    }

    #[test]
    fn duplicate_registration_keeps_one_claim() {
        let mut table = ClaimTable::default();
        let subject = SubjectId::next();
        table.register(subject, "KvStore", "1.2.0").unwrap();
        table.register(subject, "KvStore", "1.2.0").unwrap();
        assert_eq!(table.claims(subject, "KvStore"), vec![Version::new(1, 2, 0)]);
    }

    #[test]
    fn claims_are_ascending() {
        let mut table = ClaimTable::default();
        let subject = SubjectId::next();
        table.register(subject, "KvStore", "2.1.2").unwrap();
        table.register(subject, "KvStore", "1.3.4").unwrap();
        assert_eq!(
            table.claims(subject, "KvStore"),
            vec![Version::new(1, 3, 4), Version::new(2, 1, 2)]
        );
    }

    #[test]
    fn subject_ids_are_unique() {
        let first = SubjectId::next();
        let second = SubjectId::next();
        assert_ne!(first, second);
    }
}
