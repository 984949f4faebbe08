//! Capability registry wiring.
//!
//! The registry is a side-table: subjects never carry registration state.
//! A [`ClaimTable`] maps (subject identity, interface name) to the set of
//! versions that subject declares; `register` adds claims and `require`
//! answers compatibility queries. `process` wraps one table in a
//! process-wide mutex for callers that want module-level registration.

pub mod claims;
pub mod error;
pub mod process;

pub use claims::{ClaimTable, SubjectId, satisfies};
pub use error::{FailedRequirement, RegistryError};
