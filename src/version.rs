//! Comparable component version values.
//!
//! `Version` is the three-part major.minor.patch form; `VersionIdentifier`
//! adds a fourth `edition` component compared after patch. Both are immutable,
//! totally ordered over their components in declared order, render as
//! dotted-decimal strings, and parse back from them. Rendering is the inverse
//! of parsing for every valid value.
//!
//! Components are unsigned, so directly constructed values cannot carry
//! negative numbers. Signed inputs still reach this module through string
//! parsing and JSON numbers; those paths funnel through the checked
//! `from_signed` constructors and surface [`VersionError::InvalidNumber`].

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failure modes for constructing or parsing a version value.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    /// A signed component was negative.
    #[error("invalid {field} version number: {value}")]
    InvalidNumber { field: &'static str, value: i64 },
    /// The input string does not follow the dotted-decimal grammar.
    #[error("\"{input}\" is not a valid version: {reason}")]
    Malformed { input: String, reason: String },
}

/// Arguments accepted wherever a version is expected: an existing value or
/// its dotted string form. String forms go through the parser and can fail.
pub trait IntoVersion {
    fn into_version(self) -> Result<Version, VersionError>;
}

impl IntoVersion for Version {
    fn into_version(self) -> Result<Version, VersionError> {
        Ok(self)
    }
}

impl IntoVersion for &Version {
    fn into_version(self) -> Result<Version, VersionError> {
        Ok(*self)
    }
}

impl IntoVersion for &str {
    fn into_version(self) -> Result<Version, VersionError> {
        self.parse()
    }
}

impl IntoVersion for String {
    fn into_version(self) -> Result<Version, VersionError> {
        self.parse()
    }
}

/// A major.minor.patch component version.
///
/// Field order carries the ordering: derived comparison is lexicographic over
/// (major, minor, patch). Equal values hash identically, so versions work as
/// map keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    const FIELDS: &'static [&'static str] = &["major", "minor", "patch"];

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Checked construction from signed components.
    ///
    /// Rejects any negative component with [`VersionError::InvalidNumber`].
    /// JSON numbers and other signed sources go through here.
    pub fn from_signed(major: i64, minor: i64, patch: i64) -> Result<Self, VersionError> {
        Ok(Self {
            major: check_component("major", major)?,
            minor: check_component("minor", minor)?,
            patch: check_component("patch", patch)?,
        })
    }

    /// Parse a dotted-decimal version string.
    ///
    /// Missing trailing components default to zero (`"3.2"` is 3.2.0). Empty
    /// input, non-integer segments, and more than three segments are
    /// [`VersionError::Malformed`]. A leading minus sign survives the integer
    /// conversion; the component range check rejects the value, so `"-1.2.3"`
    /// fails with [`VersionError::InvalidNumber`].
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        text.parse()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let numbers = split_components(text, Self::FIELDS)?;
        let mut parts = [0u64; 3];
        parts[..numbers.len()].copy_from_slice(&numbers);
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// A major.minor.patch.edition component version.
///
/// Identical to [`Version`] except for the trailing `edition` component,
/// which participates in ordering after patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionIdentifier {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub edition: u64,
}

impl VersionIdentifier {
    const FIELDS: &'static [&'static str] = &["major", "minor", "patch", "edition"];

    pub const fn new(major: u64, minor: u64, patch: u64, edition: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            edition,
        }
    }

    /// Checked construction from signed components; see [`Version::from_signed`].
    pub fn from_signed(
        major: i64,
        minor: i64,
        patch: i64,
        edition: i64,
    ) -> Result<Self, VersionError> {
        Ok(Self {
            major: check_component("major", major)?,
            minor: check_component("minor", minor)?,
            patch: check_component("patch", patch)?,
            edition: check_component("edition", edition)?,
        })
    }

    /// Parse a dotted-decimal identifier of up to four segments; see
    /// [`Version::parse`] for the grammar and failure modes.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        text.parse()
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.edition
        )
    }
}

impl FromStr for VersionIdentifier {
    type Err = VersionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let numbers = split_components(text, Self::FIELDS)?;
        let mut parts = [0u64; 4];
        parts[..numbers.len()].copy_from_slice(&numbers);
        Ok(Self::new(parts[0], parts[1], parts[2], parts[3]))
    }
}

impl Serialize for VersionIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

fn check_component(field: &'static str, value: i64) -> Result<u64, VersionError> {
    u64::try_from(value).map_err(|_| VersionError::InvalidNumber { field, value })
}

/// Split `text` on `.` and convert each segment, pairing segments with field
/// names in declared order. Never partially parses: the first bad segment
/// fails the whole input.
fn split_components(text: &str, fields: &[&'static str]) -> Result<Vec<u64>, VersionError> {
    if text.is_empty() {
        return Err(VersionError::Malformed {
            input: text.to_string(),
            reason: "empty string".to_string(),
        });
    }

    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() > fields.len() {
        return Err(VersionError::Malformed {
            input: text.to_string(),
            reason: format!("expected at most {} dotted segments", fields.len()),
        });
    }

    let mut numbers = Vec::with_capacity(segments.len());
    for (segment, field) in segments.iter().zip(fields.iter().copied()) {
        let value: i64 = segment.parse().map_err(|_| VersionError::Malformed {
            input: text.to_string(),
            reason: format!("segment \"{segment}\" is not an integer"),
        })?;
        numbers.push(check_component(field, value)?);
    }
    Ok(numbers)
}
