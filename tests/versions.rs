// Version value guard rails: construction, parsing, ordering, hashing.

use capver::{Version, VersionError};
use std::collections::HashMap;

#[test]
fn components_are_named_major_minor_patch() {
    let version = Version::new(1, 2, 3);
    assert_eq!(version.major, 1);
    assert_eq!(version.minor, 2);
    assert_eq!(version.patch, 3);
}

#[test]
fn from_signed_accepts_non_negative_components() {
    assert_eq!(Version::from_signed(1, 2, 3).unwrap(), Version::new(1, 2, 3));
    assert_eq!(Version::from_signed(0, 0, 0).unwrap(), Version::new(0, 0, 0));
}

#[test]
fn from_signed_rejects_each_negative_component() {
    assert_eq!(
        Version::from_signed(-1, 0, 0).unwrap_err(),
        VersionError::InvalidNumber {
            field: "major",
            value: -1
        }
    );
    assert_eq!(
        Version::from_signed(1, -1, 0).unwrap_err(),
        VersionError::InvalidNumber {
            field: "minor",
            value: -1
        }
    );
    assert_eq!(
        Version::from_signed(1, 2, -1).unwrap_err(),
        VersionError::InvalidNumber {
            field: "patch",
            value: -1
        }
    );
}

#[test]
fn parse_converts_dotted_strings() {
    assert_eq!(Version::parse("1.2.3").unwrap(), Version::new(1, 2, 3));
}

#[test]
fn parse_defaults_missing_components_to_zero() {
    assert_eq!(Version::parse("3.2").unwrap(), Version::new(3, 2, 0));
    assert_eq!(Version::parse("1").unwrap(), Version::new(1, 0, 0));
}

#[test]
fn parse_rejects_the_empty_string() {
    assert!(matches!(
        Version::parse(""),
        Err(VersionError::Malformed { .. })
    ));
}

#[test]
fn parse_rejects_non_integer_segments() {
    assert!(matches!(
        Version::parse("example.com"),
        Err(VersionError::Malformed { .. })
    ));
}

#[test]
fn parse_rejects_too_many_segments() {
    assert!(matches!(
        Version::parse("1.2.3.4"),
        Err(VersionError::Malformed { .. })
    ));
}

#[test]
fn parse_rejects_negative_segments() {
    // The minus sign survives integer conversion; the component range check
    // is what rejects it.
    assert_eq!(
        Version::parse("-1.2.3").unwrap_err(),
        VersionError::InvalidNumber {
            field: "major",
            value: -1
        }
    );
}

#[test]
fn not_less_than_an_equal_version() {
    assert!(Version::new(1, 5, 9) >= Version::new(1, 5, 9));
    assert!(!(Version::new(1, 5, 9) < Version::new(1, 5, 9)));
}

#[test]
fn less_than_a_version_with_a_higher_major_number() {
    assert!(Version::new(1, 5, 9) < Version::new(2, 5, 9));
    assert!(Version::new(2, 5, 9) < Version::new(3, 0, 0));
}

#[test]
fn not_less_than_a_version_with_a_lower_major_number() {
    assert!(!(Version::new(2, 0, 0) < Version::new(1, 5, 9)));
    assert!(!(Version::new(2, 4, 0) < Version::new(1, 5, 9)));
    assert!(!(Version::new(2, 5, 8) < Version::new(1, 5, 9)));
}

#[test]
fn minor_number_breaks_major_ties() {
    assert!(Version::new(1, 5, 9) < Version::new(1, 6, 9));
    assert!(Version::new(1, 6, 9) < Version::new(1, 7, 0));
    assert!(!(Version::new(1, 6, 0) < Version::new(1, 5, 9)));
    assert!(!(Version::new(1, 6, 8) < Version::new(1, 5, 9)));
}

#[test]
fn patch_number_breaks_minor_ties() {
    assert!(Version::new(1, 5, 9) < Version::new(1, 5, 10));
    assert!(!(Version::new(1, 5, 10) < Version::new(1, 5, 9)));
}

#[test]
fn comparison_operators_are_mutually_consistent() {
    let samples = [
        Version::new(0, 0, 0),
        Version::new(1, 0, 0),
        Version::new(1, 5, 9),
        Version::new(1, 5, 10),
        Version::new(1, 6, 0),
        Version::new(2, 0, 0),
    ];
    for a in samples {
        for b in samples {
            assert_eq!(a > b, b < a);
            assert_eq!(a >= b, !(a < b));
            assert_eq!(a <= b, !(a > b));
        }
    }
}

#[test]
fn versions_work_as_hash_map_keys() {
    let mut things = HashMap::new();
    things.insert(Version::new(1, 0, 0), "thing v1");
    things.insert(Version::new(2, 0, 0), "thing v2");

    assert_eq!(things[&Version::parse("1.0.0").unwrap()], "thing v1");
    assert_eq!(things[&Version::parse("2.0.0").unwrap()], "thing v2");
}

#[test]
fn rendering_is_the_inverse_of_parsing() {
    let version = Version::new(8, 6, 4);
    assert_eq!(version.to_string(), "8.6.4");
    assert_eq!(Version::parse(&version.to_string()).unwrap(), version);
}

#[test]
fn debug_form_names_the_type_and_ordered_fields() {
    assert_eq!(
        format!("{:?}", Version::new(2, 4, 6)),
        "Version { major: 2, minor: 4, patch: 6 }"
    );
}
