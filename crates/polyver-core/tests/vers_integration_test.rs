//! Integration tests for VERS containment through the public facade
//!
//! These tests exercise the crate the way callers do: version and range text in, answers out.

use polyver_core::{ErrorKind, Polyver, Scheme};

#[test]
fn test_bounded_range() {
    assert!(Polyver::contains("vers:maven/>=1.0.0|<=2.0.0", "1.5.0").unwrap());
    assert!(!Polyver::contains("vers:maven/>=1.0.0|<=2.0.0", "2.5.0").unwrap());
}

#[test]
fn test_excluded_version() {
    let range = "vers:maven/>=1.0.0|<=3.0.0|!=2.0.0";
    assert!(!Polyver::contains(range, "2.0.0").unwrap());
    assert!(Polyver::contains(range, "1.9.0").unwrap());
}

#[test]
fn test_most_restrictive_lower_bound() {
    assert!(!Polyver::contains("vers:maven/>=1.0.0|>=2.0.0|<=3.0.0", "1.5.0").unwrap());
}

#[test]
fn test_wildcard_contains_anything_parseable() {
    for version in ["1", "1.0-SNAPSHOT", "2.3.4.5.6", "1-sp3", "0"] {
        assert!(Polyver::contains("vers:maven/*", version).unwrap(), "{}", version);
    }
    assert!(Polyver::contains("vers:maven/*", "").is_err());
}

#[test]
fn test_pypi_prereleases() {
    assert!(!Polyver::contains("vers:pypi/>=1.0.0|<=2.0.0", "1.5.0b1").unwrap());
    assert!(Polyver::contains("vers:pypi/>=1.0.0b1|<=2.0.0", "1.5.0b1").unwrap());
}

#[test]
fn test_maven_equivalences() {
    assert_eq!(Polyver::compare(Scheme::Maven, "1.0", "1.0.0").unwrap(), 0);
    assert_eq!(Polyver::compare(Scheme::Maven, "1.0.0-ga", "1.0").unwrap(), 0);
}

#[test]
fn test_metadata_is_irrelevant() {
    for scheme in [Scheme::Npm, Scheme::Cargo, Scheme::Golang, Scheme::Maven] {
        assert_eq!(Polyver::compare(scheme, "1.0.0+x", "1.0.0+y").unwrap(), 0, "{}", scheme);
    }
    assert_eq!(Polyver::compare(Scheme::Pypi, "1.0.0+x", "1.0.0+y").unwrap(), 0);
}

#[test]
fn test_release_beats_prerelease() {
    assert_eq!(Polyver::compare(Scheme::Npm, "1.0.0", "1.0.0-alpha").unwrap(), 1);
    assert_eq!(Polyver::compare(Scheme::Maven, "1.0.0", "1.0.0-alpha").unwrap(), 1);
    assert_eq!(Polyver::compare(Scheme::Pypi, "1.0.0", "1.0.0a1").unwrap(), 1);
}

#[test]
fn test_every_ecosystem_routes() {
    let cases = [
        ("vers:maven/>=1.0|<2.0", "1.5"),
        ("vers:pypi/>=1.0|<2.0", "1.5"),
        ("vers:npm/>=1.0.0|<2.0.0", "1.5.0"),
        ("vers:cargo/>=1.0.0|<2.0.0", "1.5.0"),
        ("vers:golang/>=v1.0.0|<v2.0.0", "v1.5.0"),
        ("vers:gem/>=1.0|<2.0", "1.5"),
        ("vers:deb/>=1.0|<2.0", "1:0.5"),
    ];
    for (range, version) in cases {
        let expected = !range.starts_with("vers:deb");
        assert_eq!(Polyver::contains(range, version).unwrap(), expected, "{} {}", range, version);
    }
}

#[test]
fn test_error_kinds() {
    let routing = Polyver::contains("vers:cobol/>=1.0", "1.0").unwrap_err();
    assert_eq!(routing.kind(), ErrorKind::Routing);
    assert_eq!(routing.input(), "cobol");

    let semantic = Polyver::contains("vers:npm/*|>=1.0.0", "1.0.0").unwrap_err();
    assert_eq!(semantic.kind(), ErrorKind::Semantic);

    let syntax = Polyver::contains("vers:npm/>=1.0.0", "1.0").unwrap_err();
    assert_eq!(syntax.kind(), ErrorKind::Syntax);
    assert_eq!(syntax.input(), "1.0");

    let missing_prefix = Polyver::contains("npm/>=1.0.0", "1.0.0").unwrap_err();
    assert_eq!(missing_prefix.kind(), ErrorKind::Syntax);
}

#[test]
fn test_conflicting_range_matches_nothing() {
    for range in ["vers:maven/>=2.0|<1.0", "vers:maven/<1.0|>3.0"] {
        for version in ["0.5", "1.0", "1.5", "2.0", "3.0", "5.0"] {
            assert!(!Polyver::contains(range, version).unwrap(), "{} {}", range, version);
        }
    }
}

#[test]
fn test_exclusions_need_a_containing_interval() {
    assert!(!Polyver::contains("vers:npm/!=1.0.0", "1.0.1").unwrap());
    assert!(Polyver::contains("vers:npm/>=1.0.0|!=1.0.0", "1.0.1").unwrap());
    assert!(!Polyver::contains("vers:npm/>=1.0.0|!=1.0.0", "1.0.0").unwrap());
}

#[test]
fn test_maven_service_pack_beats_numbers() {
    assert_eq!(Polyver::compare(Scheme::Maven, "1-sp", "1.1").unwrap(), 1);
    assert_eq!(Polyver::compare(Scheme::Maven, "1-sp1", "1.5").unwrap(), 1);
}

#[test]
fn test_percent_encoded_literals() {
    assert!(Polyver::contains("vers:npm/=1.0.0%2Bbuild.1", "1.0.0").unwrap());
    assert_eq!(
        Polyver::normalize("vers:npm/=1.0.0%2Bbuild.1").unwrap(),
        "vers:npm/=1.0.0%2Bbuild.1"
    );
}

#[test]
fn test_native_ranges() {
    assert!(Polyver::contains_in(Scheme::Npm, "^1.2.3 || ^2.0.0", "2.4.0").unwrap());
    assert!(!Polyver::contains_in(Scheme::Npm, "^1.2.3", "1.3.0-beta.1").unwrap());
    assert!(Polyver::contains_in(Scheme::Cargo, "~1.2", "1.2.9").unwrap());
    assert!(Polyver::contains_in(Scheme::Pypi, "~=1.4.2", "1.4.7").unwrap());
    assert!(!Polyver::contains_in(Scheme::Pypi, ">=1.0,<2.0", "1.5.0b1").unwrap());
    assert!(Polyver::contains_in(Scheme::Maven, "[1.0,2.0),[3.0,)", "3.1").unwrap());
    assert!(Polyver::contains_in(Scheme::Gem, "~> 2.2, != 2.2.5", "2.9").unwrap());
    assert!(Polyver::contains_in(Scheme::Debian, ">= 1.0, << 2.0", "1.9~rc1").unwrap());
    assert!(Polyver::contains_in(Scheme::Golang, ">=v1.2.0 <v2.0.0", "v1.9.0").unwrap());
}

#[test]
fn test_normalize_is_idempotent() {
    for vers in [
        "vers:maven/<=3.0.0|>=1.0.0|!=2.0.0",
        "vers:pypi/>=1.0|>=1.5|<3.0|<2.0",
        "vers:npm/*",
        "vers:deb/=1:1.0-1|>=2.0",
        "vers:gem/!=1.0|!=2.0",
    ] {
        let once = Polyver::normalize(vers).unwrap();
        assert_eq!(Polyver::normalize(&once).unwrap(), once, "{}", vers);
    }
}

#[test]
fn test_sort_across_ecosystems() {
    assert_eq!(
        Polyver::sort(Scheme::Pypi, &["1.0", "1.0.post1", "1.0a1", "1.0.dev1", "0.9"]).unwrap(),
        vec!["0.9", "1.0.dev1", "1.0a1", "1.0", "1.0.post1"]
    );
    assert_eq!(
        Polyver::rsort(Scheme::Debian, &["1.0", "1:0.1", "1.0~rc1", "1.0-1"]).unwrap(),
        vec!["1:0.1", "1.0-1", "1.0", "1.0~rc1"]
    );
}
