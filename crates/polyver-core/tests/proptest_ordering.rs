//! Property-based tests for version ordering and VERS normalization

use std::cmp::Ordering;

use polyver_core::{
    Cargo, Debian, Ecosystem, Gem, Maven, Npm, Pypi, Version, VersRange, VersionRange,
};
use proptest::prelude::*;

fn semver_text() -> impl Strategy<Value = String> {
    (
        0u64..4,
        0u64..4,
        0u64..4,
        prop::sample::select(vec!["", "-alpha", "-alpha.1", "-beta", "-rc.1", "-1", "+build.7"]),
    )
        .prop_map(|(major, minor, patch, suffix)| {
            format!("{}.{}.{}{}", major, minor, patch, suffix)
        })
}

fn maven_text() -> impl Strategy<Value = String> {
    (
        0u64..3,
        0u64..3,
        prop::sample::select(vec![
            "", ".0", "-alpha1", "-beta-2", "-rc1", "-SNAPSHOT", "-ga", "-sp1", "-foo",
        ]),
    )
        .prop_map(|(major, minor, suffix)| format!("{}.{}{}", major, minor, suffix))
}

fn pypi_text() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "1!"]),
        0u64..3,
        0u64..3,
        prop::sample::select(vec![
            "", ".0", "a1", "b2", "rc1", ".post1", ".dev3", "a1.dev1", "+local.1",
        ]),
    )
        .prop_map(|(epoch, major, minor, suffix)| format!("{}{}.{}{}", epoch, major, minor, suffix))
}

fn gem_text() -> impl Strategy<Value = String> {
    (
        0u64..3,
        0u64..3,
        prop::sample::select(vec!["", ".0", ".pre", ".a", ".1", ".rc2", "-beta"]),
    )
        .prop_map(|(major, minor, suffix)| format!("{}.{}{}", major, minor, suffix))
}

fn debian_text() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["", "1:"]),
        0u64..3,
        0u64..3,
        prop::sample::select(vec!["", "~rc1", "+b1", "a"]),
        prop::sample::select(vec!["", "-1", "-0", "-2ubuntu1"]),
    )
        .prop_map(|(epoch, major, minor, suffix, revision)| {
            format!("{}{}.{}{}{}", epoch, major, minor, suffix, revision)
        })
}

/// Antisymmetry and transitivity over three parsed versions, plus a canonical rendering that
/// parses back to an equal version
fn check_order<E: Ecosystem>(a: &str, b: &str, c: &str) -> Result<(), TestCaseError> {
    let a = E::parse_version(a).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let b = E::parse_version(b).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let c = E::parse_version(c).map_err(|e| TestCaseError::fail(e.to_string()))?;

    prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    prop_assert_eq!(a.cmp(&a), Ordering::Equal);
    if a <= b && b <= c {
        prop_assert!(a <= c, "{} <= {} <= {} but not {} <= {}", a, b, c, a, c);
    }

    let canonical =
        E::parse_version(&a.canonical()).map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(canonical.cmp(&a), Ordering::Equal, "{} renders as {}", a, a.canonical());
    Ok(())
}

proptest! {
    #[test]
    fn test_semver_total_order(a in semver_text(), b in semver_text(), c in semver_text()) {
        check_order::<Npm>(&a, &b, &c)?;
        check_order::<Cargo>(&a, &b, &c)?;
    }

    #[test]
    fn test_maven_total_order(a in maven_text(), b in maven_text(), c in maven_text()) {
        check_order::<Maven>(&a, &b, &c)?;
    }

    #[test]
    fn test_pypi_total_order(a in pypi_text(), b in pypi_text(), c in pypi_text()) {
        check_order::<Pypi>(&a, &b, &c)?;
    }

    #[test]
    fn test_gem_total_order(a in gem_text(), b in gem_text(), c in gem_text()) {
        check_order::<Gem>(&a, &b, &c)?;
    }

    #[test]
    fn test_debian_total_order(a in debian_text(), b in debian_text(), c in debian_text()) {
        check_order::<Debian>(&a, &b, &c)?;
    }

    #[test]
    fn test_render_is_idempotent(
        constraints in prop::collection::vec(
            (prop::sample::select(vec![">=", ">", "<=", "<", "=", "!="]), maven_text()),
            1..6,
        )
    ) {
        let text = constraints
            .iter()
            .map(|(op, version)| format!("{}{}", op, version))
            .collect::<Vec<_>>()
            .join("|");
        let range = VersRange::<Maven>::parse(&format!("vers:maven/{}", text)).unwrap();
        let rendered = range.to_string();
        let reparsed = VersRange::<Maven>::parse(&rendered).unwrap();
        prop_assert_eq!(reparsed.to_string(), rendered);
    }

    /// Any number of lower bounds below any number of upper bounds pair into the most
    /// restrictive lower and upper bound
    #[test]
    fn test_same_direction_bounds_pair(
        lowers in prop::collection::vec((0u64..10, any::<bool>()), 3..6),
        uppers in prop::collection::vec((10u64..20, any::<bool>()), 3..6),
        candidate in 0u64..25,
    ) {
        let render = |op: &str, n: u64| format!("{}{}.0.0", op, n);
        let mut parts: Vec<String> = lowers
            .iter()
            .map(|(n, inclusive)| render(if *inclusive { ">=" } else { ">" }, *n))
            .collect();
        parts.extend(
            uppers
                .iter()
                .map(|(n, inclusive)| render(if *inclusive { "<=" } else { "<" }, *n)),
        );
        let range = VersRange::<Npm>::parse(&format!("vers:npm/{}", parts.join("|"))).unwrap();

        // at one version the inclusive spelling is kept, so exclusive wins only when alone
        let lower = lowers.iter().map(|(n, _)| *n).max().unwrap();
        let lower_inclusive = lowers.iter().any(|(n, inclusive)| *n == lower && *inclusive);
        let upper = uppers.iter().map(|(n, _)| *n).min().unwrap();
        let upper_inclusive = uppers.iter().any(|(n, inclusive)| *n == upper && *inclusive);

        let above = if lower_inclusive { candidate >= lower } else { candidate > lower };
        let below = if upper_inclusive { candidate <= upper } else { candidate < upper };
        let version = Npm::parse_version(&format!("{}.0.0", candidate)).unwrap();
        prop_assert_eq!(range.contains(&version), above && below);
        prop_assert_eq!(range.intervals().len(), 1);
    }
}
