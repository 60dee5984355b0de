//! Cargo version requirements: `1.2.3`, `^0.4, <0.4.8`, `~1.2`, `1.*`

use lazy_static::lazy_static;
use regex::Regex;

use super::partial::{self, Flavor, Partial};
use super::{split_trimmed, NativeRange, PrereleasePolicy};
use crate::constraint::{ConstraintInterface, MultiConstraint, Operator};
use crate::version::SemVersion;
use crate::{Error, Result};

lazy_static! {
    static ref COMPARATOR_RE: Regex =
        Regex::new(r"^(?P<op><=|>=|<|>|=|~|\^)?\s*(?P<version>[0-9A-Za-z.*+\-]+)$").unwrap();
}

/// Parse a comma-separated requirement. A bare version means the same as `^`.
pub fn parse(text: &str) -> Result<NativeRange<SemVersion>> {
    if text.trim().is_empty() {
        return Err(Error::range(text, "requirement is empty"));
    }
    let comparators = split_trimmed(text, ",")
        .map(|comparator| parse_comparator(comparator, text))
        .collect::<Result<Vec<_>>>()?;

    Ok(NativeRange::new(
        text,
        MultiConstraint::create(comparators, true),
        PrereleasePolicy::SameRelease(SemVersion::same_release),
    ))
}

fn parse_comparator(
    comparator: &str,
    input: &str,
) -> Result<Box<dyn ConstraintInterface<SemVersion>>> {
    if comparator.is_empty() {
        return Err(Error::range(input, "empty comparator"));
    }
    if comparator == "*" {
        return Ok(partial::x_range(&Partial::Any, Flavor::Cargo));
    }
    let caps = COMPARATOR_RE
        .captures(comparator)
        .ok_or_else(|| Error::range(input, format!("`{}` is not a comparator", comparator)))?;
    let version_text = &caps["version"];
    if version_text.starts_with(['v', 'V']) {
        return Err(Error::range(input, "Cargo versions don't take a `v` prefix"));
    }
    let version = Partial::parse(version_text, input)?;

    Ok(match caps.name("op").map(|m| m.as_str()) {
        // `1.*` is a wildcard and means the same with or without an operator
        None if version_text.contains('*') => partial::x_range(&version, Flavor::Cargo),
        None | Some("^") => partial::caret(&version, Flavor::Cargo),
        Some("~") => partial::tilde(&version, Flavor::Cargo),
        Some(op) => {
            let operator = op
                .parse::<Operator>()
                .map_err(|e| Error::range(input, e.to_string()))?;
            partial::primitive(operator, &version, Flavor::Cargo)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{Version, VersionRange};

    fn matches(req: &str, version: &str) -> bool {
        parse(req)
            .unwrap()
            .contains(&SemVersion::parse(version).unwrap())
    }

    #[test]
    fn test_default_is_caret() {
        assert!(matches("1.2.3", "1.2.3"));
        assert!(matches("1.2.3", "1.9.0"));
        assert!(!matches("1.2.3", "2.0.0"));
        assert!(!matches("1.2.3", "1.2.2"));
        assert!(matches("0.2.3", "0.2.9"));
        assert!(!matches("0.2.3", "0.3.0"));
        assert!(matches("0.0.3", "0.0.3"));
        assert!(!matches("0.0.3", "0.0.4"));
        assert!(matches("0", "0.9.9"));
    }

    #[test]
    fn test_operators() {
        assert!(matches("=1.2.3", "1.2.3"));
        assert!(!matches("=1.2.3", "1.2.4"));
        assert!(matches("=1.2", "1.2.9"));
        assert!(matches(">= 1.2.0, < 1.5", "1.4.99"));
        assert!(!matches(">= 1.2.0, < 1.5", "1.5.0"));
        assert!(matches("~1.2", "1.2.7"));
        assert!(!matches("~1.2", "1.3.0"));
        assert!(matches("~1", "1.8.0"));
        assert!(matches(">1", "2.0.0"));
        assert!(!matches(">1", "1.9.0"));
        assert!(matches("<=1.2", "1.2.5"));
    }

    #[test]
    fn test_wildcards() {
        assert!(matches("*", "7.0.0"));
        assert!(matches("1.*", "1.99.0"));
        assert!(!matches("1.*", "2.0.0"));
        assert!(matches("1.2.*", "1.2.0"));
        assert!(!matches("1.2.*", "1.3.0"));
    }

    #[test]
    fn test_prerelease() {
        assert!(matches(">=1.0.0-beta.1", "1.0.0-beta.2"));
        assert!(!matches(">=1.0.0-beta.1", "1.1.0-beta.2"));
        assert!(!matches("^1.0.0", "1.1.0-alpha"));
        assert!(!matches("<2.0.0", "2.0.0-alpha"));
        assert!(matches("=1.0.0-rc.1", "1.0.0-rc.1"));
    }

    #[test]
    fn test_invalid() {
        for req in ["", "1.2.3,", ">=", "v1.2.3", "1.2.3.4", "^1.2 || 2", "foo"] {
            assert!(parse(req).is_err(), "{}", req);
        }
    }
}
