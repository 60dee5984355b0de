//! VERS ranges: `vers:<scheme>/<constraint>|<constraint>...`

mod normalizer;
mod parser;

use std::fmt;

use crate::constraint::{Constraint, Interval};
use crate::scheme::{Ecosystem, Scheme};
use crate::version::{Version, VersionRange};
use crate::{Error, Result};

pub(crate) use parser::split_vers;

/// A parsed and normalized VERS range for ecosystem `E`.
///
/// Membership is the union of the exact and bounded intervals minus every excluded version.
/// A range made only of exclusions contains nothing.
pub struct VersRange<E: Ecosystem> {
    intervals: Vec<Interval<E::Version>>,
    wildcard: bool,
    /// Whether a constraint as written named a prerelease
    names_prerelease: bool,
}

impl<E: Ecosystem> VersRange<E> {
    /// Parse VERS text. Its scheme must be the one `E` stands for.
    pub fn parse(text: &str) -> Result<Self> {
        let (scheme, constraints) = split_vers(text)?;
        if scheme != E::SCHEME {
            return Err(Error::semantic(
                text,
                format!("expected a {} range, found {}", E::SCHEME, scheme),
            ));
        }

        let range = match parser::parse_constraints::<E::Version>(constraints)? {
            parser::Constraints::Wildcard => Self::wildcard(),
            parser::Constraints::List(list) => Self::from_constraints(list)?,
        };
        log::debug!("Parsed {:?} as {}", text.trim(), range);
        Ok(range)
    }

    /// Build a range from already parsed constraints
    pub fn from_constraints(constraints: Vec<Constraint<E::Version>>) -> Result<Self> {
        if constraints.is_empty() {
            return Err(Error::semantic("", "the constraint list is empty"));
        }
        let names_prerelease = constraints.iter().any(|c| c.version().is_prerelease());
        let intervals = normalizer::normalize(&constraints);
        log::trace!(
            "Normalized {} constraints into {} intervals",
            constraints.len(),
            intervals.len()
        );

        Ok(VersRange {
            intervals,
            wildcard: false,
            names_prerelease,
        })
    }

    /// The range containing every version
    pub fn wildcard() -> Self {
        VersRange {
            intervals: Vec::new(),
            wildcard: true,
            names_prerelease: false,
        }
    }

    pub fn scheme(&self) -> Scheme {
        E::SCHEME
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn intervals(&self) -> &[Interval<E::Version>] {
        &self.intervals
    }

    /// The canonical constraint list, sorted by version with percent-encoded literals
    pub fn constraints(&self) -> Vec<String> {
        if self.wildcard {
            return vec!["*".to_string()];
        }
        let mut constraints: Vec<Constraint<E::Version>> = self
            .intervals
            .iter()
            .flat_map(Interval::to_constraints)
            .collect();
        constraints.sort_by(|a, b| a.version().cmp(b.version()));
        constraints
            .iter()
            .map(|c| {
                let literal = c.version().to_string();
                format!("{}{}", c.operator(), urlencoding::encode(&literal))
            })
            .collect()
    }

    /// Whether prereleases are left out of this range
    fn excludes_prereleases(&self) -> bool {
        E::IMPLICIT_PRERELEASE_EXCLUSION && !self.names_prerelease
    }
}

impl<E: Ecosystem> Clone for VersRange<E> {
    fn clone(&self) -> Self {
        VersRange {
            intervals: self.intervals.clone(),
            wildcard: self.wildcard,
            names_prerelease: self.names_prerelease,
        }
    }
}

impl<E: Ecosystem> fmt::Debug for VersRange<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersRange")
            .field("scheme", &E::SCHEME)
            .field("intervals", &self.intervals)
            .field("wildcard", &self.wildcard)
            .field("names_prerelease", &self.names_prerelease)
            .finish()
    }
}

impl<E: Ecosystem> VersionRange for VersRange<E> {
    type Version = E::Version;

    fn contains(&self, version: &E::Version) -> bool {
        if self.wildcard {
            return true;
        }
        if version.is_prerelease() && self.excludes_prereleases() {
            log::trace!("{} leaves out prerelease {}", self, version);
            return false;
        }

        let (excludes, includes): (Vec<_>, Vec<_>) =
            self.intervals.iter().partition(|interval| interval.is_exclude());
        if excludes.iter().any(|exclude| exclude.contains(version)) {
            return false;
        }
        includes.iter().any(|interval| interval.contains(version))
    }
}

/// The canonical VERS rendering. Parsing it back gives an equal range.
impl<E: Ecosystem> fmt::Display for VersRange<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vers:{}/{}", E::SCHEME, self.constraints().join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{Debian, Maven, Npm, Pypi};
    use crate::version::MavenVersion;
    use crate::ErrorKind;

    fn maven(text: &str) -> VersRange<Maven> {
        VersRange::parse(text).unwrap()
    }

    fn contains<E: Ecosystem>(range: &str, version: &str) -> bool {
        VersRange::<E>::parse(range)
            .unwrap()
            .contains(&E::parse_version(version).unwrap())
    }

    #[test]
    fn test_bounded() {
        assert!(contains::<Maven>("vers:maven/>=1.0.0|<=2.0.0", "1.5.0"));
        assert!(!contains::<Maven>("vers:maven/>=1.0.0|<=2.0.0", "2.5.0"));
        assert!(contains::<Maven>("vers:maven/>=1.0.0|<=2.0.0", "2.0"));
        assert!(!contains::<Maven>("vers:maven/>1.0.0|<2.0.0", "1.0"));
    }

    #[test]
    fn test_exclusions() {
        let range = "vers:maven/>=1.0.0|<=3.0.0|!=2.0.0";
        assert!(!contains::<Maven>(range, "2.0.0"));
        assert!(contains::<Maven>(range, "1.9.0"));
        assert!(!contains::<Npm>("vers:npm/!=1.0.0|!=1.0.1", "1.0.1"));
        assert!(contains::<Npm>("vers:npm/>=0.1.0|!=1.0.0", "1.0.1"));
    }

    #[test]
    fn test_exclusions_alone_contain_nothing() {
        assert!(!contains::<Npm>("vers:npm/!=1.0.0", "1.0.1"));
        assert!(!contains::<Npm>("vers:npm/!=1.0.0", "1.0.0"));
        assert!(!contains::<Maven>("vers:maven/!=1.0|!=2.0", "3.0"));
    }

    #[test]
    fn test_exact() {
        let range = "vers:npm/=1.0.0|=2.0.0|>=3.0.0";
        assert!(contains::<Npm>(range, "2.0.0"));
        assert!(!contains::<Npm>(range, "2.5.0"));
        assert!(contains::<Npm>(range, "3.1.0"));
    }

    #[test]
    fn test_most_restrictive_bound() {
        assert!(!contains::<Maven>("vers:maven/>=1.0.0|>=2.0.0|<=3.0.0", "1.5.0"));
        assert!(contains::<Maven>("vers:maven/>=1.0.0|>=2.0.0|<=3.0.0", "2.5.0"));
    }

    #[test]
    fn test_wildcard() {
        assert!(contains::<Maven>("vers:maven/*", "anything-parseable"));
        assert!(maven("vers:maven/*").is_wildcard());
        assert_eq!(maven("vers:maven/ * ").to_string(), "vers:maven/*");
    }

    #[test]
    fn test_implicit_prerelease_exclusion() {
        assert!(!contains::<Pypi>("vers:pypi/>=1.0.0|<=2.0.0", "1.5.0b1"));
        assert!(contains::<Pypi>("vers:pypi/>=1.0.0b1|<=2.0.0", "1.5.0b1"));
        assert!(contains::<Pypi>("vers:pypi/*", "1.5.0b1"));
        // only PyPI leaves prereleases out
        assert!(contains::<Npm>("vers:npm/>=1.0.0|<=2.0.0", "1.5.0-beta.1"));
        assert!(contains::<Debian>("vers:deb/>=1.0|<=2.0", "1.5~rc1"));
    }

    #[test]
    fn test_canonical_rendering() {
        let range = maven("vers:maven/ <=3.0.0 | >= 1.0.0|!=2.0.0");
        assert_eq!(range.to_string(), "vers:maven/>=1.0.0|!=2.0.0|<=3.0.0");
        assert_eq!(maven(&range.to_string()).to_string(), range.to_string());

        let redundant = maven("vers:maven/>=1.0|>=2.0|<3.0|<=4.0");
        assert_eq!(redundant.to_string(), "vers:maven/>=2.0|<3.0");

        let npm = VersRange::<Npm>::parse("vers:npm/>=1.0.0%2Bbuild").unwrap();
        assert_eq!(npm.to_string(), "vers:npm/>=1.0.0%2Bbuild");
        assert_eq!(npm.constraints(), vec![">=1.0.0%2Bbuild"]);
    }

    #[test]
    fn test_errors() {
        let mismatch = VersRange::<Maven>::parse("vers:npm/>=1.0.0").unwrap_err();
        assert_eq!(mismatch.kind(), ErrorKind::Semantic);
        let unknown = VersRange::<Maven>::parse("vers:cobol/>=1.0.0").unwrap_err();
        assert_eq!(unknown.kind(), ErrorKind::Routing);
        let empty = VersRange::<Maven>::parse("vers:maven/").unwrap_err();
        assert_eq!(empty.kind(), ErrorKind::Semantic);
        let bad = VersRange::<Npm>::parse("vers:npm/>=1.0").unwrap_err();
        assert_eq!(bad.kind(), ErrorKind::Syntax);
        assert!(VersRange::<Maven>::from_constraints(Vec::new()).is_err());
    }

    #[test]
    fn test_conflicting_range_is_empty_not_an_error() {
        for text in ["vers:maven/>=2.0|<2.0", "vers:maven/<2.0|>=2.0", "vers:maven/<1.0|>3.0"] {
            let range = maven(text);
            for version in ["0.5", "1.0", "2.0", "3.0", "5.0"] {
                let version = MavenVersion::parse(version).unwrap();
                assert!(!range.contains(&version), "{} contains {}", text, version);
            }
        }
    }
}
