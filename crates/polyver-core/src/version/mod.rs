//! The contract every ecosystem's version and range types satisfy,
//! and the per-ecosystem comparators

use std::fmt;

use crate::{Error, Result};

mod debian;
mod gem;
mod maven;
mod pypi;
mod semver;

pub use debian::DebianVersion;
pub use gem::GemVersion;
pub use maven::{Item, MavenVersion};
pub(crate) use pypi::compare_release;
pub use pypi::{LocalSegment, PreRelease, PypiVersion};
pub use semver::{Identifier, SemVersion};

/// A version of one particular ecosystem.
///
/// Values only come into existence through [`Version::parse`] and never change afterwards.
/// [`Ord`] is the ecosystem's total order: build or local metadata does not take part in it,
/// so two versions that differ only in metadata are equal while still rendering differently
/// through [`fmt::Display`].
pub trait Version: Ord + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Parse a version. Surrounding whitespace is trimmed, empty input is rejected.
    fn parse(text: &str) -> Result<Self>;

    /// Whether this version carries a prerelease or development marker
    fn is_prerelease(&self) -> bool {
        false
    }

    /// A rendering in which equal versions render identically. Parses back to an equal version.
    fn canonical(&self) -> String {
        self.to_string()
    }
}

/// A set of versions of one ecosystem, built once and queried many times
pub trait VersionRange: fmt::Debug + fmt::Display + Send + Sync + 'static {
    type Version: Version;

    /// Whether `version` is a member of the range
    fn contains(&self, version: &Self::Version) -> bool;
}

/// Trim `text` and reject it if nothing is left
pub(crate) fn trimmed<'a>(scheme: &'static str, text: &'a str) -> Result<&'a str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::version(scheme, text, "version is empty"));
    }
    Ok(trimmed)
}

/// Split off `+metadata`, returning the part that takes part in comparisons
pub(crate) fn split_metadata(text: &str) -> (&str, Option<&str>) {
    match text.split_once('+') {
        Some((core, metadata)) => (core, Some(metadata)),
        None => (text, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed() {
        assert_eq!(trimmed("npm", "  1.0.0\t").unwrap(), "1.0.0");
        assert!(trimmed("npm", "").is_err());
        assert!(trimmed("npm", " \n ").is_err());
    }

    #[test]
    fn test_split_metadata() {
        assert_eq!(split_metadata("1.0.0+build.5"), ("1.0.0", Some("build.5")));
        assert_eq!(split_metadata("1.0.0"), ("1.0.0", None));
        assert_eq!(split_metadata("1.0.0+a+b"), ("1.0.0", Some("a+b")));
    }
}
