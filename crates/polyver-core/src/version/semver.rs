//! Semantic versions as used by npm, Cargo and Go modules

use std::cmp::Ordering;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::{trimmed, Version};
use crate::{Error, Result};

const SCHEME: &str = "semver";

lazy_static! {
    static ref SEMVER_RE: Regex = Regex::new(
        r"^[vV]?(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)(?:-(?P<pre>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ).unwrap();
}

/// A dot-separated prerelease identifier. Numeric identifiers sort before alphanumeric ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(part: &str) -> Self {
        if part.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(number) = part.parse() {
                return Identifier::Numeric(number);
            }
        }
        Identifier::AlphaNumeric(part.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// A `major.minor.patch[-prerelease][+build]` version
#[derive(Debug, Clone)]
pub struct SemVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Vec<Identifier>,
    pub build: Option<String>,
    original: String,
}

impl SemVersion {
    /// A release version with no prerelease or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::with_pre(major, minor, patch, Vec::new())
    }

    /// The lowest version of `major.minor.patch`, i.e. with prerelease `0`
    pub fn lowest(major: u64, minor: u64, patch: u64) -> Self {
        Self::with_pre(major, minor, patch, vec![Identifier::Numeric(0)])
    }

    fn with_pre(major: u64, minor: u64, patch: u64, pre: Vec<Identifier>) -> Self {
        let mut version = SemVersion {
            major,
            minor,
            patch,
            pre,
            build: None,
            original: String::new(),
        };
        version.original = version.canonical();
        version
    }

    /// Whether both versions share `major.minor.patch`
    pub fn same_release(&self, other: &SemVersion) -> bool {
        (self.major, self.minor, self.patch) == (other.major, other.minor, other.patch)
    }
}

impl Version for SemVersion {
    fn parse(text: &str) -> Result<Self> {
        let version = trimmed(SCHEME, text)?;
        let caps = SEMVER_RE
            .captures(version)
            .ok_or_else(|| {
                Error::version(SCHEME, text, "expected major.minor.patch[-pre][+build]")
            })?;
        let number = |name: &str| -> Result<u64> {
            caps[name]
                .parse()
                .map_err(|_| Error::version(SCHEME, text, format!("{} is too large", name)))
        };
        Ok(SemVersion {
            major: number("major")?,
            minor: number("minor")?,
            patch: number("patch")?,
            pre: caps
                .name("pre")
                .map(|pre| pre.as_str().split('.').map(Identifier::parse).collect())
                .unwrap_or_default(),
            build: caps.name("build").map(|build| build.as_str().to_string()),
            original: version.to_string(),
        })
    }

    fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// `major.minor.patch[-pre][+build]` without any `v` prefix
    fn canonical(&self) -> String {
        let mut out = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if !self.pre.is_empty() {
            let pre: Vec<String> = self.pre.iter().map(|p| p.to_string()).collect();
            out.push('-');
            out.push_str(&pre.join("."));
        }
        if let Some(build) = &self.build {
            out.push('+');
            out.push_str(build);
        }
        out
    }
}

impl Ord for SemVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl PartialOrd for SemVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SemVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemVersion {}

impl fmt::Display for SemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> SemVersion {
        SemVersion::parse(s).unwrap()
    }

    #[test]
    fn test_parse() {
        let version = v("1.2.3-alpha.1+build.5");
        assert_eq!((version.major, version.minor, version.patch), (1, 2, 3));
        assert_eq!(
            version.pre,
            vec![
                Identifier::AlphaNumeric("alpha".into()),
                Identifier::Numeric(1)
            ]
        );
        assert_eq!(version.build.as_deref(), Some("build.5"));
        assert_eq!(v("v1.2.3").canonical(), "1.2.3");
        assert_eq!(v("v1.2.3").to_string(), "v1.2.3");
    }

    #[test]
    fn test_precedence() {
        // https://semver.org/#spec-item-11
        let ordered = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "1.0.1",
            "1.1.0",
            "2.0.0",
        ];
        for window in ordered.windows(2) {
            assert!(v(window[0]) < v(window[1]), "{} < {}", window[0], window[1]);
        }
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert_eq!(v("1.0.0+x"), v("1.0.0+y"));
        assert_eq!(v("1.0.0+x").cmp(&v("1.0.0+y")), Ordering::Equal);
        assert_eq!(v("1.0.0+x").to_string(), "1.0.0+x");
    }

    #[test]
    fn test_lowest() {
        assert!(SemVersion::lowest(1, 0, 0) < v("1.0.0-alpha"));
        assert_eq!(SemVersion::lowest(1, 0, 0).to_string(), "1.0.0-0");
    }

    #[test]
    fn test_invalid() {
        for input in ["", "1", "1.2", "1.2.3.4", "a.b.c", "1.2.3-", "1.2.3+", "1.2.3-a..b"] {
            assert!(SemVersion::parse(input).is_err(), "{}", input);
        }
    }
}
