//! Polyver facade providing high-level version operations over version text

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::scheme::{with_ecosystem, Ecosystem, Scheme};
use crate::vers::{split_vers, VersRange};
use crate::version::{Version, VersionRange};
use crate::{Comparator, Result};

/// Main facade: every operation takes and returns text, routed by [`Scheme`]
pub struct Polyver;

impl Polyver {
    /// Parse a version and return its canonical rendering
    pub fn parse_version(scheme: Scheme, text: &str) -> Result<String> {
        with_ecosystem!(scheme, canonical_in(text))
    }

    /// Compare two versions: -1, 0 or 1
    pub fn compare(scheme: Scheme, version1: &str, version2: &str) -> Result<i8> {
        Ok(match Comparator::order(scheme, version1, version2)? {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }

    /// Check if a version lies in a VERS range, routed by the range's own scheme
    pub fn contains(vers: &str, version: &str) -> Result<bool> {
        let (scheme, _) = split_vers(vers)?;
        Self::contains_in(scheme, vers, version)
    }

    /// Check if a version lies in a VERS range or a range in the ecosystem's native syntax
    pub fn contains_in(scheme: Scheme, range: &str, version: &str) -> Result<bool> {
        Self::parse_range(scheme, range)?.contains(version)
    }

    /// Parse a VERS range (`vers:` prefix) or a native range and return a reusable representation
    pub fn parse_range(scheme: Scheme, text: &str) -> Result<AnyRange> {
        with_ecosystem!(scheme, parse_any(text))
    }

    /// Return all versions that lie in the range, in input order
    pub fn satisfied_by(range: &AnyRange, versions: &[&str]) -> Result<Vec<String>> {
        let mut satisfied = Vec::new();
        for version in versions {
            if range.contains(version)? {
                satisfied.push(version.to_string());
            }
        }
        Ok(satisfied)
    }

    /// Sort versions in ascending order. Equal versions keep their input order.
    pub fn sort(scheme: Scheme, versions: &[&str]) -> Result<Vec<String>> {
        with_ecosystem!(scheme, usort(versions, true))
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(scheme: Scheme, versions: &[&str]) -> Result<Vec<String>> {
        with_ecosystem!(scheme, usort(versions, false))
    }

    /// The canonical rendering of a VERS range
    pub fn normalize(vers: &str) -> Result<String> {
        let (scheme, _) = split_vers(vers)?;
        with_ecosystem!(scheme, normalize_in(vers))
    }
}

fn canonical_in<E: Ecosystem>(text: &str) -> Result<String> {
    Ok(E::parse_version(text)?.canonical())
}

fn parse_any<E: Ecosystem>(text: &str) -> Result<AnyRange> {
    if text.trim_start().starts_with("vers:") {
        Ok(AnyRange::new::<E, _>(VersRange::<E>::parse(text)?))
    } else {
        Ok(AnyRange::new::<E, _>(E::parse_range(text)?))
    }
}

fn usort<E: Ecosystem>(versions: &[&str], ascending: bool) -> Result<Vec<String>> {
    let mut parsed = versions
        .iter()
        .map(|text| Ok((E::parse_version(text)?, *text)))
        .collect::<Result<Vec<_>>>()?;

    parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

    Ok(parsed.into_iter().map(|(_, text)| text.to_string()).collect())
}

fn normalize_in<E: Ecosystem>(vers: &str) -> Result<String> {
    Ok(VersRange::<E>::parse(vers)?.to_string())
}

/// Object-safe view of a range together with the ecosystem that parses its candidates
trait DynRange: fmt::Debug + fmt::Display + Send + Sync {
    fn scheme(&self) -> Scheme;

    fn contains_text(&self, version: &str) -> Result<bool>;
}

struct Typed<E, R> {
    range: R,
    marker: PhantomData<fn() -> E>,
}

impl<E: Ecosystem, R: VersionRange<Version = E::Version>> DynRange for Typed<E, R> {
    fn scheme(&self) -> Scheme {
        E::SCHEME
    }

    fn contains_text(&self, version: &str) -> Result<bool> {
        let version = E::parse_version(version)?;
        Ok(self.range.contains(&version))
    }
}

impl<E, R: fmt::Debug> fmt::Debug for Typed<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.range, f)
    }
}

impl<E, R: fmt::Display> fmt::Display for Typed<E, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.range, f)
    }
}

/// A parsed range of any ecosystem that checks version text directly
#[derive(Debug)]
pub struct AnyRange {
    inner: Box<dyn DynRange>,
}

impl AnyRange {
    fn new<E: Ecosystem, R: VersionRange<Version = E::Version>>(range: R) -> Self {
        AnyRange {
            inner: Box::new(Typed::<E, R> {
                range,
                marker: PhantomData,
            }),
        }
    }

    pub fn scheme(&self) -> Scheme {
        self.inner.scheme()
    }

    /// Parse `version` in the range's ecosystem and check membership
    pub fn contains(&self, version: &str) -> Result<bool> {
        self.inner.contains_text(version)
    }
}

impl fmt::Display for AnyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
