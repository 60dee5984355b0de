//! Ecosystem identifiers and the types each one is implemented by

use std::fmt;
use std::str::FromStr;

use crate::native::{self, NativeRange};
use crate::version::{
    DebianVersion, GemVersion, MavenVersion, PypiVersion, SemVersion, Version, VersionRange,
};
use crate::{Error, Result};

/// A versioning scheme, named the way VERS names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheme {
    Maven,
    Pypi,
    Npm,
    Cargo,
    Golang,
    Gem,
    Debian,
}

impl Scheme {
    /// The VERS identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Maven => "maven",
            Scheme::Pypi => "pypi",
            Scheme::Npm => "npm",
            Scheme::Cargo => "cargo",
            Scheme::Golang => "golang",
            Scheme::Gem => "gem",
            Scheme::Debian => "deb",
        }
    }

    pub fn all() -> &'static [Scheme] {
        &[
            Scheme::Maven,
            Scheme::Pypi,
            Scheme::Npm,
            Scheme::Cargo,
            Scheme::Golang,
            Scheme::Gem,
            Scheme::Debian,
        ]
    }
}

impl FromStr for Scheme {
    type Err = Error;

    /// Identifiers are case-sensitive
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "maven" => Ok(Scheme::Maven),
            "pypi" => Ok(Scheme::Pypi),
            "npm" => Ok(Scheme::Npm),
            "cargo" => Ok(Scheme::Cargo),
            "golang" | "go" => Ok(Scheme::Golang),
            "gem" => Ok(Scheme::Gem),
            "deb" | "debian" => Ok(Scheme::Debian),
            _ => Err(Error::UnknownScheme(s.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ties together everything one packaging ecosystem needs: its version type, its native range
/// syntax and its range policies
pub trait Ecosystem: Send + Sync + 'static {
    const SCHEME: Scheme;

    /// Whether ranges leave prereleases out unless one of their own versions is a prerelease
    const IMPLICIT_PRERELEASE_EXCLUSION: bool = false;

    type Version: Version;
    type Range: VersionRange<Version = Self::Version>;

    fn parse_version(text: &str) -> Result<Self::Version> {
        Self::Version::parse(text)
    }

    /// Parse the ecosystem's own range syntax
    fn parse_range(text: &str) -> Result<Self::Range>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Maven;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pypi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Npm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cargo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Golang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Debian;

impl Ecosystem for Maven {
    const SCHEME: Scheme = Scheme::Maven;
    type Version = MavenVersion;
    type Range = NativeRange<MavenVersion>;

    fn parse_range(text: &str) -> Result<Self::Range> {
        native::maven::parse(text)
    }
}

impl Ecosystem for Pypi {
    const SCHEME: Scheme = Scheme::Pypi;
    const IMPLICIT_PRERELEASE_EXCLUSION: bool = true;
    type Version = PypiVersion;
    type Range = NativeRange<PypiVersion>;

    fn parse_range(text: &str) -> Result<Self::Range> {
        native::pypi::parse(text)
    }
}

impl Ecosystem for Npm {
    const SCHEME: Scheme = Scheme::Npm;
    type Version = SemVersion;
    type Range = NativeRange<SemVersion>;

    fn parse_range(text: &str) -> Result<Self::Range> {
        native::npm::parse(text)
    }
}

impl Ecosystem for Cargo {
    const SCHEME: Scheme = Scheme::Cargo;
    type Version = SemVersion;
    type Range = NativeRange<SemVersion>;

    fn parse_range(text: &str) -> Result<Self::Range> {
        native::cargo::parse(text)
    }
}

impl Ecosystem for Golang {
    const SCHEME: Scheme = Scheme::Golang;
    type Version = SemVersion;
    type Range = NativeRange<SemVersion>;

    fn parse_range(text: &str) -> Result<Self::Range> {
        native::golang::parse(text)
    }
}

impl Ecosystem for Gem {
    const SCHEME: Scheme = Scheme::Gem;
    type Version = GemVersion;
    type Range = NativeRange<GemVersion>;

    fn parse_range(text: &str) -> Result<Self::Range> {
        native::gem::parse(text)
    }
}

impl Ecosystem for Debian {
    const SCHEME: Scheme = Scheme::Debian;
    type Version = DebianVersion;
    type Range = NativeRange<DebianVersion>;

    fn parse_range(text: &str) -> Result<Self::Range> {
        native::debian::parse(text)
    }
}

/// Call a function generic over [`Ecosystem`] with the implementation a [`Scheme`] routes to
macro_rules! with_ecosystem {
    ($scheme:expr, $func:ident ( $($arg:expr),* $(,)? )) => {
        match $scheme {
            $crate::scheme::Scheme::Maven => $func::<$crate::scheme::Maven>($($arg),*),
            $crate::scheme::Scheme::Pypi => $func::<$crate::scheme::Pypi>($($arg),*),
            $crate::scheme::Scheme::Npm => $func::<$crate::scheme::Npm>($($arg),*),
            $crate::scheme::Scheme::Cargo => $func::<$crate::scheme::Cargo>($($arg),*),
            $crate::scheme::Scheme::Golang => $func::<$crate::scheme::Golang>($($arg),*),
            $crate::scheme::Scheme::Gem => $func::<$crate::scheme::Gem>($($arg),*),
            $crate::scheme::Scheme::Debian => $func::<$crate::scheme::Debian>($($arg),*),
        }
    };
}

pub(crate) use with_ecosystem;
