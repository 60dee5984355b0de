//! PEP 440 versions

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::{trimmed, Version};
use crate::{Error, Result};

const SCHEME: &str = "pypi";

lazy_static! {
    /// <https://peps.python.org/pep-0440/#appendix-b-parsing-version-strings-with-regular-expressions>
    static ref PEP440_RE: Regex = Regex::new(
        r"(?xi)^
        v?
        (?:(?P<epoch>[0-9]+)!)?
        (?P<release>[0-9]+(?:\.[0-9]+)*)
        (?P<pre_field>
            [-_\.]?
            (?P<pre_l>alpha|a|beta|b|preview|pre|c|rc)
            [-_\.]?
            (?P<pre_n>[0-9]+)?
        )?
        (?P<post_field>
            (?:-(?P<post_n1>[0-9]+))
            |
            (?:
                [-_\.]?
                (?P<post_l>post|rev|r)
                [-_\.]?
                (?P<post_n2>[0-9]+)?
            )
        )?
        (?P<dev_field>
            [-_\.]?
            (?P<dev_l>dev)
            [-_\.]?
            (?P<dev_n>[0-9]+)?
        )?
        (?:\+(?P<local>[a-z0-9]+(?:[-_\.][a-z0-9]+)*))?
        $"
    ).unwrap();
}

/// Alpha, beta or release candidate marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreRelease {
    Alpha,
    Beta,
    Rc,
}

impl FromStr for PreRelease {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "alpha" => Ok(PreRelease::Alpha),
            "b" | "beta" => Ok(PreRelease::Beta),
            "c" | "rc" | "pre" | "preview" => Ok(PreRelease::Rc),
            other => Err(format!("'{}' is not alpha, beta or release candidate", other)),
        }
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreRelease::Alpha => write!(f, "a"),
            PreRelease::Beta => write!(f, "b"),
            PreRelease::Rc => write!(f, "rc"),
        }
    }
}

/// A segment of a local version label such as `ubuntu.1`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocalSegment {
    String(String),
    Number(u64),
}

impl fmt::Display for LocalSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalSegment::String(s) => write!(f, "{}", s),
            LocalSegment::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A version such as `1.2.3`, `1!2.0rc1` or `1.0.post2.dev3+local.7`
#[derive(Debug, Clone)]
pub struct PypiVersion {
    pub(crate) epoch: u64,
    pub(crate) release: Vec<u64>,
    pub(crate) pre: Option<(PreRelease, u64)>,
    pub(crate) post: Option<u64>,
    pub(crate) dev: Option<u64>,
    pub(crate) local: Option<Vec<LocalSegment>>,
}

impl PypiVersion {
    /// A final release with the given epoch and release segment
    pub fn from_release(epoch: u64, release: Vec<u64>) -> Self {
        PypiVersion {
            epoch,
            release,
            pre: None,
            post: None,
            dev: None,
            local: None,
        }
    }

    /// The earliest possible version of this release, `X.Y.dev0`
    pub(crate) fn with_dev0(mut self) -> Self {
        self.dev = Some(0);
        self
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn release(&self) -> &[u64] {
        &self.release
    }

    pub fn is_post(&self) -> bool {
        self.post.is_some()
    }

    pub fn is_local(&self) -> bool {
        self.local.is_some()
    }

    /// Orders the suffixes after an equal release: `.devN < aN < bN < rcN < final < .postN`
    fn suffix_key(&self) -> ((u8, u64), Option<u64>, (u8, u64)) {
        let pre = match (&self.pre, self.post, self.dev) {
            (None, None, Some(_)) => (0, 0),
            (Some((kind, n)), _, _) => (1 + *kind as u8, *n),
            (None, _, _) => (4, 0),
        };
        let dev = match self.dev {
            Some(n) => (0, n),
            None => (1, 0),
        };
        (pre, self.post, dev)
    }
}

/// Compare release segments, padding the shorter one with zeros
pub(crate) fn compare_release(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for index in 0..len {
        let left = a.get(index).copied().unwrap_or(0);
        let right = b.get(index).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

impl Version for PypiVersion {
    fn parse(text: &str) -> Result<Self> {
        let version = trimmed(SCHEME, text)?;
        let caps = PEP440_RE
            .captures(version)
            .ok_or_else(|| Error::version(SCHEME, text, "doesn't match PEP 440 rules"))?;
        let number = |name: &str| -> Result<Option<u64>> {
            caps.name(name)
                .map(|m| {
                    m.as_str()
                        .parse::<u64>()
                        .map_err(|_| Error::version(SCHEME, text, format!("{} is too large", name)))
                })
                .transpose()
        };

        let release = caps["release"]
            .split('.')
            .map(|segment| {
                segment
                    .parse::<u64>()
                    .map_err(|_| Error::version(SCHEME, text, "release segment is too large"))
            })
            .collect::<Result<Vec<u64>>>()?;
        let pre = match caps.name("pre_l") {
            Some(kind) => {
                let kind = PreRelease::from_str(kind.as_str())
                    .map_err(|reason| Error::version(SCHEME, text, reason))?;
                Some((kind, number("pre_n")?.unwrap_or_default()))
            }
            None => None,
        };
        let post = if caps.name("post_field").is_some() {
            Some(number("post_n1")?.or(number("post_n2")?).unwrap_or_default())
        } else {
            None
        };
        let dev = if caps.name("dev_field").is_some() {
            Some(number("dev_n")?.unwrap_or_default())
        } else {
            None
        };
        let local = caps.name("local").map(|local| {
            local
                .as_str()
                .split(['-', '_', '.'])
                .map(|segment| match segment.parse::<u64>() {
                    Ok(number) => LocalSegment::Number(number),
                    Err(_) => LocalSegment::String(segment.to_ascii_lowercase()),
                })
                .collect()
        });

        Ok(PypiVersion {
            epoch: number("epoch")?.unwrap_or_default(),
            release,
            pre,
            post,
            dev,
            local,
        })
    }

    fn is_prerelease(&self) -> bool {
        self.pre.is_some() || self.dev.is_some()
    }
}

impl Ord for PypiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| compare_release(&self.release, &other.release))
            .then_with(|| self.suffix_key().cmp(&other.suffix_key()))
    }
}

impl PartialOrd for PypiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PypiVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PypiVersion {}

/// Renders the normalized form
impl fmt::Display for PypiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}!", self.epoch)?;
        }
        let release: Vec<String> = self.release.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", release.join("."))?;
        if let Some((kind, n)) = &self.pre {
            write!(f, "{}{}", kind, n)?;
        }
        if let Some(post) = self.post {
            write!(f, ".post{}", post)?;
        }
        if let Some(dev) = self.dev {
            write!(f, ".dev{}", dev)?;
        }
        if let Some(local) = &self.local {
            let local: Vec<String> = local.iter().map(|segment| segment.to_string()).collect();
            write!(f, "+{}", local.join("."))?;
        }
        Ok(())
    }
}
