//! Debian package versions, compared the way dpkg compares them

use std::cmp::Ordering;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::{trimmed, Version};
use crate::{Error, Result};

const SCHEME: &str = "deb";

lazy_static! {
    static ref DEBIAN_VERSION_RE: Regex = Regex::new(
        r"^(?:(?P<epoch>[0-9]+):)?(?P<upstream>[0-9](?:[A-Za-z0-9.+~\-]*?[A-Za-z0-9.+~])?)(?:-(?P<revision>[A-Za-z0-9.+~]+))?$"
    )
    .unwrap();
}

/// A version such as `1:2.30-1ubuntu1` or `1.0~rc1`
#[derive(Debug, Clone)]
pub struct DebianVersion {
    original: String,
    epoch: u64,
    upstream: String,
    revision: Option<String>,
}

impl DebianVersion {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }
}

/// Weight of a single character outside a digit run. `~` sorts before everything, even the end.
fn order(c: Option<u8>) -> i32 {
    match c {
        None => 0,
        Some(b'~') => -1,
        Some(c) if c.is_ascii_digit() => 0,
        Some(c) if c.is_ascii_alphabetic() => c as i32,
        Some(c) => c as i32 + 256,
    }
}

/// dpkg's `verrevcmp`
///
/// Alternates non-digit runs compared by [`order`] and digit runs compared numerically.
fn verrevcmp(a: &str, b: &str) -> Ordering {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let (mut i, mut j) = (0, 0);
    let is_digit = |s: &[u8], k: usize| s.get(k).map_or(false, u8::is_ascii_digit);

    while i < a.len() || j < b.len() {
        while (i < a.len() && !is_digit(a, i)) || (j < b.len() && !is_digit(b, j)) {
            let ac = order(a.get(i).copied());
            let bc = order(b.get(j).copied());
            if ac != bc {
                return ac.cmp(&bc);
            }
            i += 1;
            j += 1;
        }
        while a.get(i) == Some(&b'0') {
            i += 1;
        }
        while b.get(j) == Some(&b'0') {
            j += 1;
        }
        let mut first_diff = Ordering::Equal;
        while is_digit(a, i) && is_digit(b, j) {
            if first_diff == Ordering::Equal {
                first_diff = a[i].cmp(&b[j]);
            }
            i += 1;
            j += 1;
        }
        if is_digit(a, i) {
            return Ordering::Greater;
        }
        if is_digit(b, j) {
            return Ordering::Less;
        }
        if first_diff != Ordering::Equal {
            return first_diff;
        }
    }
    Ordering::Equal
}

impl Version for DebianVersion {
    fn parse(text: &str) -> Result<Self> {
        let version = trimmed(SCHEME, text)?;
        let caps = DEBIAN_VERSION_RE.captures(version).ok_or_else(|| {
            let expected = "expected [epoch:]upstream[-revision] starting with a digit";
            Error::version(SCHEME, text, expected)
        })?;
        let epoch = match caps.name("epoch") {
            Some(epoch) => epoch
                .as_str()
                .parse()
                .map_err(|_| Error::version(SCHEME, text, "epoch is too large"))?,
            None => 0,
        };
        Ok(DebianVersion {
            original: version.to_string(),
            epoch,
            upstream: caps["upstream"].to_string(),
            revision: caps.name("revision").map(|r| r.as_str().to_string()),
        })
    }

    fn is_prerelease(&self) -> bool {
        self.upstream.contains('~')
    }

    /// Drops a zero epoch, leading zeros of numbers and a zero revision
    /// where that keeps the meaning
    fn canonical(&self) -> String {
        let mut out = String::new();
        if self.epoch != 0 {
            out.push_str(&format!("{}:", self.epoch));
        }
        out.push_str(&strip_leading_zeros(&self.upstream));
        let revision = self.revision.as_deref().map(strip_leading_zeros);
        match revision {
            // `1.0-beta-0` needs its revision to keep `beta` in the upstream part
            Some(revision) if revision != "0" || self.upstream.contains('-') => {
                out.push('-');
                out.push_str(&revision);
            }
            _ => {}
        }
        out
    }
}

fn strip_leading_zeros(part: &str) -> String {
    let mut out = String::with_capacity(part.len());
    let mut in_number = false;
    let mut skipped_zero = false;
    for c in part.chars() {
        match c {
            '0' if !in_number => skipped_zero = true,
            c if c.is_ascii_digit() => {
                in_number = true;
                skipped_zero = false;
                out.push(c);
            }
            c => {
                if skipped_zero {
                    out.push('0');
                }
                in_number = false;
                skipped_zero = false;
                out.push(c);
            }
        }
    }
    if skipped_zero {
        out.push('0');
    }
    out
}

impl Ord for DebianVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| verrevcmp(&self.upstream, &other.upstream))
            .then_with(|| {
                verrevcmp(
                    self.revision.as_deref().unwrap_or(""),
                    other.revision.as_deref().unwrap_or(""),
                )
            })
    }
}

impl PartialOrd for DebianVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DebianVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DebianVersion {}

impl fmt::Display for DebianVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
