//! RubyGems versions

use std::cmp::Ordering;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::{trimmed, Version};
use crate::{Error, Result};

const SCHEME: &str = "gem";

lazy_static! {
    static ref GEM_VERSION_RE: Regex =
        Regex::new(r"^[0-9]+(?:\.[0-9a-zA-Z]+)*(?:-[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*)?$").unwrap();
    static ref SEGMENT_RE: Regex = Regex::new(r"[0-9]+|[a-zA-Z]+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    Number(u64),
    Text(String),
}

impl Segment {
    fn is_number(&self) -> bool {
        matches!(self, Segment::Number(_))
    }
}

/// Strings sort below numbers, numbers numerically, strings lexicographically
fn compare_segments(a: &Segment, b: &Segment) -> Ordering {
    match (a, b) {
        (Segment::Number(x), Segment::Number(y)) => x.cmp(y),
        (Segment::Text(x), Segment::Text(y)) => x.cmp(y),
        (Segment::Number(_), Segment::Text(_)) => Ordering::Greater,
        (Segment::Text(_), Segment::Number(_)) => Ordering::Less,
    }
}

/// A gem version such as `1.2.3`, `2.0.0.rc1` or `1.0.0-beta.2`
#[derive(Debug, Clone)]
pub struct GemVersion {
    original: String,
    segments: Vec<Segment>,
}

impl GemVersion {
    /// Segments with trailing zeros removed from the release part and from the prerelease part
    fn canonical_segments(&self) -> Vec<Segment> {
        let split = self
            .segments
            .iter()
            .position(|segment| !segment.is_number())
            .unwrap_or(self.segments.len());
        let (release, pre) = self.segments.split_at(split);

        let mut out = Vec::with_capacity(self.segments.len());
        for part in [release, pre] {
            let keep = part
                .iter()
                .rposition(|segment| *segment != Segment::Number(0))
                .map_or(0, |index| index + 1);
            out.extend_from_slice(&part[..keep]);
        }
        out
    }

    fn from_numbers(numbers: Vec<u64>) -> Self {
        let original = numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(".");
        GemVersion {
            original,
            segments: numbers.into_iter().map(Segment::Number).collect(),
        }
    }

    /// The release this version leads up to: everything before the first letter segment
    pub fn release(&self) -> GemVersion {
        if !self.is_prerelease() {
            return self.clone();
        }
        let numbers = self
            .segments
            .iter()
            .map_while(|segment| match segment {
                Segment::Number(n) => Some(*n),
                Segment::Text(_) => None,
            })
            .collect();
        Self::from_numbers(numbers)
    }

    /// The exclusive upper limit of `~> self`: drop the last release segment and bump the new last
    pub fn bump(&self) -> GemVersion {
        let mut numbers: Vec<u64> = self
            .segments
            .iter()
            .map_while(|segment| match segment {
                Segment::Number(n) => Some(*n),
                Segment::Text(_) => None,
            })
            .collect();
        if numbers.len() > 1 {
            numbers.pop();
        }
        if let Some(last) = numbers.last_mut() {
            *last = last.saturating_add(1);
        }
        Self::from_numbers(numbers)
    }
}

impl Version for GemVersion {
    fn parse(text: &str) -> Result<Self> {
        let version = trimmed(SCHEME, text)?;
        if !GEM_VERSION_RE.is_match(version) {
            return Err(Error::version(SCHEME, text, "malformed version number string"));
        }
        // `1.0-beta` is shorthand for `1.0.pre.beta`
        let expanded = version.replace('-', ".pre.");
        let segments = SEGMENT_RE
            .find_iter(&expanded)
            .map(|m| {
                let token = m.as_str();
                if token.starts_with(|c: char| c.is_ascii_digit()) {
                    token
                        .parse::<u64>()
                        .map(Segment::Number)
                        .map_err(|_| {
                            let reason = format!("segment `{}` is too large", token);
                            Error::version(SCHEME, text, reason)
                        })
                } else {
                    Ok(Segment::Text(token.to_string()))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GemVersion {
            original: version.to_string(),
            segments,
        })
    }

    fn is_prerelease(&self) -> bool {
        self.segments.iter().any(|segment| !segment.is_number())
    }

    /// The canonical rendering, e.g. `1.0.0.a.0` renders as `1.a`
    fn canonical(&self) -> String {
        let mut segments = self.canonical_segments();
        // a version must start with a number
        if !segments.first().map_or(false, Segment::is_number) {
            segments.insert(0, Segment::Number(0));
        }
        segments
            .iter()
            .map(|segment| match segment {
                Segment::Number(n) => n.to_string(),
                Segment::Text(s) => s.clone(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Ord for GemVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.canonical_segments();
        let rhs = other.canonical_segments();
        let zero = Segment::Number(0);
        let len = lhs.len().max(rhs.len());
        for index in 0..len {
            let a = lhs.get(index).unwrap_or(&zero);
            let b = rhs.get(index).unwrap_or(&zero);
            match compare_segments(a, b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for GemVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GemVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GemVersion {}

impl fmt::Display for GemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
