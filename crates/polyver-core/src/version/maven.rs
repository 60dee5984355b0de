//! Maven versions, ordered the way Maven's qualifier-aware comparison orders them

use std::cmp::Ordering;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::{split_metadata, trimmed, Version};
use crate::{Error, Result};

const SCHEME: &str = "maven";

/// Known qualifiers that sort before a release, lowest first
const PRERELEASE_QUALIFIERS: &[&str] = &["alpha", "beta", "milestone", "rc", "snapshot"];

const SERVICE_PACK: &str = "sp";

lazy_static! {
    static ref MAVEN_VERSION_RE: Regex =
        Regex::new(r"^(?P<core>[0-9A-Za-z.\-]+)(?:\+(?P<build>[0-9A-Za-z.\-_+]*))?$").unwrap();
}

/// One position of a tokenized Maven version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    Number(u64),
    /// Lowercased qualifier with shortcuts expanded. The empty string denotes a release.
    Qualifier(String),
}

/// Where an item sits in the single-position order. Declaration order is the sort order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Rank<'a> {
    PreRelease(usize),
    Null,
    Number(u64),
    ServicePack,
    Unknown(&'a str),
}

impl Item {
    fn from_qualifier(token: &str, followed_by_digit: bool) -> Self {
        let lower = token.to_ascii_lowercase();
        let expanded = match lower.as_str() {
            "a" if followed_by_digit => "alpha",
            "b" if followed_by_digit => "beta",
            "m" if followed_by_digit => "milestone",
            "cr" => "rc",
            "ga" | "final" | "release" => "",
            other => other,
        };
        Item::Qualifier(expanded.to_string())
    }

    /// Zero, the empty qualifier and release aliases all behave like a missing position
    pub fn is_null(&self) -> bool {
        match self {
            Item::Number(n) => *n == 0,
            Item::Qualifier(q) => q.is_empty(),
        }
    }

    fn rank(&self) -> Rank<'_> {
        match self {
            Item::Number(0) => Rank::Null,
            Item::Number(n) => Rank::Number(*n),
            Item::Qualifier(q) if q.is_empty() => Rank::Null,
            Item::Qualifier(q) if q == SERVICE_PACK => Rank::ServicePack,
            Item::Qualifier(q) => {
                match PRERELEASE_QUALIFIERS.iter().position(|known| *known == q.as_str()) {
                    Some(index) => Rank::PreRelease(index),
                    None => Rank::Unknown(q.as_str()),
                }
            }
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Number(n) => write!(f, "{}", n),
            Item::Qualifier(q) if q.is_empty() => write!(f, "ga"),
            Item::Qualifier(q) => write!(f, "{}", q),
        }
    }
}

fn compare_items(a: Option<&Item>, b: Option<&Item>) -> Ordering {
    fn rank(item: Option<&Item>) -> Rank<'_> {
        item.map_or(Rank::Null, Item::rank)
    }
    rank(a).cmp(&rank(b))
}

/// A Maven version such as `1.0`, `2.3.1-SNAPSHOT` or `1.0-beta-2`
#[derive(Debug, Clone)]
pub struct MavenVersion {
    original: String,
    items: Vec<Item>,
}

impl MavenVersion {
    /// The tokenized form with trailing nulls removed
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

fn tokenize(core: &str, input: &str) -> Result<Vec<Item>> {
    let chars: Vec<char> = core.chars().collect();
    let mut items = Vec::new();
    let mut start = 0;

    let flush = |start: usize, end: usize, items: &mut Vec<Item>| -> Result<()> {
        let token: String = chars[start..end].iter().collect();
        if token.is_empty() {
            items.push(Item::Number(0));
        } else if token.starts_with(|c: char| c.is_ascii_digit()) {
            let number = token
                .parse::<u64>()
                .map_err(|_| {
                    Error::version(SCHEME, input, format!("number `{}` is too large", token))
                })?;
            items.push(Item::Number(number));
        } else {
            let followed_by_digit = chars.get(end).map_or(false, |c| c.is_ascii_digit());
            items.push(Item::from_qualifier(&token, followed_by_digit));
        }
        Ok(())
    };

    for (index, c) in chars.iter().enumerate() {
        if *c == '.' || *c == '-' {
            flush(start, index, &mut items)?;
            start = index + 1;
        } else if index > start && chars[index - 1].is_ascii_digit() != c.is_ascii_digit() {
            flush(start, index, &mut items)?;
            start = index;
        }
    }
    flush(start, chars.len(), &mut items)?;

    while items.last().map_or(false, Item::is_null) {
        items.pop();
    }
    Ok(items)
}

impl Version for MavenVersion {
    fn parse(text: &str) -> Result<Self> {
        let version = trimmed(SCHEME, text)?;
        if !MAVEN_VERSION_RE.is_match(version) {
            return Err(Error::version(
                SCHEME,
                text,
                "contains characters Maven versions don't use",
            ));
        }
        let (core, _) = split_metadata(version);
        if !core.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::version(SCHEME, text, "no digits or letters"));
        }
        Ok(MavenVersion {
            original: version.to_string(),
            items: tokenize(core, text)?,
        })
    }

    fn is_prerelease(&self) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item.rank(), Rank::PreRelease(_)))
    }

    /// A normalized rendering in which equal versions render identically
    fn canonical(&self) -> String {
        let mut out = String::new();
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                out.push(if matches!(item, Item::Qualifier(_)) { '-' } else { '.' });
            }
            out.push_str(&item.to_string());
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.items.len().max(other.items.len());
        for index in 0..len {
            match compare_items(self.items.get(index), other.items.get(index)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MavenVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MavenVersion {}

impl fmt::Display for MavenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
