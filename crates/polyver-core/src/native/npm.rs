//! node-semver ranges: `^1.2.3 || ~2.0`, `>=1.0.0 <2.0.0`, `1.x`, `1.2 - 2.3.4`

use lazy_static::lazy_static;
use regex::Regex;

use super::partial::{self, Flavor, Partial};
use super::{NativeRange, PrereleasePolicy};
use crate::constraint::{ConstraintInterface, MultiConstraint, Operator};
use crate::version::SemVersion;
use crate::{Error, Result};

lazy_static! {
    static ref HYPHEN_RE: Regex = Regex::new(r"^(?P<from>\S+)\s+-\s+(?P<to>\S+)$").unwrap();
    static ref COMPARATOR_RE: Regex =
        Regex::new(r"^(?P<op><=|>=|<|>|=|~>|~|\^)?(?P<version>[^<>=~^]*)$").unwrap();
}

/// Parse a range. The empty range is `*`.
pub fn parse(text: &str) -> Result<NativeRange<SemVersion>> {
    let sets = text
        .split("||")
        .map(|set| parse_set(set.trim(), text))
        .collect::<Result<Vec<_>>>()?;

    Ok(NativeRange::new(
        text,
        MultiConstraint::create(sets, false),
        PrereleasePolicy::SameRelease(SemVersion::same_release),
    ))
}

/// One comparator set: comparators that must all hold
fn parse_set(set: &str, input: &str) -> Result<Box<dyn ConstraintInterface<SemVersion>>> {
    if let Some(caps) = HYPHEN_RE.captures(set) {
        let from = Partial::parse(&caps["from"], input)?;
        let to = Partial::parse(&caps["to"], input)?;
        return Ok(partial::hyphen(&from, &to, Flavor::Npm));
    }

    let mut comparators = Vec::new();
    let mut pending = String::new();
    for token in set.split_whitespace() {
        pending.push_str(token);
        // `>= 1.2.3` is one comparator
        if token.chars().all(|c| matches!(c, '<' | '>' | '=' | '~' | '^')) {
            continue;
        }
        comparators.push(parse_comparator(&pending, input)?);
        pending.clear();
    }
    if !pending.is_empty() {
        return Err(Error::range(input, format!("operator `{}` without a version", pending)));
    }

    Ok(MultiConstraint::create(comparators, true))
}

fn parse_comparator(token: &str, input: &str) -> Result<Box<dyn ConstraintInterface<SemVersion>>> {
    let caps = COMPARATOR_RE
        .captures(token)
        .ok_or_else(|| Error::range(input, format!("`{}` is not a comparator", token)))?;
    let version = Partial::parse(&caps["version"], input)?;

    Ok(match caps.name("op").map(|m| m.as_str()) {
        None | Some("=") => partial::x_range(&version, Flavor::Npm),
        Some("~") | Some("~>") => partial::tilde(&version, Flavor::Npm),
        Some("^") => partial::caret(&version, Flavor::Npm),
        Some(op) => {
            let operator = op
                .parse::<Operator>()
                .map_err(|e| Error::range(input, e.to_string()))?;
            partial::primitive(operator, &version, Flavor::Npm)
        }
    })
}
