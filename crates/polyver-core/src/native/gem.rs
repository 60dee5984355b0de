//! RubyGems requirements: `~> 1.2`, `>= 1.0, < 3`, `!= 2.1.0`

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::{split_trimmed, NativeRange, PrereleasePolicy};
use crate::constraint::{Constraint, ConstraintInterface, MultiConstraint, Operator};
use crate::version::{GemVersion, Version};
use crate::{Error, Result};

lazy_static! {
    static ref REQUIREMENT_RE: Regex =
        Regex::new(r"^(?P<op>~>|>=|<=|!=|=|>|<)?\s*(?P<version>\S+)$").unwrap();
}

/// `~> 1.2.3`: at least the operand, and below the next bumped release (`1.3`)
#[derive(Debug, Clone)]
pub struct Pessimistic {
    version: GemVersion,
    limit: GemVersion,
}

impl Pessimistic {
    pub fn new(version: GemVersion) -> Self {
        let limit = version.bump();
        Pessimistic { version, limit }
    }

    pub fn version(&self) -> &GemVersion {
        &self.version
    }
}

impl ConstraintInterface<GemVersion> for Pessimistic {
    fn matches(&self, candidate: &GemVersion) -> bool {
        *candidate >= self.version && candidate.release() < self.limit
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface<GemVersion>> {
        Box::new(self.clone())
    }

    fn literals(&self) -> Vec<&GemVersion> {
        vec![&self.version]
    }
}

impl fmt::Display for Pessimistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~>{}", self.version)
    }
}

/// Parse a comma-separated list of requirements, all of which must hold.
/// A bare version means `=`.
pub fn parse(text: &str) -> Result<NativeRange<GemVersion>> {
    if text.trim().is_empty() {
        return Err(Error::range(text, "requirement is empty"));
    }
    let requirements = split_trimmed(text, ",")
        .map(|requirement| parse_requirement(requirement, text))
        .collect::<Result<Vec<_>>>()?;

    Ok(NativeRange::new(
        text,
        MultiConstraint::create(requirements, true),
        PrereleasePolicy::Include,
    ))
}

fn parse_requirement(
    requirement: &str,
    input: &str,
) -> Result<Box<dyn ConstraintInterface<GemVersion>>> {
    let caps = REQUIREMENT_RE
        .captures(requirement)
        .ok_or_else(|| Error::range(input, format!("`{}` is not a requirement", requirement)))?;
    let version = GemVersion::parse(&caps["version"])?;

    Ok(match caps.name("op").map(|m| m.as_str()) {
        Some("~>") => Box::new(Pessimistic::new(version)),
        None => Box::new(Constraint::new(Operator::Equal, version)),
        Some(op) => {
            let operator = op
                .parse::<Operator>()
                .map_err(|e| Error::range(input, e.to_string()))?;
            Box::new(Constraint::new(operator, version))
        }
    })
}
