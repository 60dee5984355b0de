//! Go module version constraints: `>=v1.2.0 <v2.0.0`, `v1.4.1`, `>=v1.0.0, !=v1.3.0 || >=v3.0.0`

use super::{NativeRange, PrereleasePolicy};
use crate::constraint::{Constraint, ConstraintInterface, MultiConstraint, Operator};
use crate::version::{SemVersion, Version};
use crate::{Error, Result};

pub fn parse(text: &str) -> Result<NativeRange<SemVersion>> {
    if text.trim().is_empty() {
        return Err(Error::range(text, "constraint is empty"));
    }
    let alternatives = text
        .split("||")
        .map(|alternative| parse_list(alternative, text))
        .collect::<Result<Vec<_>>>()?;

    Ok(NativeRange::new(
        text,
        MultiConstraint::create(alternatives, false),
        PrereleasePolicy::Include,
    ))
}

/// Comparators separated by whitespace or commas, all of which must hold
fn parse_list(list: &str, input: &str) -> Result<Box<dyn ConstraintInterface<SemVersion>>> {
    let mut comparators: Vec<Box<dyn ConstraintInterface<SemVersion>>> = Vec::new();
    let mut pending: Option<Operator> = None;
    for token in list.split(|c: char| c == ',' || c.is_whitespace()).filter(|t| !t.is_empty()) {
        // `==` is spelled like `=`
        let token = token
            .strip_prefix('=')
            .filter(|rest| rest.starts_with('='))
            .unwrap_or(token);
        let (operator, version) = match (pending.take(), Operator::strip_prefix(token)) {
            (Some(_), Some(_)) => {
                return Err(Error::range(input, format!("two operators in a row at `{}`", token)));
            }
            (Some(operator), None) => (operator, token),
            (None, Some((operator, ""))) => {
                pending = Some(operator);
                continue;
            }
            (None, Some((operator, version))) => (operator, version),
            (None, None) => (Operator::Equal, token),
        };
        let version = SemVersion::parse(version)?;
        comparators.push(Box::new(Constraint::new(operator, version)));
    }
    if let Some(operator) = pending {
        return Err(Error::range(input, format!("operator `{}` without a version", operator)));
    }
    if comparators.is_empty() {
        return Err(Error::range(input, "empty alternative"));
    }

    Ok(MultiConstraint::create(comparators, true))
}
