//! Debian relations as written in control files: `>= 1.0, << 2.0`, `(= 1:2.3-1) | (>> 3)`

use lazy_static::lazy_static;
use regex::Regex;

use super::{split_trimmed, NativeRange, PrereleasePolicy};
use crate::constraint::{Constraint, ConstraintInterface, MultiConstraint, Operator};
use crate::version::{DebianVersion, Version};
use crate::{Error, Result};

lazy_static! {
    static ref RELATION_RE: Regex =
        Regex::new(r"^(?P<op>>=|<=|>>|<<|=|<|>)?\s*(?P<version>[^\s()]+)$").unwrap();
}

type Boxed = Box<dyn ConstraintInterface<DebianVersion>>;

/// Commas join relations that must all hold, `|` separates alternatives within one of them
pub fn parse(text: &str) -> Result<NativeRange<DebianVersion>> {
    if text.trim().is_empty() {
        return Err(Error::range(text, "relation is empty"));
    }
    let items = split_trimmed(text, ",")
        .map(|item| {
            let alternatives = split_trimmed(item, "|")
                .map(|relation| parse_relation(relation, text))
                .collect::<Result<Vec<_>>>()?;
            Ok(MultiConstraint::create(alternatives, false))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(NativeRange::new(
        text,
        MultiConstraint::create(items, true),
        PrereleasePolicy::Include,
    ))
}

fn parse_relation(relation: &str, input: &str) -> Result<Boxed> {
    let inner = match (relation.strip_prefix('('), relation.ends_with(')')) {
        (Some(rest), true) => rest[..rest.len() - 1].trim(),
        (None, false) => relation,
        _ => return Err(Error::range(input, format!("unbalanced parentheses in `{}`", relation))),
    };
    let caps = RELATION_RE
        .captures(inner)
        .ok_or_else(|| Error::range(input, format!("`{}` is not a relation", relation)))?;
    let operator = match caps.name("op").map(|m| m.as_str()) {
        None | Some("=") => Operator::Equal,
        Some(">>") => Operator::GreaterThan,
        Some("<<") => Operator::LessThan,
        // the deprecated `<` and `>` mean `<=` and `>=`
        Some(">=") | Some(">") => Operator::GreaterThanOrEqual,
        Some("<=") | Some("<") => Operator::LessThanOrEqual,
        Some(op) => return Err(Error::range(input, format!("unknown relation `{}`", op))),
    };
    let version = DebianVersion::parse(&caps["version"])?;

    Ok(Box::new(Constraint::new(operator, version)))
}
