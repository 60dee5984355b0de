//! Maven version ranges: `1.0`, `[1.0]`, `[1.0,2.0)`, `(,1.0],[1.2,)`

use super::{NativeRange, PrereleasePolicy};
use crate::constraint::{Constraint, ConstraintInterface, MultiConstraint, Operator};
use crate::version::{MavenVersion, Version};
use crate::{Error, Result};

pub fn parse(text: &str) -> Result<NativeRange<MavenVersion>> {
    let spec = text.trim();
    if spec.is_empty() {
        return Err(Error::range(text, "range is empty"));
    }

    // A bare version is a soft requirement, which for membership means exactly that version
    if !spec.starts_with(['[', '(']) {
        let version = MavenVersion::parse(spec)?;
        let constraint = Box::new(Constraint::new(Operator::Equal, version));
        return Ok(NativeRange::new(text, constraint, PrereleasePolicy::Include));
    }

    let mut alternatives: Vec<Box<dyn ConstraintInterface<MavenVersion>>> = Vec::new();
    let mut rest = spec;
    loop {
        let close = rest
            .find([']', ')'])
            .ok_or_else(|| Error::range(text, "unbalanced brackets"))?;
        let (restriction, tail) = rest.split_at(close + 1);
        alternatives.push(parse_restriction(restriction, text)?);

        let tail = tail.trim_start();
        if tail.is_empty() {
            break;
        }
        rest = tail
            .strip_prefix(',')
            .map(str::trim_start)
            .filter(|next| next.starts_with(['[', '(']))
            .ok_or_else(|| {
                Error::range(text, format!("unexpected `{}` between restrictions", tail))
            })?;
    }

    Ok(NativeRange::new(
        text,
        MultiConstraint::create(alternatives, false),
        PrereleasePolicy::Include,
    ))
}

/// One bracketed restriction such as `[1.0,2.0)`
fn parse_restriction(
    restriction: &str,
    input: &str,
) -> Result<Box<dyn ConstraintInterface<MavenVersion>>> {
    let lower_inclusive = restriction.starts_with('[');
    let upper_inclusive = restriction.ends_with(']');
    let inner = &restriction[1..restriction.len() - 1];
    if inner.contains(['[', '(']) {
        return Err(Error::range(input, "unbalanced brackets"));
    }

    let Some((lower, upper)) = inner.split_once(',') else {
        // [1.0] pins exactly one version
        if !(lower_inclusive && upper_inclusive) {
            let reason = format!("single version restriction `{}` must use []", restriction);
            return Err(Error::range(input, reason));
        }
        let version = MavenVersion::parse(inner)?;
        return Ok(Box::new(Constraint::new(Operator::Equal, version)));
    };
    if upper.contains(',') {
        return Err(Error::range(input, format!("too many commas in `{}`", restriction)));
    }

    let (lower, upper) = (lower.trim(), upper.trim());
    if lower.is_empty() && lower_inclusive {
        return Err(Error::range(input, "an unbounded lower end must be written with `(`"));
    }
    if upper.is_empty() && upper_inclusive {
        return Err(Error::range(input, "an unbounded upper end must be written with `)`"));
    }
    let lower = (!lower.is_empty()).then(|| MavenVersion::parse(lower)).transpose()?;
    let upper = (!upper.is_empty()).then(|| MavenVersion::parse(upper)).transpose()?;
    if let (Some(low), Some(high)) = (&lower, &upper) {
        if low > high {
            let reason = format!("lower bound above upper bound in `{}`", restriction);
            return Err(Error::range(input, reason));
        }
    }

    let mut parts: Vec<Box<dyn ConstraintInterface<MavenVersion>>> = Vec::new();
    if let Some(version) = lower {
        let operator = if lower_inclusive {
            Operator::GreaterThanOrEqual
        } else {
            Operator::GreaterThan
        };
        parts.push(Box::new(Constraint::new(operator, version)));
    }
    if let Some(version) = upper {
        let operator = if upper_inclusive {
            Operator::LessThanOrEqual
        } else {
            Operator::LessThan
        };
        parts.push(Box::new(Constraint::new(operator, version)));
    }

    Ok(MultiConstraint::create(parts, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::VersionRange;
    use crate::ErrorKind;

    fn contains(range: &str, version: &str) -> bool {
        parse(range)
            .unwrap()
            .contains(&MavenVersion::parse(version).unwrap())
    }

    #[test]
    fn test_soft_requirement() {
        assert!(contains("1.0", "1.0.0"));
        assert!(!contains("1.0", "1.1"));
    }

    #[test]
    fn test_restrictions() {
        assert!(contains("[1.0,2.0)", "1.0"));
        assert!(contains("[1.0,2.0)", "1.9.9"));
        assert!(!contains("[1.0,2.0)", "2.0"));
        assert!(contains("[1.0,2.0)", "2.0-SNAPSHOT"));
        assert!(!contains("(1.0,2.0]", "1.0"));
        assert!(contains("(1.0,2.0]", "2.0"));
        assert!(contains("[1.5,)", "99"));
        assert!(contains("(,1.0]", "0.1"));
        assert!(contains("[1.0]", "1.0.0-ga"));
        assert!(!contains("[1.0]", "1.0.1"));
    }

    #[test]
    fn test_union() {
        let range = "(,1.0],[1.2,)";
        assert!(contains(range, "0.9"));
        assert!(!contains(range, "1.1"));
        assert!(contains(range, "1.2"));
        assert!(contains("[1.0,1.1], [1.3,1.4]", "1.3.5"));
        assert_eq!(parse(" [1.0,2.0) ").unwrap().to_string(), "[1.0,2.0)");
    }

    #[test]
    fn test_invalid() {
        for range in [
            "",
            "[1.0,2.0",
            "1.0,2.0)",
            "(1.0)",
            "[1.0,2.0),",
            "[2.0,1.0]",
            "[1.0,2.0,3.0]",
            "[,1.0]",
            "[1.0,2.0) x",
        ] {
            let err = parse(range).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Syntax, "{}", range);
        }
    }
}
