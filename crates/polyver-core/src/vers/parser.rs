//! Splitting VERS text into a scheme and typed constraints

use std::str::FromStr;

use crate::constraint::{Constraint, Operator};
use crate::scheme::Scheme;
use crate::version::Version;
use crate::{Error, Result};

/// What the part after `vers:<scheme>/` stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Constraints<V> {
    /// The lone `*`
    Wildcard,
    List(Vec<Constraint<V>>),
}

/// Split `vers:<scheme>/<constraints>` into the routed scheme and the raw constraint list
pub(crate) fn split_vers(text: &str) -> Result<(Scheme, &str)> {
    let body = text
        .trim()
        .strip_prefix("vers:")
        .ok_or_else(|| Error::range(text, "expected a `vers:` prefix"))?;
    let (scheme, constraints) = body
        .split_once('/')
        .ok_or_else(|| Error::range(text, "expected `/` after the versioning scheme"))?;

    Ok((Scheme::from_str(scheme.trim())?, constraints))
}

/// Parse a `|`-separated constraint list. Any bad segment fails the whole list.
pub(crate) fn parse_constraints<V: Version>(constraints: &str) -> Result<Constraints<V>> {
    let trimmed = constraints.trim();
    if trimmed.is_empty() {
        return Err(Error::semantic(constraints, "the constraint list is empty"));
    }

    let segments: Vec<&str> = trimmed.split('|').map(str::trim).collect();
    if let Some(empty) = segments.iter().position(|segment| segment.is_empty()) {
        return Err(Error::range(
            constraints,
            format!("constraint {} is empty", empty + 1),
        ));
    }
    if segments.contains(&"*") {
        if segments.len() > 1 {
            return Err(Error::semantic(constraints, "`*` must be the only constraint"));
        }
        return Ok(Constraints::Wildcard);
    }

    let parsed = segments
        .into_iter()
        .map(parse_constraint)
        .collect::<Result<Vec<_>>>()?;
    log::trace!("Parsed {} VERS constraints from {:?}", parsed.len(), trimmed);

    Ok(Constraints::List(parsed))
}

fn parse_constraint<V: Version>(segment: &str) -> Result<Constraint<V>> {
    let (operator, literal) = Operator::strip_prefix(segment).ok_or_else(|| {
        Error::range(
            segment,
            format!(
                "expected one of the operators {}",
                Operator::supported_operators().join(" ")
            ),
        )
    })?;
    let literal = literal.trim();
    if literal.is_empty() {
        return Err(Error::range(segment, format!("no version after `{}`", operator)));
    }
    let decoded = urlencoding::decode(literal)
        .map_err(|_| Error::range(segment, "the version is not valid percent-encoded UTF-8"))?;

    Ok(Constraint::new(operator, V::parse(&decoded)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{MavenVersion, SemVersion};
    use crate::ErrorKind;

    fn list(constraints: &str) -> Vec<Constraint<SemVersion>> {
        match parse_constraints(constraints).unwrap() {
            Constraints::List(list) => list,
            Constraints::Wildcard => panic!("unexpected wildcard"),
        }
    }

    #[test]
    fn test_split_vers() {
        assert_eq!(split_vers("vers:npm/>=1.0.0").unwrap(), (Scheme::Npm, ">=1.0.0"));
        assert_eq!(split_vers(" vers:deb/>=1:2.0 ").unwrap(), (Scheme::Debian, ">=1:2.0"));
        assert_eq!(split_vers("vers:maven/").unwrap(), (Scheme::Maven, ""));

        assert_eq!(split_vers("npm/>=1.0.0").unwrap_err().kind(), ErrorKind::Syntax);
        assert_eq!(split_vers("vers:npm").unwrap_err().kind(), ErrorKind::Syntax);
        assert_eq!(split_vers("vers:cobol/>=1").unwrap_err().kind(), ErrorKind::Routing);
        assert_eq!(split_vers("vers:NPM/>=1").unwrap_err().kind(), ErrorKind::Routing);
    }

    #[test]
    fn test_operators_and_whitespace() {
        let constraints = list(" >= 1.0.0 | < 2.0.0|!=1.5.0 | =1.2.3 |<=3.0.0|>0.1.0");
        let operators: Vec<Operator> = constraints.iter().map(|c| c.operator()).collect();
        assert_eq!(
            operators,
            vec![
                Operator::GreaterThanOrEqual,
                Operator::LessThan,
                Operator::NotEqual,
                Operator::Equal,
                Operator::LessThanOrEqual,
                Operator::GreaterThan,
            ]
        );
        assert_eq!(constraints[0].version().to_string(), "1.0.0");
    }

    #[test]
    fn test_percent_decoding() {
        let constraints = list(">=1.0.0%2Bbuild.1");
        assert_eq!(constraints[0].version().build.as_deref(), Some("build.1"));
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(
            parse_constraints::<MavenVersion>(" * ").unwrap(),
            Constraints::Wildcard
        );
        let err = parse_constraints::<MavenVersion>("*|>=1.0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Semantic);
    }

    #[test]
    fn test_errors() {
        let semantic = parse_constraints::<MavenVersion>("  ").unwrap_err();
        assert_eq!(semantic.kind(), ErrorKind::Semantic);

        for constraints in ["1.0.0", ">=", ">=1.0||<2.0", ">=1.0|", "~1.0", "=>1.0", ">= 1.0 2.0"] {
            let err = parse_constraints::<SemVersion>(constraints).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Syntax, "{}", constraints);
        }
    }
}
