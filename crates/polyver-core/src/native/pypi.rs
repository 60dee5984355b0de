//! PEP 440 version specifiers: `>=1.0, !=1.3.*, <2`, `~=2.2.1`, `===foobar`

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::{split_trimmed, NativeRange, PrereleasePolicy};
use crate::constraint::{Constraint, ConstraintInterface, MultiConstraint, Operator};
use crate::version::{compare_release, PypiVersion, Version};
use crate::{Error, Result};

lazy_static! {
    static ref SPECIFIER_RE: Regex =
        Regex::new(r"^(?P<op>~=|===|==|!=|<=|>=|<|>)\s*(?P<version>[^\s,;]+)$").unwrap();
}

type Boxed = Box<dyn ConstraintInterface<PypiVersion>>;

/// Specifier clauses whose matching goes beyond a plain comparison
#[derive(Debug, Clone)]
pub enum Specifier {
    /// `==V`: a local label on the operand must match too;
    /// one on the candidate is ignored otherwise
    Equal(PypiVersion),
    NotEqual(PypiVersion),
    /// `<V` never admits prereleases of V's own release unless V is one
    LessThan(PypiVersion),
    /// `>V` never admits post-releases of V unless V is one, nor local versions of V's release
    GreaterThan(PypiVersion),
    /// `===text`: string equality, without any version semantics
    Arbitrary {
        text: String,
        version: Option<PypiVersion>,
    },
}

fn same_base(a: &PypiVersion, b: &PypiVersion) -> bool {
    a.epoch() == b.epoch() && compare_release(a.release(), b.release()).is_eq()
}

fn equals(operand: &PypiVersion, candidate: &PypiVersion) -> bool {
    if operand.is_local() {
        candidate == operand && candidate.local == operand.local
    } else {
        candidate == operand
    }
}

impl ConstraintInterface<PypiVersion> for Specifier {
    fn matches(&self, candidate: &PypiVersion) -> bool {
        match self {
            Specifier::Equal(operand) => equals(operand, candidate),
            Specifier::NotEqual(operand) => !equals(operand, candidate),
            Specifier::LessThan(operand) => {
                candidate < operand
                    && (operand.is_prerelease()
                        || !candidate.is_prerelease()
                        || !same_base(candidate, operand))
            }
            Specifier::GreaterThan(operand) => {
                candidate > operand
                    && (operand.is_post() || !candidate.is_post() || !same_base(candidate, operand))
                    && !(candidate.is_local() && same_base(candidate, operand))
            }
            Specifier::Arbitrary { text, .. } => candidate.to_string().eq_ignore_ascii_case(text),
        }
    }

    fn clone_box(&self) -> Boxed {
        Box::new(self.clone())
    }

    fn literals(&self) -> Vec<&PypiVersion> {
        match self {
            Specifier::Equal(version)
            | Specifier::NotEqual(version)
            | Specifier::LessThan(version)
            | Specifier::GreaterThan(version) => vec![version],
            Specifier::Arbitrary { version, .. } => version.iter().collect(),
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specifier::Equal(version) => write!(f, "=={}", version),
            Specifier::NotEqual(version) => write!(f, "!={}", version),
            Specifier::LessThan(version) => write!(f, "<{}", version),
            Specifier::GreaterThan(version) => write!(f, ">{}", version),
            Specifier::Arbitrary { text, .. } => write!(f, "==={}", text),
        }
    }
}

/// `[X.Y.dev0, X.(Y+1).dev0)`: every version whose release starts with `prefix`
fn prefix_span(epoch: u64, prefix: &[u64]) -> (PypiVersion, PypiVersion) {
    let lower = PypiVersion::from_release(epoch, prefix.to_vec()).with_dev0();
    let mut next = prefix.to_vec();
    if let Some(last) = next.last_mut() {
        *last = last.saturating_add(1);
    }
    let upper = PypiVersion::from_release(epoch, next).with_dev0();
    (lower, upper)
}

/// Parse a comma-separated specifier set. The empty set admits every final release.
///
/// Prereleases are admitted only when an inclusive specifier (`==`, `===`, `>=`, `<=`, `~=`)
/// names one, as pip does.
pub fn parse(text: &str) -> Result<NativeRange<PypiVersion>> {
    let mut clauses = Vec::new();
    let mut admits_prereleases = false;
    if !text.trim().is_empty() {
        for specifier in split_trimmed(text, ",") {
            let (clause, names_prerelease) = parse_specifier(specifier, text)?;
            admits_prereleases |= names_prerelease;
            clauses.push(clause);
        }
    }

    let policy = if admits_prereleases {
        PrereleasePolicy::Include
    } else {
        PrereleasePolicy::Exclude
    };
    Ok(NativeRange::new(text, MultiConstraint::create(clauses, true), policy))
}

/// One specifier, and whether it opts the set into prereleases
fn parse_specifier(specifier: &str, input: &str) -> Result<(Boxed, bool)> {
    let caps = SPECIFIER_RE
        .captures(specifier)
        .ok_or_else(|| Error::range(input, format!("`{}` is not a version specifier", specifier)))?;
    let op = caps.name("op").map_or("", |m| m.as_str());
    let operand = &caps["version"];

    if op == "===" {
        let version = PypiVersion::parse(operand).ok();
        let names_prerelease = version.as_ref().is_some_and(Version::is_prerelease);
        let clause = Specifier::Arbitrary {
            text: operand.to_string(),
            version,
        };
        return Ok((Box::new(clause), names_prerelease));
    }

    if let Some(prefix) = operand.strip_suffix(".*") {
        let version = PypiVersion::parse(prefix)?;
        if version.pre.is_some()
            || version.post.is_some()
            || version.dev.is_some()
            || version.is_local()
        {
            let reason = format!("`{}` may only wildcard release segments", specifier);
            return Err(Error::range(input, reason));
        }
        let (lower, upper) = prefix_span(version.epoch(), version.release());
        let clause = match op {
            "==" => MultiConstraint::create(
                vec![
                    Box::new(Constraint::new(Operator::GreaterThanOrEqual, lower)),
                    Box::new(Constraint::new(Operator::LessThan, upper)),
                ],
                true,
            ),
            "!=" => MultiConstraint::create(
                vec![
                    Box::new(Constraint::new(Operator::LessThan, lower)),
                    Box::new(Constraint::new(Operator::GreaterThanOrEqual, upper)),
                ],
                false,
            ),
            _ => {
                return Err(Error::range(input, format!("`.*` is not allowed with `{}`", op)));
            }
        };
        return Ok((clause, false));
    }

    let version = PypiVersion::parse(operand)?;
    if version.is_local() && !matches!(op, "==" | "!=") {
        return Err(Error::range(input, format!("local versions are not allowed with `{}`", op)));
    }
    let names_prerelease = version.is_prerelease();

    Ok(match op {
        "==" => (Box::new(Specifier::Equal(version)), names_prerelease),
        "!=" => (Box::new(Specifier::NotEqual(version)), false),
        "<" => (Box::new(Specifier::LessThan(version)), false),
        ">" => (Box::new(Specifier::GreaterThan(version)), false),
        "<=" => (
            Box::new(Constraint::new(Operator::LessThanOrEqual, version)),
            names_prerelease,
        ),
        ">=" => (
            Box::new(Constraint::new(Operator::GreaterThanOrEqual, version)),
            names_prerelease,
        ),
        "~=" => (compatible(version, specifier, input)?, names_prerelease),
        _ => return Err(Error::range(input, format!("unknown operator `{}`", op))),
    })
}

/// `~=2.2.1` means `>=2.2.1, ==2.2.*`
fn compatible(version: PypiVersion, specifier: &str, input: &str) -> Result<Boxed> {
    let release = version.release();
    if release.len() < 2 {
        let reason = format!("`{}` needs at least two release segments", specifier);
        return Err(Error::range(input, reason));
    }
    let (_, upper) = prefix_span(version.epoch(), &release[..release.len() - 1]);

    Ok(MultiConstraint::create(
        vec![
            Box::new(Constraint::new(Operator::GreaterThanOrEqual, version)),
            Box::new(Constraint::new(Operator::LessThan, upper)),
        ],
        true,
    ))
}
