//! Partial semantic versions (`1`, `1.2`, `1.x`, `*`) and the comparator sugar
//! npm and Cargo build on them

use lazy_static::lazy_static;
use regex::Regex;

use crate::constraint::{
    Constraint, ConstraintInterface, MatchAllConstraint, MatchNoneConstraint, MultiConstraint,
    Operator,
};
use crate::version::{SemVersion, Version};
use crate::{Error, Result};

lazy_static! {
    static ref PARTIAL_RE: Regex = Regex::new(
        r"^[vV=]*(?P<major>\d+|[xX*])(?:\.(?P<minor>\d+|[xX*])(?:\.(?P<patch>\d+|[xX*])(?P<rest>[-+].*)?)?)?$"
    )
    .unwrap();
}

type Boxed = Box<dyn ConstraintInterface<SemVersion>>;

/// Whose rules the sugar follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flavor {
    /// node-semver: exclusive upper limits are the lowest prerelease, `<2.0.0-0`
    Npm,
    /// Cargo: exclusive upper limits are plain releases, `<2.0.0`
    Cargo,
}

impl Flavor {
    fn ceiling(self, major: u64, minor: u64, patch: u64) -> SemVersion {
        match self {
            Flavor::Npm => SemVersion::lowest(major, minor, patch),
            Flavor::Cargo => SemVersion::new(major, minor, patch),
        }
    }
}

/// A version with trailing components possibly left out or wildcarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Partial {
    Any,
    Major(u64),
    Minor(u64, u64),
    Full(SemVersion),
}

impl Partial {
    pub(crate) fn parse(text: &str, input: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Partial::Any);
        }
        let caps = PARTIAL_RE
            .captures(text)
            .ok_or_else(|| Error::range(input, format!("`{}` is not a version", text)))?;
        let component = |name: &str| -> Result<Option<u64>> {
            match caps.name(name).map(|m| m.as_str()) {
                None | Some("x") | Some("X") | Some("*") => Ok(None),
                Some(number) => number
                    .parse()
                    .map(Some)
                    .map_err(|_| Error::range(input, format!("`{}` is too large", number))),
            }
        };

        Ok(match (component("major")?, component("minor")?, component("patch")?) {
            (None, _, _) => Partial::Any,
            (Some(major), None, _) => Partial::Major(major),
            (Some(major), Some(minor), None) => Partial::Minor(major, minor),
            (Some(_), Some(_), Some(_)) => {
                let full = text.trim_start_matches(['v', 'V', '=']);
                Partial::Full(SemVersion::parse(full)?)
            }
        })
    }

    /// The smallest release the partial stands for, with missing components as zero
    fn floor(&self) -> Option<SemVersion> {
        match self {
            Partial::Any => None,
            Partial::Major(major) => Some(SemVersion::new(*major, 0, 0)),
            Partial::Minor(major, minor) => Some(SemVersion::new(*major, *minor, 0)),
            Partial::Full(version) => Some(version.clone()),
        }
    }

    /// The first version past everything the partial stands for, for `Major` and `Minor`
    fn next(&self, flavor: Flavor) -> Option<SemVersion> {
        match self {
            Partial::Major(major) => Some(flavor.ceiling(major.saturating_add(1), 0, 0)),
            Partial::Minor(major, minor) => {
                Some(flavor.ceiling(*major, minor.saturating_add(1), 0))
            }
            Partial::Any | Partial::Full(_) => None,
        }
    }
}

fn compare(operator: Operator, version: SemVersion) -> Boxed {
    Box::new(Constraint::new(operator, version))
}

fn between(lower: Option<SemVersion>, upper: Option<SemVersion>) -> Boxed {
    let mut parts = Vec::new();
    if let Some(lower) = lower {
        parts.push(compare(Operator::GreaterThanOrEqual, lower));
    }
    if let Some(upper) = upper {
        parts.push(compare(Operator::LessThan, upper));
    }
    MultiConstraint::create(parts, true)
}

/// `1.2.x`, `=1.2`: everything the partial stands for
pub(crate) fn x_range(partial: &Partial, flavor: Flavor) -> Boxed {
    match partial {
        Partial::Full(version) => compare(Operator::Equal, version.clone()),
        _ => between(partial.floor(), partial.next(flavor)),
    }
}

/// `~1.2.3`: patch-level changes, or minor-level when only the major is given
pub(crate) fn tilde(partial: &Partial, flavor: Flavor) -> Boxed {
    match partial {
        Partial::Full(version) => between(
            Some(version.clone()),
            Some(flavor.ceiling(version.major, version.minor.saturating_add(1), 0)),
        ),
        _ => x_range(partial, flavor),
    }
}

/// `^1.2.3`: changes that do not modify the left-most non-zero component
pub(crate) fn caret(partial: &Partial, flavor: Flavor) -> Boxed {
    let upper = match partial {
        Partial::Any => return Box::new(MatchAllConstraint::new()),
        Partial::Major(major) => flavor.ceiling(major.saturating_add(1), 0, 0),
        Partial::Minor(0, minor) => flavor.ceiling(0, minor.saturating_add(1), 0),
        Partial::Minor(major, _) => flavor.ceiling(major.saturating_add(1), 0, 0),
        Partial::Full(v) if v.major > 0 => flavor.ceiling(v.major.saturating_add(1), 0, 0),
        Partial::Full(v) if v.minor > 0 => flavor.ceiling(0, v.minor.saturating_add(1), 0),
        Partial::Full(v) => flavor.ceiling(0, 0, v.patch.saturating_add(1)),
    };
    between(partial.floor(), Some(upper))
}

/// `1.2 - 2.3`: inclusive on both ends, a partial upper end covering all it stands for
pub(crate) fn hyphen(from: &Partial, to: &Partial, flavor: Flavor) -> Boxed {
    let upper = match to {
        Partial::Full(version) => Some(compare(Operator::LessThanOrEqual, version.clone())),
        _ => to.next(flavor).map(|next| compare(Operator::LessThan, next)),
    };
    let lower = from
        .floor()
        .map(|floor| compare(Operator::GreaterThanOrEqual, floor));
    MultiConstraint::create(lower.into_iter().chain(upper).collect(), true)
}

/// A primitive comparison whose operand may be partial, e.g. `>1.2` or `<=1`
pub(crate) fn primitive(operator: Operator, partial: &Partial, flavor: Flavor) -> Boxed {
    match (operator, partial) {
        (_, Partial::Full(version)) => compare(operator, version.clone()),
        (Operator::Equal, _) => x_range(partial, flavor),
        (Operator::LessThan | Operator::GreaterThan | Operator::NotEqual, Partial::Any) => {
            Box::new(MatchNoneConstraint::new())
        }
        (_, Partial::Any) => Box::new(MatchAllConstraint::new()),
        (Operator::GreaterThan, _) => between(partial.next(Flavor::Cargo), None),
        (Operator::GreaterThanOrEqual, _) => between(partial.floor(), None),
        (Operator::LessThan, _) => between(
            None,
            partial
                .floor()
                .map(|floor| flavor.ceiling(floor.major, floor.minor, floor.patch)),
        ),
        (Operator::LessThanOrEqual, _) => between(None, partial.next(flavor)),
        // `!=1.2` excludes everything `1.2.x` would include
        (Operator::NotEqual, _) => MultiConstraint::create(
            vec![
                between(None, partial.floor().map(|f| flavor.ceiling(f.major, f.minor, f.patch))),
                between(partial.next(flavor), None),
            ],
            false,
        ),
    }
}
