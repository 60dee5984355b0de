//! Normalized pieces of a range

use std::fmt;

use super::{Bound, Constraint, Operator, Side};
use crate::version::Version;

/// One piece of a normalized range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interval<V> {
    /// Exactly one version
    Exact(V),
    /// Everything between two optional bounds. A missing bound is unbounded on that side.
    Bounded {
        lower: Option<Bound<V>>,
        upper: Option<Bound<V>>,
    },
    /// One version removed from the range, whatever else contains it
    Exclude(V),
}

impl<V: Ord> Interval<V> {
    pub fn lower(bound: Bound<V>) -> Self {
        Interval::Bounded {
            lower: Some(bound),
            upper: None,
        }
    }

    pub fn upper(bound: Bound<V>) -> Self {
        Interval::Bounded {
            lower: None,
            upper: Some(bound),
        }
    }

    /// Whether `version` falls inside.
    ///
    /// For [`Interval::Exclude`] this is whether it is the excluded version.
    pub fn contains(&self, version: &V) -> bool {
        match self {
            Interval::Exact(exact) | Interval::Exclude(exact) => version == exact,
            Interval::Bounded { lower, upper } => {
                lower.as_ref().map_or(true, |b| b.admits(version, Side::Lower))
                    && upper.as_ref().map_or(true, |b| b.admits(version, Side::Upper))
            }
        }
    }

    pub fn is_exclude(&self) -> bool {
        matches!(self, Interval::Exclude(_))
    }

    /// Whether no version can satisfy the interval, e.g. `>=2|<=1` fused together
    pub fn is_empty(&self) -> bool {
        match self {
            Interval::Bounded {
                lower: Some(lower),
                upper: Some(upper),
            } => match lower.version().cmp(upper.version()) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Equal => !(lower.is_inclusive() && upper.is_inclusive()),
                std::cmp::Ordering::Less => false,
            },
            _ => false,
        }
    }
}

impl<V: Version> Interval<V> {
    /// The VERS constraints that write this interval
    pub fn to_constraints(&self) -> Vec<Constraint<V>> {
        match self {
            Interval::Exact(v) => vec![Constraint::new(Operator::Equal, v.clone())],
            Interval::Exclude(v) => vec![Constraint::new(Operator::NotEqual, v.clone())],
            Interval::Bounded { lower, upper } => lower
                .iter()
                .map(|b| Constraint::new(b.operator(Side::Lower), b.version().clone()))
                .chain(
                    upper
                        .iter()
                        .map(|b| Constraint::new(b.operator(Side::Upper), b.version().clone())),
                )
                .collect(),
        }
    }
}

impl<V: fmt::Display> fmt::Display for Interval<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Exact(v) => write!(f, "[{}]", v),
            Interval::Exclude(v) => write!(f, "!{}", v),
            Interval::Bounded { lower, upper } => {
                match lower {
                    Some(b) => {
                        let open = if b.is_inclusive() { '[' } else { '(' };
                        write!(f, "{}{}", open, b.version())?
                    }
                    None => write!(f, "(")?,
                }
                write!(f, ",")?;
                match upper {
                    Some(b) => {
                        let close = if b.is_inclusive() { ']' } else { ')' };
                        write!(f, "{}{}", b.version(), close)
                    }
                    None => write!(f, ")"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let closed = Interval::Bounded {
            lower: Some(Bound::inclusive(1)),
            upper: Some(Bound::exclusive(3)),
        };
        assert!(closed.contains(&1));
        assert!(closed.contains(&2));
        assert!(!closed.contains(&3));
        assert!(!closed.contains(&0));

        assert!(Interval::lower(Bound::exclusive(1)).contains(&100));
        assert!(Interval::upper(Bound::inclusive(1)).contains(&-100));
        assert!(Interval::Exact(4).contains(&4));
        assert!(!Interval::Exact(4).contains(&5));
        assert!(Interval::Exclude(4).contains(&4));
    }

    #[test]
    fn test_is_empty() {
        let inverted = Interval::Bounded {
            lower: Some(Bound::inclusive(2)),
            upper: Some(Bound::inclusive(1)),
        };
        assert!(inverted.is_empty());
        let point = Interval::Bounded {
            lower: Some(Bound::inclusive(1)),
            upper: Some(Bound::inclusive(1)),
        };
        assert!(!point.is_empty());
        let half_open_point = Interval::Bounded {
            lower: Some(Bound::inclusive(1)),
            upper: Some(Bound::exclusive(1)),
        };
        assert!(half_open_point.is_empty());
    }

    #[test]
    fn test_display() {
        let closed = Interval::Bounded {
            lower: Some(Bound::inclusive(1)),
            upper: Some(Bound::exclusive(3)),
        };
        assert_eq!(closed.to_string(), "[1,3)");
        assert_eq!(Interval::upper(Bound::inclusive(1)).to_string(), "(,1]");
    }

    #[test]
    fn test_to_constraints() {
        use crate::version::SemVersion;

        let v = |s: &str| SemVersion::parse(s).unwrap();
        let closed = Interval::Bounded {
            lower: Some(Bound::inclusive(v("1.0.0"))),
            upper: Some(Bound::exclusive(v("3.0.0"))),
        };
        let rendered: Vec<String> = closed.to_constraints().iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec![">=1.0.0", "<3.0.0"]);
        assert_eq!(Interval::Exclude(v("2.0.0")).to_constraints()[0].to_string(), "!=2.0.0");
    }
}
