//! A single `operator version` comparison

use std::fmt;

use super::{ConstraintInterface, Operator};
use crate::version::Version;

/// A constraint comparing candidates against one version, e.g. `>= 1.2.0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint<V> {
    operator: Operator,
    version: V,
}

impl<V: Version> Constraint<V> {
    pub fn new(operator: Operator, version: V) -> Self {
        Constraint { operator, version }
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn version(&self) -> &V {
        &self.version
    }

    /// Evaluate the comparison for `candidate`
    pub fn matches_version(&self, candidate: &V) -> bool {
        self.operator.accepts(candidate.cmp(&self.version))
    }
}

impl<V: Version> ConstraintInterface<V> for Constraint<V> {
    fn matches(&self, version: &V) -> bool {
        self.matches_version(version)
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface<V>> {
        Box::new(self.clone())
    }

    fn literals(&self) -> Vec<&V> {
        vec![&self.version]
    }

    fn as_constraint(&self) -> Option<&Constraint<V>> {
        Some(self)
    }
}

impl<V: fmt::Display> fmt::Display for Constraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::SemVersion;

    fn v(s: &str) -> SemVersion {
        SemVersion::parse(s).unwrap()
    }

    #[test]
    fn test_matches() {
        let constraint = Constraint::new(Operator::GreaterThanOrEqual, v("1.2.0"));
        assert!(constraint.matches(&v("1.2.0")));
        assert!(constraint.matches(&v("1.3.0")));
        assert!(!constraint.matches(&v("1.2.0-rc.1")));

        let constraint = Constraint::new(Operator::NotEqual, v("1.2.0"));
        assert!(!constraint.matches(&v("1.2.0+build")));
        assert!(constraint.matches(&v("1.2.1")));
    }

    #[test]
    fn test_display() {
        let constraint = Constraint::new(Operator::LessThan, v("2.0.0"));
        assert_eq!(constraint.to_string(), "<2.0.0");
        assert!(constraint.as_constraint().is_some());
        assert_eq!(constraint.literals(), vec![&v("2.0.0")]);
    }
}
