//! MatchAllConstraint - matches any version

use std::fmt;
use std::marker::PhantomData;

use super::ConstraintInterface;
use crate::version::Version;

/// A constraint that matches any version
#[derive(Debug, Clone)]
pub struct MatchAllConstraint<V> {
    marker: PhantomData<fn() -> V>,
}

impl<V> MatchAllConstraint<V> {
    /// Create a new MatchAllConstraint
    pub fn new() -> Self {
        MatchAllConstraint {
            marker: PhantomData,
        }
    }
}

impl<V> Default for MatchAllConstraint<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Version> ConstraintInterface<V> for MatchAllConstraint<V> {
    fn matches(&self, _version: &V) -> bool {
        true
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface<V>> {
        Box::new(self.clone())
    }

    fn is_match_all(&self) -> bool {
        true
    }
}

impl<V> fmt::Display for MatchAllConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::MavenVersion;

    #[test]
    fn test_match_all_matches_everything() {
        let match_all = MatchAllConstraint::<MavenVersion>::new();
        assert!(match_all.matches(&MavenVersion::parse("1.0.0").unwrap()));
        assert!(match_all.matches(&MavenVersion::parse("1.0-SNAPSHOT").unwrap()));
        assert!(match_all.is_match_all());
    }

    #[test]
    fn test_match_all_display() {
        let match_all = MatchAllConstraint::<MavenVersion>::new();
        assert_eq!(match_all.to_string(), "*");
    }
}
