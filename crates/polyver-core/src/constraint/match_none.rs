//! MatchNoneConstraint - matches no version

use std::fmt;
use std::marker::PhantomData;

use super::ConstraintInterface;
use crate::version::Version;

/// A constraint that matches no version, e.g. npm's `<0.0.0-0` or `>*`
#[derive(Debug, Clone)]
pub struct MatchNoneConstraint<V> {
    marker: PhantomData<fn() -> V>,
}

impl<V> MatchNoneConstraint<V> {
    /// Create a new MatchNoneConstraint
    pub fn new() -> Self {
        MatchNoneConstraint {
            marker: PhantomData,
        }
    }
}

impl<V> Default for MatchNoneConstraint<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Version> ConstraintInterface<V> for MatchNoneConstraint<V> {
    fn matches(&self, _version: &V) -> bool {
        false
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface<V>> {
        Box::new(self.clone())
    }

    fn is_match_none(&self) -> bool {
        true
    }
}

impl<V> fmt::Display for MatchNoneConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[]")
    }
}
