//! Constraint interface trait

use super::Constraint;

/// Trait for all constraint types over versions of type `V`
pub trait ConstraintInterface<V>: std::fmt::Debug + std::fmt::Display + Send + Sync {
    /// Check if a version satisfies this constraint
    fn matches(&self, version: &V) -> bool;

    /// Clone this constraint into a boxed trait object
    fn clone_box(&self) -> Box<dyn ConstraintInterface<V>>;

    /// Versions written in this constraint and its children, in order
    fn literals(&self) -> Vec<&V> {
        Vec::new()
    }

    /// Check if this is a Constraint (single comparison)
    fn as_constraint(&self) -> Option<&Constraint<V>> {
        None
    }

    /// Check if this is a MatchAllConstraint
    fn is_match_all(&self) -> bool {
        false
    }

    /// Check if this is a MatchNoneConstraint
    fn is_match_none(&self) -> bool {
        false
    }

    /// Check if this is a MultiConstraint
    fn as_multi_constraint(&self) -> Option<(&[Box<dyn ConstraintInterface<V>>], bool)> {
        None
    }
}

impl<V: 'static> Clone for Box<dyn ConstraintInterface<V>> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
