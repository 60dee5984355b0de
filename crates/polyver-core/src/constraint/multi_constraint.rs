//! MultiConstraint - compound constraint combining multiple constraints

use std::fmt;

use super::{ConstraintInterface, MatchAllConstraint, MatchNoneConstraint};
use crate::version::Version;

/// A constraint combining multiple constraints with AND (conjunctive) or OR (disjunctive) logic
#[derive(Debug)]
pub struct MultiConstraint<V> {
    constraints: Vec<Box<dyn ConstraintInterface<V>>>,
    conjunctive: bool,
}

impl<V: Version> Clone for MultiConstraint<V> {
    fn clone(&self) -> Self {
        MultiConstraint {
            constraints: self.constraints.clone(),
            conjunctive: self.conjunctive,
        }
    }
}

impl<V: Version> MultiConstraint<V> {
    /// Create a constraint from parts, optimizing where possible.
    ///
    /// No parts is the identity of the operation: match-all for AND, match-none for OR.
    /// A single part is returned unwrapped. Nested constraints of the same kind are flattened.
    pub fn create(
        constraints: Vec<Box<dyn ConstraintInterface<V>>>,
        conjunctive: bool,
    ) -> Box<dyn ConstraintInterface<V>> {
        let mut flattened = Vec::with_capacity(constraints.len());
        for constraint in constraints {
            let children = match constraint.as_multi_constraint() {
                Some((children, child_conjunctive)) if child_conjunctive == conjunctive => {
                    Some(children.to_vec())
                }
                _ => None,
            };
            match children {
                Some(children) => flattened.extend(children),
                None => flattened.push(constraint),
            }
        }

        // [>= 1 *] => [>= 1], [< 1 || []] => [< 1]
        let neutral = |c: &Box<dyn ConstraintInterface<V>>| {
            if conjunctive {
                c.is_match_all()
            } else {
                c.is_match_none()
            }
        };
        let absorbing = |c: &Box<dyn ConstraintInterface<V>>| {
            if conjunctive {
                c.is_match_none()
            } else {
                c.is_match_all()
            }
        };
        if let Some(index) = flattened.iter().position(absorbing) {
            return flattened.swap_remove(index);
        }
        flattened.retain(|c| !neutral(c));

        match flattened.len() {
            0 if conjunctive => Box::new(MatchAllConstraint::new()),
            0 => Box::new(MatchNoneConstraint::new()),
            1 => match flattened.pop() {
                Some(single) => single,
                None => Box::new(MatchNoneConstraint::new()),
            },
            _ => Box::new(MultiConstraint {
                constraints: flattened,
                conjunctive,
            }),
        }
    }
}

impl<V: Version> ConstraintInterface<V> for MultiConstraint<V> {
    fn matches(&self, version: &V) -> bool {
        if self.conjunctive {
            // AND logic - all constraints must match
            self.constraints.iter().all(|c| c.matches(version))
        } else {
            // OR logic - at least one constraint must match
            self.constraints.iter().any(|c| c.matches(version))
        }
    }

    fn clone_box(&self) -> Box<dyn ConstraintInterface<V>> {
        Box::new(self.clone())
    }

    fn literals(&self) -> Vec<&V> {
        self.constraints.iter().flat_map(|c| c.literals()).collect()
    }

    fn as_multi_constraint(&self) -> Option<(&[Box<dyn ConstraintInterface<V>>], bool)> {
        Some((&self.constraints, self.conjunctive))
    }
}

impl<V> fmt::Display for MultiConstraint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let constraints_str: Vec<String> = self.constraints.iter().map(|c| c.to_string()).collect();

        let separator = if self.conjunctive { " " } else { " || " };
        write!(f, "[{}]", constraints_str.join(separator))
    }
}
