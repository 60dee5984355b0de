//! Bound type for constraint boundaries

use std::cmp::Ordering;
use std::fmt;

use super::Operator;

/// Represents a bound (lower or upper) of a version interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bound<V> {
    version: V,
    is_inclusive: bool,
}

/// Which end of an interval a bound sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Lower,
    Upper,
}

impl<V: Ord> Bound<V> {
    /// Create a new bound
    pub fn new(version: V, is_inclusive: bool) -> Self {
        Bound {
            version,
            is_inclusive,
        }
    }

    pub fn inclusive(version: V) -> Self {
        Self::new(version, true)
    }

    pub fn exclusive(version: V) -> Self {
        Self::new(version, false)
    }

    /// Whether `version` lies on the admitted side of this bound
    pub fn admits(&self, version: &V, side: Side) -> bool {
        match (version.cmp(&self.version), side) {
            (Ordering::Equal, _) => self.is_inclusive,
            (Ordering::Greater, Side::Lower) | (Ordering::Less, Side::Upper) => true,
            _ => false,
        }
    }

    /// Compare this bound to another on the same side: is it the more restrictive of the two?
    ///
    /// For lower bounds the higher version is tighter, for upper bounds the lower one. At equal
    /// versions an exclusive bound is tighter than an inclusive one.
    pub fn is_tighter_than(&self, other: &Bound<V>, side: Side) -> bool {
        match (self.version.cmp(&other.version), side) {
            (Ordering::Equal, _) => !self.is_inclusive && other.is_inclusive,
            (Ordering::Greater, Side::Lower) | (Ordering::Less, Side::Upper) => true,
            _ => false,
        }
    }
}

impl<V> Bound<V> {
    /// Get the version
    pub fn version(&self) -> &V {
        &self.version
    }

    /// Check if the bound is inclusive
    pub fn is_inclusive(&self) -> bool {
        self.is_inclusive
    }

    /// The operator that writes this bound on the given side
    ///
    /// e.g. `>=` for an inclusive lower bound
    pub fn operator(&self, side: Side) -> Operator {
        match (side, self.is_inclusive) {
            (Side::Lower, true) => Operator::GreaterThanOrEqual,
            (Side::Lower, false) => Operator::GreaterThan,
            (Side::Upper, true) => Operator::LessThanOrEqual,
            (Side::Upper, false) => Operator::LessThan,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Bound<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.version,
            if self.is_inclusive {
                "inclusive"
            } else {
                "exclusive"
            }
        )
    }
}
