//! Constraint types for version matching

mod bound;
#[allow(clippy::module_inception)]
mod constraint;
mod constraint_interface;
mod interval;
mod match_all;
mod match_none;
mod multi_constraint;
mod operator;

pub use bound::{Bound, Side};
pub use constraint::Constraint;
pub use constraint_interface::ConstraintInterface;
pub use interval::Interval;
pub use match_all::MatchAllConstraint;
pub use match_none::MatchNoneConstraint;
pub use multi_constraint::MultiConstraint;
pub use operator::{InvalidOperatorError, Operator};
