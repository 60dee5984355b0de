//! Version comparison and range containment across package ecosystems
//!
//! This crate parses versions of Maven, PyPI, npm, Cargo, Go modules, RubyGems and Debian,
//! orders them the way each ecosystem does, and decides whether a version lies in a range
//! written either in VERS notation (`vers:npm/>=1.0.0|<2.0.0`) or in the ecosystem's own syntax.

mod comparator;
pub mod constraint;
mod error;
pub mod native;
mod polyver;
mod scheme;
pub mod vers;
pub mod version;

pub use comparator::Comparator;
pub use constraint::{
    Bound, Constraint, ConstraintInterface, Interval, MatchAllConstraint, MatchNoneConstraint,
    MultiConstraint, Operator, Side,
};
pub use error::{Error, ErrorKind, Result};
pub use native::{NativeRange, PrereleasePolicy};
pub use polyver::{AnyRange, Polyver};
pub use scheme::{Cargo, Debian, Ecosystem, Gem, Golang, Maven, Npm, Pypi, Scheme};
pub use vers::VersRange;
pub use version::{
    DebianVersion, GemVersion, MavenVersion, PypiVersion, SemVersion, Version, VersionRange,
};
