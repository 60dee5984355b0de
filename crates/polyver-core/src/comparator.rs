//! Version comparison utilities

use std::cmp::Ordering;

use crate::constraint::Operator;
use crate::scheme::{with_ecosystem, Ecosystem, Scheme};
use crate::{Error, Result};

/// Comparator for comparing version strings of one ecosystem
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(scheme: Scheme, version1: &str, version2: &str) -> Result<bool> {
        Self::compare(scheme, version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(
        scheme: Scheme,
        version1: &str,
        version2: &str,
    ) -> Result<bool> {
        Self::compare(scheme, version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(scheme: Scheme, version1: &str, version2: &str) -> Result<bool> {
        Self::compare(scheme, version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(scheme: Scheme, version1: &str, version2: &str) -> Result<bool> {
        Self::compare(scheme, version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(scheme: Scheme, version1: &str, version2: &str) -> Result<bool> {
        Self::compare(scheme, version1, "==", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(scheme: Scheme, version1: &str, version2: &str) -> Result<bool> {
        Self::compare(scheme, version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator. `==` and `<>` are accepted
    /// as spellings of `=` and `!=`.
    pub fn compare(scheme: Scheme, version1: &str, operator: &str, version2: &str) -> Result<bool> {
        let operator = match operator {
            "==" => Operator::Equal,
            "<>" => Operator::NotEqual,
            other => other
                .parse::<Operator>()
                .map_err(|e| Error::range(other, e.to_string()))?,
        };
        Ok(operator.accepts(Self::order(scheme, version1, version2)?))
    }

    /// How version1 orders against version2
    pub fn order(scheme: Scheme, version1: &str, version2: &str) -> Result<Ordering> {
        with_ecosystem!(scheme, order_in(version1, version2))
    }
}

fn order_in<E: Ecosystem>(version1: &str, version2: &str) -> Result<Ordering> {
    let version1 = E::parse_version(version1)?;
    let version2 = E::parse_version(version2)?;
    Ok(version1.cmp(&version2))
}
