//! Each ecosystem's own range syntax, parsed into constraint trees

pub mod cargo;
pub mod debian;
pub mod gem;
pub mod golang;
pub mod maven;
pub mod npm;
mod partial;
pub mod pypi;

use std::fmt;

use crate::constraint::ConstraintInterface;
use crate::version::{Version, VersionRange};

/// How a range treats prerelease candidates
pub enum PrereleasePolicy<V> {
    /// Prereleases match like any other version
    Include,
    /// Prereleases never match
    Exclude,
    /// A prerelease only matches an alternative that names a prerelease of the same release,
    /// as judged by the given function
    SameRelease(fn(&V, &V) -> bool),
}

impl<V> Clone for PrereleasePolicy<V> {
    fn clone(&self) -> Self {
        match self {
            PrereleasePolicy::Include => PrereleasePolicy::Include,
            PrereleasePolicy::Exclude => PrereleasePolicy::Exclude,
            PrereleasePolicy::SameRelease(same) => PrereleasePolicy::SameRelease(*same),
        }
    }
}

impl<V> fmt::Debug for PrereleasePolicy<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrereleasePolicy::Include => write!(f, "Include"),
            PrereleasePolicy::Exclude => write!(f, "Exclude"),
            PrereleasePolicy::SameRelease(_) => write!(f, "SameRelease"),
        }
    }
}

/// A range written in an ecosystem's native syntax
#[derive(Debug)]
pub struct NativeRange<V> {
    text: String,
    constraint: Box<dyn ConstraintInterface<V>>,
    prerelease: PrereleasePolicy<V>,
}

impl<V: Version> Clone for NativeRange<V> {
    fn clone(&self) -> Self {
        NativeRange {
            text: self.text.clone(),
            constraint: self.constraint.clone(),
            prerelease: self.prerelease.clone(),
        }
    }
}

impl<V: Version> NativeRange<V> {
    pub fn new(
        text: &str,
        constraint: Box<dyn ConstraintInterface<V>>,
        prerelease: PrereleasePolicy<V>,
    ) -> Self {
        log::debug!("Parsed native range {:?} as {}", text.trim(), constraint);
        NativeRange {
            text: text.trim().to_string(),
            constraint,
            prerelease,
        }
    }

    /// The constraint tree the text was parsed into
    pub fn constraint(&self) -> &dyn ConstraintInterface<V> {
        self.constraint.as_ref()
    }

    pub fn prerelease_policy(&self) -> &PrereleasePolicy<V> {
        &self.prerelease
    }

    fn alternatives(&self) -> Vec<&dyn ConstraintInterface<V>> {
        match self.constraint.as_multi_constraint() {
            Some((children, false)) => children.iter().map(|c| c.as_ref()).collect(),
            _ => vec![self.constraint.as_ref()],
        }
    }
}

impl<V: Version> VersionRange for NativeRange<V> {
    type Version = V;

    fn contains(&self, version: &V) -> bool {
        if !version.is_prerelease() {
            return self.constraint.matches(version);
        }
        match &self.prerelease {
            PrereleasePolicy::Include => self.constraint.matches(version),
            PrereleasePolicy::Exclude => false,
            PrereleasePolicy::SameRelease(same) => self.alternatives().into_iter().any(|set| {
                set.matches(version)
                    && set
                        .literals()
                        .into_iter()
                        .any(|literal| literal.is_prerelease() && same(literal, version))
            }),
        }
    }
}

impl<V> fmt::Display for NativeRange<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Split `text` at top-level occurrences of `separator`, trimming each part
pub(crate) fn split_trimmed<'a>(
    text: &'a str,
    separator: &'a str,
) -> impl Iterator<Item = &'a str> {
    text.split(separator).map(str::trim)
}
