//! Error types shared by every parser and evaluator

use thiserror::Error;

/// Broad failure category, useful to callers that map errors to exit codes or HTTP statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed version or range text
    Syntax,
    /// The range names an ecosystem that has no registered comparator
    Routing,
    /// Well-formed text that makes no sense as a range
    Semantic,
}

/// Error type for version and range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid {scheme} version \"{input}\": {reason}")]
    InvalidVersion {
        scheme: &'static str,
        input: String,
        reason: String,
    },
    #[error("Invalid range \"{input}\": {reason}")]
    InvalidRange { input: String, reason: String },
    #[error("Unknown versioning scheme \"{0}\"")]
    UnknownScheme(String),
    #[error("Invalid range \"{input}\": {reason}")]
    Semantic { input: String, reason: String },
}

impl Error {
    pub(crate) fn version(scheme: &'static str, input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidVersion {
            scheme,
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn range(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidRange {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn semantic(input: &str, reason: impl Into<String>) -> Self {
        Error::Semantic {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// The category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidVersion { .. } | Error::InvalidRange { .. } => ErrorKind::Syntax,
            Error::UnknownScheme(_) => ErrorKind::Routing,
            Error::Semantic { .. } => ErrorKind::Semantic,
        }
    }

    /// The offending substring
    pub fn input(&self) -> &str {
        match self {
            Error::InvalidVersion { input, .. }
            | Error::InvalidRange { input, .. }
            | Error::Semantic { input, .. } => input,
            Error::UnknownScheme(name) => name,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
