use std::fmt;

use anyhow::{Context, Result};
use clap::Args;
use polyver_core::{Polyver, Scheme};
use serde::Serialize;

use crate::report::Report;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Ecosystem the version belongs to (maven, pypi, npm, cargo, golang, gem, deb)
    #[arg(value_name = "ECOSYSTEM")]
    pub ecosystem: Scheme,

    /// Version to parse
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub version: String,
}

#[derive(Serialize, Debug)]
pub struct ParseOutput {
    ecosystem: String,
    input: String,
    canonical: String,
}

impl fmt::Display for ParseOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

impl Report for ParseOutput {}

pub fn parse(args: &ParseArgs) -> Result<ParseOutput> {
    let canonical = Polyver::parse_version(args.ecosystem, &args.version)
        .with_context(|| format!("Failed to parse {} version", args.ecosystem))?;
    Ok(ParseOutput {
        ecosystem: args.ecosystem.to_string(),
        input: args.version.clone(),
        canonical,
    })
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Ecosystem both versions belong to
    #[arg(value_name = "ECOSYSTEM")]
    pub ecosystem: Scheme,

    #[arg(value_name = "VERSION1", allow_hyphen_values = true)]
    pub version1: String,

    #[arg(value_name = "VERSION2", allow_hyphen_values = true)]
    pub version2: String,
}

#[derive(Serialize, Debug)]
pub struct CompareOutput {
    ecosystem: String,
    version1: String,
    version2: String,
    /// -1, 0 or 1
    result: i8,
}

impl fmt::Display for CompareOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.result {
            -1 => "<",
            0 => "==",
            _ => ">",
        };
        write!(f, "{} {} {}", self.version1, symbol, self.version2)
    }
}

impl Report for CompareOutput {}

pub fn compare(args: &CompareArgs) -> Result<CompareOutput> {
    let result = Polyver::compare(args.ecosystem, &args.version1, &args.version2)
        .with_context(|| format!("Failed to compare {} versions", args.ecosystem))?;
    Ok(CompareOutput {
        ecosystem: args.ecosystem.to_string(),
        version1: args.version1.clone(),
        version2: args.version2.clone(),
        result,
    })
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Ecosystem the versions belong to
    #[arg(value_name = "ECOSYSTEM")]
    pub ecosystem: Scheme,

    /// Versions to sort
    #[arg(value_name = "VERSIONS", required = true, allow_hyphen_values = true)]
    pub versions: Vec<String>,

    /// Sort from highest to lowest
    #[arg(short, long)]
    pub reverse: bool,
}

#[derive(Serialize, Debug)]
pub struct SortOutput {
    ecosystem: String,
    versions: Vec<String>,
}

impl fmt::Display for SortOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.versions.join("\n"))
    }
}

impl Report for SortOutput {}

pub fn sort(args: &SortArgs) -> Result<SortOutput> {
    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    let sorted = if args.reverse {
        Polyver::rsort(args.ecosystem, &versions)
    } else {
        Polyver::sort(args.ecosystem, &versions)
    }
    .with_context(|| format!("Failed to sort {} versions", args.ecosystem))?;

    log::debug!("Sorted {} versions", sorted.len());
    Ok(SortOutput {
        ecosystem: args.ecosystem.to_string(),
        versions: sorted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let output = parse(&ParseArgs {
            ecosystem: Scheme::Pypi,
            version: "1.0-RC1".into(),
        })
        .unwrap();
        assert_eq!(output.to_string(), "1.0rc1");
        assert!(parse(&ParseArgs {
            ecosystem: Scheme::Npm,
            version: "1.0".into(),
        })
        .is_err());
    }

    #[test]
    fn test_compare() {
        let output = compare(&CompareArgs {
            ecosystem: Scheme::Maven,
            version1: "1.0-SNAPSHOT".into(),
            version2: "1.0".into(),
        })
        .unwrap();
        assert_eq!(output.result, -1);
        assert_eq!(output.to_string(), "1.0-SNAPSHOT < 1.0");
    }

    #[test]
    fn test_sort() {
        let args = SortArgs {
            ecosystem: Scheme::Npm,
            versions: vec!["2.0.0".into(), "1.0.0".into(), "1.0.0-rc.1".into()],
            reverse: true,
        };
        assert_eq!(sort(&args).unwrap().versions, vec!["2.0.0", "1.0.0", "1.0.0-rc.1"]);
    }
}
