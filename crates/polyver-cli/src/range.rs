use std::fmt;

use anyhow::{Context, Result};
use clap::Args;
use polyver_core::{Polyver, Scheme};
use serde::Serialize;

use crate::report::Report;

#[derive(Args, Debug)]
pub struct ContainsArgs {
    /// A VERS range, or a native range when --ecosystem is given
    #[arg(value_name = "RANGE", allow_hyphen_values = true)]
    pub range: String,

    /// Version to look up
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub version: String,

    /// Read RANGE in this ecosystem's native syntax unless it starts with `vers:`
    #[arg(short, long, value_name = "ECOSYSTEM")]
    pub ecosystem: Option<Scheme>,
}

#[derive(Serialize, Debug)]
pub struct ContainsOutput {
    range: String,
    version: String,
    contained: bool,
}

impl fmt::Display for ContainsOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contained {
            write!(f, "{} is in {}", self.version, self.range)
        } else {
            write!(f, "{} is not in {}", self.version, self.range)
        }
    }
}

impl Report for ContainsOutput {
    fn exit_code(&self) -> u8 {
        if self.contained {
            0
        } else {
            1
        }
    }
}

pub fn contains(args: &ContainsArgs) -> Result<ContainsOutput> {
    let contained = match args.ecosystem {
        Some(scheme) => Polyver::contains_in(scheme, &args.range, &args.version),
        None => Polyver::contains(&args.range, &args.version),
    }
    .with_context(|| format!("Failed to check {} against {}", args.version, args.range))?;

    Ok(ContainsOutput {
        range: args.range.clone(),
        version: args.version.clone(),
        contained,
    })
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// A VERS range
    #[arg(value_name = "RANGE")]
    pub range: String,
}

#[derive(Serialize, Debug)]
pub struct NormalizeOutput {
    input: String,
    normalized: String,
}

impl fmt::Display for NormalizeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl Report for NormalizeOutput {}

pub fn normalize(args: &NormalizeArgs) -> Result<NormalizeOutput> {
    let normalized = Polyver::normalize(&args.range).context("Failed to normalize range")?;
    Ok(NormalizeOutput {
        input: args.range.clone(),
        normalized,
    })
}
