use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;

/// The result of one command, printable for humans or as JSON
pub trait Report: Serialize + fmt::Display {
    fn exit_code(&self) -> u8 {
        0
    }
}

/// Print a report and return the process exit code it maps to
pub fn emit<R: Report>(report: &R, json: bool) -> Result<u8> {
    if json {
        let out = serde_json::to_string_pretty(report).context("Failed to serialize output")?;
        println!("{}", out);
    } else {
        println!("{}", report);
    }
    Ok(report.exit_code())
}
