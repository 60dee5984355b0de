mod range;
mod report;
mod version;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use log::LevelFilter;

use report::emit;

#[derive(Parser, Debug)]
#[command(name = "polyver")]
#[command(about = "Compare versions and check VERS ranges across package ecosystems")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical form of a version
    Parse(version::ParseArgs),

    /// Compare two versions, printing -1, 0 or 1 with --json
    Compare(version::CompareArgs),

    /// Check whether a version lies in a range (exit code 1 when it does not)
    Contains(range::ContainsArgs),

    /// Sort versions from lowest to highest
    Sort(version::SortArgs),

    /// Print the canonical form of a VERS range
    Normalize(range::NormalizeArgs),
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    match &cli.command {
        Commands::Parse(args) => emit(&version::parse(args)?, cli.json),
        Commands::Compare(args) => emit(&version::compare(args)?, cli.json),
        Commands::Contains(args) => emit(&range::contains(args)?, cli.json),
        Commands::Sort(args) => emit(&version::sort(args)?, cli.json),
        Commands::Normalize(args) => emit(&range::normalize(args)?, cli.json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(2)
        }
    }
}
