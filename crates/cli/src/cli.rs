//! Command-line interface for gopp.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// gopp - lower interpolation literals in extended Go to plain Go
#[derive(Parser, Debug)]
#[command(name = "gopp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Syntax trees to lower, as JSON files produced by the parser
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Write the result to this file instead of stdout (single input only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Emit::Go)]
    pub emit: Emit,

    /// TOML file overriding the formatting call target
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Go source
    Go,
    /// The lowered syntax tree as JSON
    Json,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
