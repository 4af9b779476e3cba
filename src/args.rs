// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Mode {
    /// Sequential pass that stops at the first file that cannot be opened
    Imperative,
    /// Independent per-file mapping; an unreadable file counts as 0
    #[default]
    Map,
    /// The `map` contract fanned out across a thread pool
    Parallel,
    /// The `map` contract evaluated lazily while printing
    Lazy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "linetally",
    version,
    about = "Count newline characters across a list of files"
)]
pub struct Args {
    /// Files to count, processed in the order given
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Batch strategy
    #[arg(long, value_enum, default_value = "map")]
    pub mode: Mode,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}
