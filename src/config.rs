// src/config.rs
use std::path::PathBuf;

use crate::args::{Args, Mode, OutputFormat};

/// Resolved run configuration, built once from the parsed arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub mode: Mode,
    pub format: OutputFormat,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            paths: args.paths,
            mode: args.mode,
            format: args.format,
        }
    }
}
