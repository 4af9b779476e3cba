// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use linetally::args::{Args, Mode, OutputFormat};
use linetally::config::Config;
use linetally::{batch, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);
    run(&config);
    // An unopenable file is reported on stderr, not fatal.
    ExitCode::SUCCESS
}

fn run(config: &Config) {
    // Lazy plain output streams counts as they are produced, nothing is
    // materialized. Every other combination collects first.
    if config.mode == Mode::Lazy && config.format == OutputFormat::Plain {
        for count in batch::lazy_counts(&config.paths) {
            println!("{count}");
        }
        return;
    }

    let counts = match config.mode {
        Mode::Imperative => {
            let outcome = batch::count_lines_in_files(&config.paths);
            if let Some((path, err)) = &outcome.aborted {
                presentation::report_aborted(path, err);
            }
            outcome.counts
        }
        Mode::Map => batch::count_lines_total(&config.paths),
        Mode::Parallel => batch::count_lines_parallel(&config.paths),
        Mode::Lazy => batch::lazy_counts(&config.paths).collect(),
    };

    match config.format {
        OutputFormat::Plain => presentation::print_plain(&counts),
        OutputFormat::Json => presentation::print_json(&config.paths, &counts),
    }
}
