// src/presentation.rs
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::count::LineCount;

/// One per-file record for structured output.
#[derive(Debug, Serialize)]
pub struct FileCount {
    pub path: PathBuf,
    pub lines: LineCount,
}

/// One count per line on stdout, in input order.
pub fn print_plain(counts: &[LineCount]) {
    for count in counts {
        println!("{count}");
    }
}

/// JSON array of `{path, lines}` records. When the batch was cut short,
/// `counts` is shorter than `paths` and the zip truncates to match.
pub fn print_json(paths: &[PathBuf], counts: &[LineCount]) {
    let records: Vec<FileCount> = paths
        .iter()
        .zip(counts)
        .map(|(path, &lines)| FileCount {
            path: path.clone(),
            lines,
        })
        .collect();
    if let Ok(json) = serde_json::to_string_pretty(&records) {
        println!("{json}");
    }
}

/// Diagnostic for a file that cut the imperative batch short.
pub fn report_aborted(path: &Path, err: &crate::error::TallyError) {
    eprintln!("Error processing {}: {err}", path.display());
}
