// src/lib.rs
//! Counting newline characters across a list of files.
//!
//! The per-file computation comes in two shapes: a fallible one
//! ([`count::count_lines`]) and a total one ([`count::count_lines_or_zero`])
//! where an unreadable file is indistinguishable from an empty one. The
//! [`batch`] module builds the batch contracts on top of them: a sequential
//! fail-fast pass and an independent per-file mapping (sequential, parallel,
//! or lazy).

pub mod args;
pub mod batch;
pub mod config;
pub mod count;
pub mod error;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use batch::{
    BatchOutcome, count_lines_in_files, count_lines_parallel, count_lines_total, lazy_counts,
};
pub use count::{LineCount, count_lines, count_lines_or_zero};
pub use error::{Result, TallyError};
