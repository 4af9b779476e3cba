// src/batch.rs
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::count::{LineCount, count_lines, count_lines_or_zero};
use crate::error::TallyError;

/// Result of the fail-fast batch pass.
///
/// `counts` holds one entry per file successfully processed before the first
/// open failure; `aborted` records the failure that cut the batch short, if
/// any. When `aborted` is `Some`, `counts` is a strict prefix of what a full
/// run would have produced.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub counts: Vec<LineCount>,
    pub aborted: Option<(PathBuf, TallyError)>,
}

impl BatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.aborted.is_none()
    }
}

/// Count lines in each file sequentially, stopping at the first file that
/// cannot be read.
///
/// This is the fail-fast contract: remaining files are abandoned and the
/// counts accumulated so far are returned as-is. The per-file handle is
/// scope-bound inside [`count_lines`], so the early return cannot leak it.
pub fn count_lines_in_files<P: AsRef<Path>>(files: &[P]) -> BatchOutcome {
    let mut counts = Vec::with_capacity(files.len());
    for file in files {
        let path = file.as_ref();
        match count_lines(path) {
            Ok(count) => counts.push(count),
            Err(e) => {
                return BatchOutcome {
                    counts,
                    aborted: Some((path.to_path_buf(), e)),
                };
            }
        }
    }
    BatchOutcome {
        counts,
        aborted: None,
    }
}

/// Apply the total per-file counter to each file independently.
///
/// The output always has the same length as the input, in input order; an
/// unreadable file contributes zero. No state is shared between files, so
/// this mapping is safe to reorder or parallelize.
pub fn count_lines_total<P: AsRef<Path>>(files: &[P]) -> Vec<LineCount> {
    files
        .iter()
        .map(|file| count_lines_or_zero(file.as_ref()))
        .collect()
}

/// Parallel form of [`count_lines_total`].
///
/// Files are fanned out across the rayon pool; the collect restores input
/// order, so the output is observably identical to the sequential mapping.
pub fn count_lines_parallel<P: AsRef<Path> + Sync>(files: &[P]) -> Vec<LineCount> {
    files
        .par_iter()
        .map(|file| count_lines_or_zero(file.as_ref()))
        .collect()
}

/// Lazy form of [`count_lines_total`]: no intermediate collection is
/// materialized, and a file is only opened when the consumer pulls its count.
pub fn lazy_counts<I, P>(files: I) -> impl Iterator<Item = LineCount>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    files
        .into_iter()
        .map(|file| count_lines_or_zero(file.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;

    fn fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn imperative_counts_all_files_in_order() {
        let dir = TempDir::new().unwrap();
        let a = fixture(&dir, "a.txt", "x\ny\nz");
        let b = fixture(&dir, "b.txt", "");

        let outcome = count_lines_in_files(&[a, b]);
        assert!(outcome.is_complete());
        assert_eq!(outcome.counts, vec![LineCount::new(2), LineCount::zero()]);
    }

    #[test]
    fn imperative_stops_at_first_unreadable_file() {
        let dir = TempDir::new().unwrap();
        let a = fixture(&dir, "a.txt", "x\ny\nz");
        let missing = dir.path().join("missing.txt");
        let c = fixture(&dir, "c.txt", "never\nreached\n");

        let outcome = count_lines_in_files(&[a, missing.clone(), c]);
        assert_eq!(outcome.counts, vec![LineCount::new(2)]);
        let (path, err) = outcome.aborted.expect("batch aborted");
        assert_eq!(path, missing);
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn total_mapping_keeps_input_length_and_order() {
        let dir = TempDir::new().unwrap();
        let a = fixture(&dir, "a.txt", "x\ny\nz");
        let missing = dir.path().join("missing.txt");
        let c = fixture(&dir, "c.txt", "one\n");

        let counts = count_lines_total(&[a, missing, c]);
        assert_eq!(
            counts,
            vec![LineCount::new(2), LineCount::zero(), LineCount::new(1)]
        );
    }

    #[test]
    fn parallel_matches_sequential_mapping() {
        let dir = TempDir::new().unwrap();
        let files: Vec<PathBuf> = (0..20)
            .map(|i| fixture(&dir, &format!("f{i}.txt"), &"line\n".repeat(i)))
            .collect();

        assert_eq!(count_lines_parallel(&files), count_lines_total(&files));
    }

    #[test]
    fn lazy_counts_pulls_one_path_per_consumed_count() {
        let dir = TempDir::new().unwrap();
        let a = fixture(&dir, "a.txt", "x\n");
        let b = fixture(&dir, "b.txt", "y\n");

        let pulled = Cell::new(0usize);
        let paths = [a, b].into_iter().inspect(|_| pulled.set(pulled.get() + 1));

        let first: Vec<LineCount> = lazy_counts(paths).take(1).collect();
        assert_eq!(first, vec![LineCount::new(1)]);
        assert_eq!(pulled.get(), 1);
    }
}
