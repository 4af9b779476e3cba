// src/count.rs
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// Number of newline byte occurrences in a file's content.
///
/// A final unterminated line is not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineCount(usize);

impl LineCount {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for LineCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for LineCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for LineCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for LineCount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for LineCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl From<usize> for LineCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

/// Count newline bytes in the file at `path`.
///
/// The file is scanned in a single linear pass through a buffered reader;
/// the handle is dropped on every exit path, including errors.
///
/// # Errors
///
/// Returns [`TallyError::FileRead`] if the file cannot be opened or a read
/// fails partway through.
pub fn count_lines(path: &Path) -> Result<LineCount> {
    let file = File::open(path).map_err(|e| TallyError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);
    let mut lines = 0usize;

    loop {
        let buf = reader.fill_buf().map_err(|e| TallyError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if buf.is_empty() {
            break;
        }
        lines += bytecount::count(buf, b'\n');
        let len = buf.len();
        reader.consume(len);
    }

    Ok(LineCount::new(lines))
}

/// Total-mapping shape of [`count_lines`]: an unreadable file yields zero,
/// indistinguishable from an empty file. Callers that need to tell the two
/// apart must use [`count_lines`] directly.
pub fn count_lines_or_zero(path: &Path) -> LineCount {
    count_lines(path).unwrap_or_default()
}
