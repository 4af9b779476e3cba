// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TallyError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::FileRead { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
