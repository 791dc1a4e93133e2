//! Error types for catalog loading.
//!
//! | Variant | Raised by | Data problem? |
//! |---------|-----------|---------------|
//! | [`InvalidPath`](AthygError::InvalidPath) | file reader | Yes |
//! | [`FieldCountMismatch`](AthygError::FieldCountMismatch) | loader, per line | Yes |
//! | [`SizeMismatch`](AthygError::SizeMismatch) | fixed-width conversion | No (caller bug) |
//!
//! Per-field parse failures are never errors; they surface as `None` in the
//! record. Any error aborts the whole load and no records are returned.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AthygError {
    /// Source does not exist or its contents could not be read.
    #[error("Invalid path {path:?}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// A data line has fewer fields than the schema requires.
    #[error("Field count mismatch in {source_name} line {line}: expected {expected}, found {found}")]
    FieldCountMismatch {
        source_name: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Dynamic-to-fixed conversion received the wrong number of elements.
    #[error("Size mismatch: expected {expected} elements, found {found}")]
    SizeMismatch { expected: usize, found: usize },
}

pub type AthygResult<T> = Result<T, AthygError>;

impl AthygError {
    pub fn invalid_path(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn field_count_mismatch(
        source_name: impl Into<String>,
        line: usize,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::FieldCountMismatch {
            source_name: source_name.into(),
            line,
            expected,
            found,
        }
    }

    pub fn size_mismatch(expected: usize, found: usize) -> Self {
        Self::SizeMismatch { expected, found }
    }

    /// Returns `true` when the error was caused by the input data rather than
    /// by a broken caller contract.
    ///
    /// Only [`SizeMismatch`](Self::SizeMismatch) is a contract violation; the
    /// loader validates field counts before it ever materializes a row.
    pub fn is_data_error(&self) -> bool {
        match self {
            Self::InvalidPath { .. } | Self::FieldCountMismatch { .. } => true,
            Self::SizeMismatch { .. } => false,
        }
    }
}
