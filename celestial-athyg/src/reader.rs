//! Raw text sources for the loader.
//!
//! The loader never touches the filesystem directly. It asks a
//! [`FileReader`] for the complete text of each source, and any failure to
//! produce that text becomes [`AthygError::InvalidPath`].

use crate::error::{AthygError, AthygResult};
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Returns the full text content of a catalog source.
pub trait FileReader: Send + Sync {
    fn read_all_text(&self, path: &Path) -> AthygResult<String>;
}

/// Reads sources from the local filesystem.
///
/// Paths ending in `.gz` are decompressed on the fly; the upstream ATHYG
/// releases ship as gzipped CSV parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read_all_text(&self, path: &Path) -> AthygResult<String> {
        if !path.exists() {
            return Err(AthygError::invalid_path(path, "file not found"));
        }
        if !path.is_file() {
            return Err(AthygError::invalid_path(path, "not a regular file"));
        }
        let file = File::open(path)
            .map_err(|e| AthygError::invalid_path(path, format!("cannot open: {}", e)))?;

        let mut text = String::new();
        let result = if is_gzip(path) {
            GzDecoder::new(BufReader::new(file)).read_to_string(&mut text)
        } else {
            BufReader::new(file).read_to_string(&mut text)
        };
        result.map_err(|e| AthygError::invalid_path(path, format!("cannot read: {}", e)))?;

        tracing::trace!(path = %path.display(), bytes = text.len(), "read source");
        Ok(text)
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Serves sources from memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    sources: HashMap<PathBuf, String>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.sources.insert(path.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl FileReader for MemoryReader {
    fn read_all_text(&self, path: &Path) -> AthygResult<String> {
        self.sources
            .get(path)
            .cloned()
            .ok_or_else(|| AthygError::invalid_path(path, "no such in-memory source"))
    }
}
