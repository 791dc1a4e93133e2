//! Loaded catalogs whose version is chosen at runtime.

use crate::schema::{FieldSpec, Schema, SchemaVersion, V1, V2, V3};

/// Records from one load, tagged with their schema version.
#[derive(Debug, Clone, PartialEq)]
pub enum AthygCatalog {
    V1(Vec<V1>),
    V2(Vec<V2>),
    V3(Vec<V3>),
}

impl AthygCatalog {
    pub fn version(&self) -> SchemaVersion {
        match self {
            Self::V1(_) => SchemaVersion::V1,
            Self::V2(_) => SchemaVersion::V2,
            Self::V3(_) => SchemaVersion::V3,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::V1(records) => records.len(),
            Self::V2(records) => records.len(),
            Self::V3(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.version().fields()
    }

    /// Number of records holding a value, per column position.
    pub fn column_fill(&self) -> Vec<usize> {
        match self {
            Self::V1(records) => column_fill(records),
            Self::V2(records) => column_fill(records),
            Self::V3(records) => column_fill(records),
        }
    }
}

/// Counts, for each column of `S`, how many records hold a value there.
pub fn column_fill<S: Schema>(records: &[S]) -> Vec<usize> {
    let mut counts = vec![0; S::ELEMENT_COUNT];
    for record in records {
        for (position, count) in counts.iter_mut().enumerate() {
            if record.is_present(position) {
                *count += 1;
            }
        }
    }
    counts
}
