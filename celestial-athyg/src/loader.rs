//! Multi-source catalog loading.
//!
//! For every source the loader reads the full text, drops the first line
//! (the header, never parsed), then turns each remaining line into one
//! record:
//!
//! 1. split on the delimiter, sized for `ELEMENT_COUNT` fields
//! 2. drop any fields past `ELEMENT_COUNT`
//! 3. fail the whole load if fewer than `ELEMENT_COUNT` remain
//! 4. move the fields into a fixed-width row and build the record
//!
//! Loads are all-or-nothing. The first bad line or unreadable source aborts
//! the load and no records from any source are returned.
//!
//! Sources are independent, so with [`LoaderConfig::parallel`] they are
//! parsed on the rayon pool. The result is the same either way: records in
//! source-list order, then line order, never interleaved across sources.
//!
//! ```no_run
//! use celestial_athyg::{load, V3};
//!
//! let stars: Vec<V3> = load(&["athyg_v32-1.csv.gz", "athyg_v32-2.csv.gz"])?;
//! # Ok::<(), celestial_athyg::AthygError>(())
//! ```

use crate::catalog::AthygCatalog;
use crate::error::{AthygError, AthygResult};
use crate::fixed::FixedRow;
use crate::progress::{NoopObserver, ProgressObserver};
use crate::reader::{FileReader, FsReader};
use crate::schema::{Schema, SchemaVersion, V1, V2, V3};
use crate::split::split_fields;
use rayon::prelude::*;
use std::path::Path;

/// Source name used in errors for text handed to [`parse_text`].
const INLINE_SOURCE: &str = "<inline>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Field delimiter. ATHYG files use `,`.
    pub delimiter: char,
    /// Parse sources concurrently on the rayon pool.
    pub parallel: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            parallel: true,
        }
    }
}

/// Catalog loader with pluggable text source and progress observer.
///
/// The default loader reads from the filesystem ([`FsReader`]) and reports
/// nothing ([`NoopObserver`]).
#[derive(Debug, Clone, Default)]
pub struct Loader<R = FsReader, O = NoopObserver> {
    reader: R,
    observer: O,
    config: LoaderConfig,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: FileReader, O: ProgressObserver> Loader<R, O> {
    pub fn with_reader<R2: FileReader>(self, reader: R2) -> Loader<R2, O> {
        Loader {
            reader,
            observer: self.observer,
            config: self.config,
        }
    }

    pub fn with_observer<O2: ProgressObserver>(self, observer: O2) -> Loader<R, O2> {
        Loader {
            reader: self.reader,
            observer,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads every source in `paths` as schema `S` into one vector.
    ///
    /// # Errors
    /// [`AthygError::InvalidPath`] if a source cannot be read,
    /// [`AthygError::FieldCountMismatch`] if any data line is short.
    pub fn load<S, P>(&self, paths: &[P]) -> AthygResult<Vec<S>>
    where
        S: Schema,
        P: AsRef<Path> + Sync,
    {
        let batches: Vec<Vec<S>> = if self.config.parallel && paths.len() > 1 {
            paths
                .par_iter()
                .map(|path| self.load_source(path.as_ref()))
                .collect::<AthygResult<_>>()?
        } else {
            paths
                .iter()
                .map(|path| self.load_source(path.as_ref()))
                .collect::<AthygResult<_>>()?
        };

        let total = batches.iter().map(Vec::len).sum();
        let mut records = Vec::with_capacity(total);
        for batch in batches {
            records.extend(batch);
        }
        tracing::debug!(
            version = %S::VERSION,
            sources = paths.len(),
            records = records.len(),
            "catalog loaded"
        );
        Ok(records)
    }

    /// Like [`load`](Self::load) with the schema picked at runtime.
    pub fn load_version<P>(&self, version: SchemaVersion, paths: &[P]) -> AthygResult<AthygCatalog>
    where
        P: AsRef<Path> + Sync,
    {
        Ok(match version {
            SchemaVersion::V1 => AthygCatalog::V1(self.load::<V1, P>(paths)?),
            SchemaVersion::V2 => AthygCatalog::V2(self.load::<V2, P>(paths)?),
            SchemaVersion::V3 => AthygCatalog::V3(self.load::<V3, P>(paths)?),
        })
    }

    fn load_source<S: Schema>(&self, path: &Path) -> AthygResult<Vec<S>> {
        self.observer.source_started(path);
        let text = self.reader.read_all_text(path)?;
        let records = parse_source(&text, self.config.delimiter, &path.display().to_string())?;
        self.observer.source_finished(path, records.len());
        Ok(records)
    }
}

/// Loads `paths` from the filesystem as schema `S` with the default config.
pub fn load<S, P>(paths: &[P]) -> AthygResult<Vec<S>>
where
    S: Schema,
    P: AsRef<Path> + Sync,
{
    Loader::new().load(paths)
}

/// Loads `paths` from the filesystem with a runtime-selected schema.
pub fn load_version<P>(version: SchemaVersion, paths: &[P]) -> AthygResult<AthygCatalog>
where
    P: AsRef<Path> + Sync,
{
    Loader::new().load_version(version, paths)
}

/// Parses already-loaded catalog text, header line included.
pub fn parse_text<S: Schema>(text: &str, delimiter: char) -> AthygResult<Vec<S>> {
    parse_source(text, delimiter, INLINE_SOURCE)
}

fn parse_source<S: Schema>(text: &str, delimiter: char, source_name: &str) -> AthygResult<Vec<S>> {
    // `lines` also strips a trailing '\r', so CRLF files parse like LF files.
    let mut lines = text.lines();
    if lines.next().is_none() {
        tracing::trace!(source = source_name, "empty source");
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        // +2: 1-based, and the header was line 1.
        records.push(parse_line::<S>(line, delimiter, source_name, index + 2)?);
    }
    Ok(records)
}

fn parse_line<'a, S: Schema>(
    line: &'a str,
    delimiter: char,
    source_name: &str,
    line_number: usize,
) -> AthygResult<S> {
    let mut fields = split_fields(line, delimiter, S::ELEMENT_COUNT);
    fields.truncate(S::ELEMENT_COUNT);
    if fields.len() != S::ELEMENT_COUNT {
        return Err(AthygError::field_count_mismatch(
            source_name,
            line_number,
            S::ELEMENT_COUNT,
            fields.len(),
        ));
    }
    let row = <S::Row<'a> as FixedRow<'a>>::from_fields(fields)?;
    Ok(S::from_row(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::RecordingObserver;
    use crate::reader::MemoryReader;

    const V1_HEADER: &str = "id,tyc,gaia,hyg,hip,hd,hr,gl,bayer,flam,con,proper,ra,dec,pos_src,dist,x0,y0,z0,dist_src,mag,absmag,mag_src";

    fn v1_line(id: u64) -> String {
        format!("{},,,,,,,,,,,,10.5,20.5,,,,,,,5.2,,", id)
    }

    fn v1_text(ids: &[u64]) -> String {
        let mut text = String::from(V1_HEADER);
        for id in ids {
            text.push('\n');
            text.push_str(&v1_line(*id));
        }
        text
    }

    #[test]
    fn test_header_only() {
        let stars: Vec<V1> = parse_text(V1_HEADER, ',').unwrap();
        assert!(stars.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let stars: Vec<V1> = parse_text("", ',').unwrap();
        assert!(stars.is_empty());
    }

    #[test]
    fn test_header_is_not_parsed() {
        // A header with the wrong width is still fine.
        let text = format!("garbage\n{}", v1_line(5));
        let stars: Vec<V1> = parse_text(&text, ',').unwrap();
        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].id, Some(5));
    }

    #[test]
    fn test_last_line_without_newline() {
        let stars: Vec<V1> = parse_text(&v1_text(&[1, 2]), ',').unwrap();
        assert_eq!(stars.len(), 2);
        assert_eq!(stars[1].id, Some(2));
    }

    #[test]
    fn test_trailing_newline_adds_no_record() {
        let text = format!("{}\n", v1_text(&[1]));
        let stars: Vec<V1> = parse_text(&text, ',').unwrap();
        assert_eq!(stars.len(), 1);
    }

    #[test]
    fn test_crlf_lines() {
        let text = v1_text(&[1, 2]).replace('\n', "\r\n");
        let stars: Vec<V1> = parse_text(&text, ',').unwrap();
        assert_eq!(stars.len(), 2);
        assert_eq!(stars[0].mag_src.as_deref(), Some(""));
    }

    #[test]
    fn test_extra_fields_truncated() {
        let text = format!("h\n{},EXTRA,99", v1_line(3));
        let stars: Vec<V1> = parse_text(&text, ',').unwrap();
        assert_eq!(stars[0].mag_src.as_deref(), Some(""));
    }

    #[test]
    fn test_short_line_reports_line_number() {
        let text = format!("h\n{}\n1,2,3", v1_line(1));
        let err = parse_text::<V1>(&text, ',').unwrap_err();
        match err {
            AthygError::FieldCountMismatch {
                source_name,
                line,
                expected,
                found,
            } => {
                assert_eq!(source_name, INLINE_SOURCE);
                assert_eq!(line, 3);
                assert_eq!(expected, 23);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_blank_data_line_is_fatal() {
        let text = format!("h\n{}\n\n{}", v1_line(1), v1_line(2));
        assert!(matches!(
            parse_text::<V1>(&text, ','),
            Err(AthygError::FieldCountMismatch { found: 1, .. })
        ));
    }

    #[test]
    fn test_custom_delimiter() {
        let text = format!("h\n{}", v1_line(9).replace(',', "|"));
        let stars: Vec<V1> = parse_text(&text, '|').unwrap();
        assert_eq!(stars[0].id, Some(9));
        assert_eq!(stars[0].ra, Some(10.5));
    }

    fn memory_loader() -> Loader<MemoryReader> {
        let reader = MemoryReader::new()
            .with_source("a.csv", v1_text(&[1, 2]))
            .with_source("b.csv", v1_text(&[3]))
            .with_source("short.csv", format!("{}\n1,2", V1_HEADER));
        Loader::new().with_reader(reader)
    }

    #[test]
    fn test_sources_concatenate_in_order() {
        for parallel in [false, true] {
            let stars: Vec<V1> = memory_loader()
                .parallel(parallel)
                .load(&["a.csv", "b.csv"])
                .unwrap();
            let ids: Vec<_> = stars.iter().map(|s| s.id).collect();
            assert_eq!(ids, vec![Some(1), Some(2), Some(3)], "parallel={}", parallel);
        }
    }

    #[test]
    fn test_reverse_source_order() {
        let stars: Vec<V1> = memory_loader().load(&["b.csv", "a.csv"]).unwrap();
        let ids: Vec<_> = stars.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn test_failure_discards_earlier_sources() {
        for parallel in [false, true] {
            let result = memory_loader()
                .parallel(parallel)
                .load::<V1, _>(&["a.csv", "short.csv", "b.csv"]);
            match result {
                Err(AthygError::FieldCountMismatch { source_name, .. }) => {
                    assert_eq!(source_name, "short.csv")
                }
                other => panic!("unexpected result: {:?}", other.map(|v| v.len())),
            }
        }
    }

    #[test]
    fn test_missing_source_is_invalid_path() {
        let result = memory_loader().load::<V1, _>(&["a.csv", "nope.csv"]);
        assert!(matches!(result, Err(AthygError::InvalidPath { .. })));
    }

    #[test]
    fn test_no_sources() {
        let stars: Vec<V1> = memory_loader().load::<V1, &str>(&[]).unwrap();
        assert!(stars.is_empty());
    }

    #[test]
    fn test_observer_sees_each_source() {
        let recorder = RecordingObserver::default();
        let loader = memory_loader().parallel(false).with_observer(&recorder);
        let _: Vec<V1> = loader.load(&["a.csv", "b.csv"]).unwrap();
        assert_eq!(
            recorder.events(),
            vec!["start a.csv", "done a.csv 2", "start b.csv", "done b.csv 1"]
        );
    }

    #[test]
    fn test_observer_not_finished_on_failure() {
        let recorder = RecordingObserver::default();
        let loader = memory_loader().parallel(false).with_observer(&recorder);
        assert!(loader.load::<V1, _>(&["short.csv"]).is_err());
        assert_eq!(recorder.events(), vec!["start short.csv"]);
    }

    #[test]
    fn test_load_version_dispatch() {
        let catalog = memory_loader()
            .load_version(SchemaVersion::V1, &["a.csv"])
            .unwrap();
        assert_eq!(catalog.version(), SchemaVersion::V1);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_v1_rows_are_too_short_for_v2() {
        let result = memory_loader().load_version(SchemaVersion::V2, &["a.csv"]);
        assert!(matches!(
            result,
            Err(AthygError::FieldCountMismatch {
                expected: 33,
                found: 23,
                ..
            })
        ));
    }

    #[test]
    fn test_config_builders() {
        let loader = Loader::new().delimiter(';').parallel(false);
        assert_eq!(
            *loader.config(),
            LoaderConfig {
                delimiter: ';',
                parallel: false
            }
        );
        let loader = loader.with_config(LoaderConfig::default());
        assert_eq!(loader.config().delimiter, ',');
        assert!(loader.config().parallel);
    }
}
