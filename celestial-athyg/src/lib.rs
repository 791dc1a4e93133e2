//! Typed deserialization of the ATHYG star catalog.
//!
//! [ATHYG](https://github.com/astronexus/ATHYG-Database) merges the AT-HYG,
//! Tycho-2, Gaia DR3 and Hipparcos catalogs into one comma-separated file
//! per release. This crate loads those files into strongly typed records,
//! one struct per release, with every column an `Option`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`split`] | Single-character field splitting, borrowing from the line |
//! | [`coerce`] | Field text to `Option<T>` ([`Coerce`], [`FieldKind`]) |
//! | [`fixed`] | `Vec` to fixed-width array, size checked |
//! | [`schema`] | [`V1`], [`V2`], [`V3`] record types and their column tables |
//! | [`loader`] | [`Loader`], [`load`], [`parse_text`] |
//! | [`reader`] | [`FileReader`] sources: filesystem (with `.gz`) and in-memory |
//! | [`progress`] | [`ProgressObserver`] per-source notifications |
//! | [`catalog`] | [`AthygCatalog`] for versions picked at runtime |
//!
//! # Quick Start
//!
//! ```no_run
//! use celestial_athyg::{load, V3};
//!
//! let stars: Vec<V3> = load(&["athyg_v32-1.csv.gz", "athyg_v32-2.csv.gz"])?;
//! let named = stars.iter().filter(|s| s.proper.as_deref().is_some_and(|p| !p.is_empty()));
//! println!("{} named stars", named.count());
//! # Ok::<(), celestial_athyg::AthygError>(())
//! ```
//!
//! # Missing values
//!
//! Numeric columns are `None` when blank or unparseable. Text columns are
//! always `Some`, holding `""` when blank. The header row is skipped without
//! being read; column positions come from the schema alone.
//!
//! # Features
//!
//! - **`cli`** enables the `athyg` binary for describing schemas and
//!   summarizing catalog files.

pub mod catalog;
pub mod coerce;
pub mod error;
pub mod fixed;
pub mod loader;
pub mod progress;
pub mod reader;
pub mod schema;
pub mod split;

pub use catalog::AthygCatalog;
pub use coerce::{Coerce, FieldKind};
pub use error::{AthygError, AthygResult};
pub use loader::{load, load_version, parse_text, Loader, LoaderConfig};
pub use progress::{NoopObserver, ProgressObserver, TracingObserver};
pub use reader::{FileReader, FsReader, MemoryReader};
pub use schema::{FieldSpec, Schema, SchemaVersion, V1, V2, V3};
