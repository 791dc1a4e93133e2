//! Record schemas for the three ATHYG releases.
//!
//! A schema is a fixed, compile-time mapping from column position to
//! (attribute, value kind). The header row of a catalog file is never
//! consulted; column order comes only from these declarations.
//!
//! | Version | Columns | Adds |
//! |---------|---------|------|
//! | [`V1`] | 23 | identifiers, position, distance, magnitudes |
//! | [`V2`] | 33 | radial velocity, proper motion, space velocity, spectral type |
//! | [`V3`] | 34 | color index `ci` between `absmag` and `mag_src` |
//!
//! Each record type is declared once with `athyg_schema!`, which produces the
//! struct, its [`FieldSpec`] table and the [`Schema`] implementation from the
//! same column list, so the table and the constructor cannot drift apart.

use crate::coerce::FieldKind;
use crate::fixed::FixedRow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

macro_rules! athyg_schema {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $version:ident [$count:literal] {
            $(
                $(#[$field_meta:meta])*
                $idx:literal => $field:ident : $ty:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: Option<$ty>,
            )+
        }

        impl $crate::schema::Schema for $name {
            const VERSION: $crate::schema::SchemaVersion = $crate::schema::SchemaVersion::$version;
            const ELEMENT_COUNT: usize = $count;
            const FIELDS: &'static [$crate::schema::FieldSpec] = &[
                $(
                    $crate::schema::FieldSpec {
                        position: $idx,
                        name: stringify!($field),
                        kind: <$ty as $crate::coerce::Coerce>::KIND,
                    },
                )+
            ];

            type Row<'a> = [&'a str; $count];

            fn from_row(row: Self::Row<'_>) -> Self {
                Self {
                    $( $field: <$ty as $crate::coerce::Coerce>::coerce(row[$idx]), )+
                }
            }

            fn is_present(&self, position: usize) -> bool {
                match position {
                    $( $idx => self.$field.is_some(), )+
                    _ => false,
                }
            }
        }

        const _: () = assert!(
            $crate::schema::is_contiguous(<$name as $crate::schema::Schema>::FIELDS, $count)
        );
    };
}

mod v1;
mod v2;
mod v3;

pub use v1::V1;
pub use v2::V2;
pub use v3::V3;

/// One column of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// 0-based column position in a data line.
    pub position: usize,
    /// Attribute name on the record struct.
    pub name: &'static str,
    pub kind: FieldKind,
}

/// A catalog record type with a fixed column layout.
///
/// Construction from a row of the right width is infallible; the width
/// itself is checked by [`FixedRow::from_fields`] before a row exists.
pub trait Schema: Sized + Send + fmt::Debug {
    const VERSION: SchemaVersion;
    const ELEMENT_COUNT: usize;
    /// Column table, ordered by position, covering `0..ELEMENT_COUNT`.
    const FIELDS: &'static [FieldSpec];

    /// Borrowed fields of one data line, exactly `ELEMENT_COUNT` wide.
    type Row<'a>: FixedRow<'a>;

    /// Builds a record by coercing each column according to [`Self::FIELDS`].
    /// Text columns are copied out of the row.
    fn from_row(row: Self::Row<'_>) -> Self;

    /// Whether the column at `position` holds a value. Out-of-range
    /// positions are never present.
    fn is_present(&self, position: usize) -> bool;
}

/// Checks that `fields` lists positions `0..count` in order.
pub(crate) const fn is_contiguous(fields: &[FieldSpec], count: usize) -> bool {
    if fields.len() != count {
        return false;
    }
    let mut i = 0;
    while i < fields.len() {
        if fields[i].position != i {
            return false;
        }
        i += 1;
    }
    true
}

/// ATHYG release selector for loads whose version is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    V1,
    V2,
    V3,
}

impl SchemaVersion {
    pub const ALL: [SchemaVersion; 3] = [Self::V1, Self::V2, Self::V3];

    pub fn element_count(&self) -> usize {
        match self {
            Self::V1 => V1::ELEMENT_COUNT,
            Self::V2 => V2::ELEMENT_COUNT,
            Self::V3 => V3::ELEMENT_COUNT,
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::V1 => V1::FIELDS,
            Self::V2 => V2::FIELDS,
            Self::V3 => V3::FIELDS,
        }
    }

    /// Looks up a column by attribute name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("V1"),
            Self::V2 => f.write_str("V2"),
            Self::V3 => f.write_str("V3"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown ATHYG version '{0}' (expected v1, v2 or v3)")]
pub struct UnknownVersion(pub String);

impl FromStr for SchemaVersion {
    type Err = UnknownVersion;

    /// Accepts `v1`, `V1` or `1` (and likewise for 2 and 3).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        match digits {
            "1" => Ok(Self::V1),
            "2" => Ok(Self::V2),
            "3" => Ok(Self::V3),
            _ => Err(UnknownVersion(s.to_string())),
        }
    }
}
