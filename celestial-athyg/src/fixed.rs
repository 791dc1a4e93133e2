//! Dynamic-to-fixed width conversion.

use crate::error::{AthygError, AthygResult};

/// Moves the elements of `values` into an array of exactly `N` elements.
///
/// Never pads or truncates: any length other than `N` is a
/// [`SizeMismatch`](AthygError::SizeMismatch).
pub fn to_fixed<T, const N: usize>(values: Vec<T>) -> AthygResult<[T; N]> {
    <[T; N]>::try_from(values).map_err(|rejected| AthygError::size_mismatch(N, rejected.len()))
}

/// A fixed-width row of borrowed fields that a [`Schema`](crate::schema::Schema)
/// is constructed from.
pub trait FixedRow<'a>: Sized {
    const WIDTH: usize;

    fn from_fields(fields: Vec<&'a str>) -> AthygResult<Self>;
}

impl<'a, const N: usize> FixedRow<'a> for [&'a str; N] {
    const WIDTH: usize = N;

    fn from_fields(fields: Vec<&'a str>) -> AthygResult<Self> {
        to_fixed(fields)
    }
}
