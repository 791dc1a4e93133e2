//! Single-character field splitting.
//!
//! Every delimiter is a field boundary. There is no quoting or escaping, so a
//! delimiter inside a text value splits that value in two.

/// Splits `line` on every `delimiter`, borrowing each field from `line`.
///
/// Adjacent delimiters produce empty fields and the segment after the last
/// delimiter is always emitted, so a line with `k` delimiters always yields
/// `k + 1` fields. `capacity_hint` pre-sizes the output and has no effect on
/// the result.
pub fn split_fields(line: &str, delimiter: char, capacity_hint: usize) -> Vec<&str> {
    let mut fields = Vec::with_capacity(capacity_hint);
    fields.extend(line.split(delimiter));
    fields
}
