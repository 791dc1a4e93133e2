//! Text-to-value coercion for catalog fields.
//!
//! Every field coerces to an `Option`. `None` covers both "column empty" and
//! "column unparseable"; the two are never distinguished.
//!
//! | Kind | Rust types | Empty field | Unparseable field |
//! |------|------------|-------------|-------------------|
//! | [`UnsignedInt`](FieldKind::UnsignedInt) | `u8`..`u128`, `usize` | `None` | `None` |
//! | [`SignedInt`](FieldKind::SignedInt) | `i8`..`i128`, `isize` | `None` | `None` |
//! | [`Float`](FieldKind::Float) | `f32`, `f64` | `None` | `None` |
//! | [`Char`](FieldKind::Char) | `char` | `None` | n/a |
//! | [`Bool`](FieldKind::Bool) | `bool` | `Some(false)` | `Some(false)` |
//! | [`Text`](FieldKind::Text) | `String` | `Some("")` | n/a |
//!
//! # Numerals
//!
//! Numeric kinds read the longest base-10 numeral at the start of the field,
//! after skipping leading ASCII whitespace, and ignore whatever follows it:
//! `"12ab"` is `Some(12)` and `"4.5 mag"` is `Some(4.5)`. Parsing never
//! depends on the process locale.
//!
//! A numeral that was read is always present, even when it does not fit:
//!
//! - signed kinds saturate to `MIN` or `MAX` on overflow
//! - unsigned kinds saturate to `MAX`, and a leading `-` wraps the value
//!   (`"-1"` as `u8` is `Some(255)`)
//! - floats also accept C hexadecimal notation (`"0x1A"` is `26.0`,
//!   `"0x1.8p1"` is `3.0`)
//!
//! ```
//! use celestial_athyg::coerce::coerce;
//!
//! assert_eq!(coerce::<u64>("118322"), Some(118322));
//! assert_eq!(coerce::<f64>("-16.7131"), Some(-16.7131));
//! assert_eq!(coerce::<f64>(""), None);
//! assert_eq!(coerce::<String>(""), Some(String::new()));
//! assert_eq!(coerce::<bool>("T"), Some(true));
//! ```

use std::fmt;

/// Closed set of value kinds a catalog column can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    UnsignedInt,
    SignedInt,
    Float,
    Char,
    Bool,
    Text,
}

impl FieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::UnsignedInt => "unsigned",
            Self::SignedInt => "signed",
            Self::Float => "float",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::Text => "text",
        }
    }

    /// Whether an empty or unparseable field of this kind becomes `None`.
    pub fn can_be_absent(&self) -> bool {
        !matches!(self, Self::Bool | Self::Text)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A type a single field slice can be coerced into.
///
/// Implementations never panic and never fail loudly; malformed input is
/// reported only through the returned `Option`.
pub trait Coerce: Sized {
    const KIND: FieldKind;

    fn coerce(field: &str) -> Option<Self>;
}

/// Coerces one field into `T`. See the module docs for the per-kind rules.
#[inline]
pub fn coerce<T: Coerce>(field: &str) -> Option<T> {
    T::coerce(field)
}

macro_rules! impl_coerce_unsigned {
    ($($ty:ty),+) => {
        $(
            impl Coerce for $ty {
                const KIND: FieldKind = FieldKind::UnsignedInt;

                #[inline]
                fn coerce(field: &str) -> Option<Self> {
                    let numeral = leading_integer(field)?;
                    // Only overflow can fail: the digits are non-empty ASCII.
                    Some(match numeral.digits().parse::<$ty>() {
                        Ok(magnitude) if numeral.negative() => magnitude.wrapping_neg(),
                        Ok(magnitude) => magnitude,
                        Err(_) => <$ty>::MAX,
                    })
                }
            }
        )+
    };
}

macro_rules! impl_coerce_signed {
    ($($ty:ty),+) => {
        $(
            impl Coerce for $ty {
                const KIND: FieldKind = FieldKind::SignedInt;

                #[inline]
                fn coerce(field: &str) -> Option<Self> {
                    let numeral = leading_integer(field)?;
                    Some(match numeral.text.parse::<$ty>() {
                        Ok(value) => value,
                        Err(_) if numeral.negative() => <$ty>::MIN,
                        Err(_) => <$ty>::MAX,
                    })
                }
            }
        )+
    };
}

impl_coerce_unsigned!(u8, u16, u32, u64, u128, usize);
impl_coerce_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_coerce_float {
    ($($ty:ty),+) => {
        $(
            impl Coerce for $ty {
                const KIND: FieldKind = FieldKind::Float;

                #[inline]
                fn coerce(field: &str) -> Option<Self> {
                    match leading_float(field)? {
                        FloatPrefix::Decimal(text) => text.parse().ok(),
                        FloatPrefix::Hex(value) => Some(value as $ty),
                    }
                }
            }
        )+
    };
}

impl_coerce_float!(f32, f64);

impl Coerce for char {
    const KIND: FieldKind = FieldKind::Char;

    #[inline]
    fn coerce(field: &str) -> Option<Self> {
        field.chars().next()
    }
}

const TRUTHY: [&str; 3] = ["true", "t", "1"];

impl Coerce for bool {
    const KIND: FieldKind = FieldKind::Bool;

    /// Always `Some`: anything that is not a truthy token is `false`.
    #[inline]
    fn coerce(field: &str) -> Option<Self> {
        Some(TRUTHY.iter().any(|t| field.eq_ignore_ascii_case(t)))
    }
}

impl Coerce for String {
    const KIND: FieldKind = FieldKind::Text;

    #[inline]
    fn coerce(field: &str) -> Option<Self> {
        Some(field.to_owned())
    }
}

fn skip_leading_space(field: &str) -> &str {
    field.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digits_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// A `[+-]?[0-9]+` prefix of a field.
struct IntegerPrefix<'a> {
    text: &'a str,
    sign: usize,
}

impl<'a> IntegerPrefix<'a> {
    fn negative(&self) -> bool {
        self.text.starts_with('-')
    }

    fn digits(&self) -> &'a str {
        &self.text[self.sign..]
    }
}

fn leading_integer(field: &str) -> Option<IntegerPrefix<'_>> {
    let s = skip_leading_space(field);
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let digits = digits_len(&bytes[sign..]);
    (digits > 0).then(|| IntegerPrefix {
        text: &s[..sign + digits],
        sign,
    })
}

enum FloatPrefix<'a> {
    /// Decimal or special (`inf`, `nan`) text, ready for `str::parse`.
    Decimal(&'a str),
    /// Already-evaluated hexadecimal numeral.
    Hex(f64),
}

/// Longest floating-point prefix: decimal, `0x` hexadecimal, or `inf`,
/// `infinity` and `nan` in any case. An exponent marker only counts when
/// digits follow it.
fn leading_float(field: &str) -> Option<FloatPrefix<'_>> {
    let s = skip_leading_space(field);
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);

    if let Some(len) = special_float_len(&bytes[sign..]) {
        return Some(FloatPrefix::Decimal(&s[..sign + len]));
    }
    if let Some(magnitude) = hex_float(&bytes[sign..]) {
        let value = if bytes[0] == b'-' { -magnitude } else { magnitude };
        return Some(FloatPrefix::Hex(value));
    }

    let int_digits = digits_len(&bytes[sign..]);
    let mut end = sign + int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_len(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = sign_len(&bytes[end + 1..]);
        let exp_digits = digits_len(&bytes[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }
    Some(FloatPrefix::Decimal(&s[..end]))
}

/// Evaluates an unsigned `0x` numeral with optional fraction and binary
/// `p` exponent. `None` unless at least one hex digit follows the prefix,
/// in which case the caller reads the leading `0` as decimal.
fn hex_float(bytes: &[u8]) -> Option<f64> {
    if bytes.len() < 2 || bytes[0] != b'0' || !matches!(bytes[1], b'x' | b'X') {
        return None;
    }
    let mut pos = 2;
    let mut mantissa = 0.0f64;
    let mut digits = 0;
    while let Some(d) = bytes.get(pos).and_then(|&b| hex_digit(b)) {
        mantissa = mantissa * 16.0 + f64::from(d);
        digits += 1;
        pos += 1;
    }
    let mut scale = 0i32;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        while let Some(d) = bytes.get(pos).and_then(|&b| hex_digit(b)) {
            mantissa = mantissa * 16.0 + f64::from(d);
            scale -= 4;
            digits += 1;
            pos += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'p' | b'P')) {
        let rest = &bytes[pos + 1..];
        let exp_sign = sign_len(rest);
        let exp_digits = digits_len(&rest[exp_sign..]);
        if exp_digits > 0 {
            let exponent = rest[exp_sign..exp_sign + exp_digits]
                .iter()
                .fold(0i32, |acc, b| acc.saturating_mul(10).saturating_add(i32::from(b - b'0')));
            scale = if rest[0] == b'-' {
                scale.saturating_sub(exponent)
            } else {
                scale.saturating_add(exponent)
            };
        }
    }
    Some(mantissa * 2f64.powi(scale))
}

fn hex_digit(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

fn special_float_len(bytes: &[u8]) -> Option<usize> {
    ["infinity", "inf", "nan"]
        .iter()
        .find(|word| {
            bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word.as_bytes())
        })
        .map(|word| word.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_plain() {
        assert_eq!(coerce::<u64>("0"), Some(0));
        assert_eq!(coerce::<u64>("118322"), Some(118322));
        assert_eq!(coerce::<usize>("+42"), Some(42));
    }

    #[test]
    fn test_unsigned_empty_is_absent() {
        assert_eq!(coerce::<u64>(""), None);
        assert_eq!(coerce::<u32>("   "), None);
    }

    #[test]
    fn test_unsigned_minus_wraps() {
        assert_eq!(coerce::<u64>("-5"), Some(u64::MAX - 4));
        assert_eq!(coerce::<u8>("-1"), Some(255));
        assert_eq!(coerce::<u32>("-0"), Some(0));
    }

    #[test]
    fn test_unsigned_overflow_saturates() {
        assert_eq!(coerce::<u64>("18446744073709551616"), Some(u64::MAX));
        assert_eq!(coerce::<u8>("256"), Some(u8::MAX));
        assert_eq!(coerce::<u8>("255"), Some(255));
        assert_eq!(coerce::<u8>("-300"), Some(u8::MAX));
    }

    #[test]
    fn test_integer_trailing_garbage_ignored() {
        assert_eq!(coerce::<u64>("12ab"), Some(12));
        assert_eq!(coerce::<i32>("-7.9"), Some(-7));
        assert_eq!(coerce::<u64>("  33 "), Some(33));
    }

    #[test]
    fn test_integer_without_leading_numeral_is_absent() {
        assert_eq!(coerce::<u64>("abc"), None);
        assert_eq!(coerce::<i64>("-"), None);
        assert_eq!(coerce::<i64>("+"), None);
        assert_eq!(coerce::<i64>("x12"), None);
    }

    #[test]
    fn test_signed() {
        assert_eq!(coerce::<i64>("-42"), Some(-42));
        assert_eq!(coerce::<i16>("+17"), Some(17));
    }

    #[test]
    fn test_signed_overflow_saturates() {
        assert_eq!(coerce::<i8>("-129"), Some(i8::MIN));
        assert_eq!(coerce::<i8>("-128"), Some(i8::MIN));
        assert_eq!(coerce::<i8>("128"), Some(i8::MAX));
        assert_eq!(coerce::<i64>("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(coerce::<f64>("10.5"), Some(10.5));
        assert_eq!(coerce::<f64>("-0.25"), Some(-0.25));
        assert_eq!(coerce::<f64>(".5"), Some(0.5));
        assert_eq!(coerce::<f64>("5."), Some(5.0));
        assert_eq!(coerce::<f64>("1.5e3"), Some(1500.0));
        assert_eq!(coerce::<f64>("2E-2"), Some(0.02));
        assert_eq!(coerce::<f32>("5.2"), Some(5.2f32));
    }

    #[test]
    fn test_float_trailing_garbage_ignored() {
        assert_eq!(coerce::<f64>("4.5 mag"), Some(4.5));
        assert_eq!(coerce::<f64>("1e"), Some(1.0));
        assert_eq!(coerce::<f64>("1e+"), Some(1.0));
        assert_eq!(coerce::<f64>("3.0.1"), Some(3.0));
    }

    #[test]
    fn test_float_without_leading_numeral_is_absent() {
        assert_eq!(coerce::<f64>(""), None);
        assert_eq!(coerce::<f64>("."), None);
        assert_eq!(coerce::<f64>("-."), None);
        assert_eq!(coerce::<f64>("e5"), None);
        assert_eq!(coerce::<f64>("HIP"), None);
    }

    #[test]
    fn test_float_special_values() {
        assert_eq!(coerce::<f64>("inf"), Some(f64::INFINITY));
        assert_eq!(coerce::<f64>("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(coerce::<f64>("NaN").is_some_and(f64::is_nan));
        assert_eq!(coerce::<f64>("infx"), Some(f64::INFINITY));
    }

    #[test]
    fn test_float_hexadecimal() {
        assert_eq!(coerce::<f64>("0x1A"), Some(26.0));
        assert_eq!(coerce::<f64>("-0X10"), Some(-16.0));
        assert_eq!(coerce::<f64>("0x1.8p1"), Some(3.0));
        assert_eq!(coerce::<f64>("0x.8"), Some(0.5));
        assert_eq!(coerce::<f64>("0x1p-2"), Some(0.25));
        assert_eq!(coerce::<f32>("0xffzz"), Some(255.0f32));
        // Exponent marker without digits is not consumed.
        assert_eq!(coerce::<f64>("0x2p"), Some(2.0));
    }

    #[test]
    fn test_float_hex_prefix_without_digits_reads_zero() {
        assert_eq!(coerce::<f64>("0x"), Some(0.0));
        assert_eq!(coerce::<f64>("0xg"), Some(0.0));
    }

    #[test]
    fn test_float_is_locale_independent() {
        // A comma is never a decimal separator.
        assert_eq!(coerce::<f64>("10,5"), Some(10.0));
    }

    #[test]
    fn test_char() {
        assert_eq!(coerce::<char>("G2V"), Some('G'));
        assert_eq!(coerce::<char>("α Cen"), Some('α'));
        assert_eq!(coerce::<char>(""), None);
    }

    #[test]
    fn test_bool_truthy() {
        for token in ["true", "True", "TRUE", "T", "t", "1"] {
            assert_eq!(coerce::<bool>(token), Some(true), "token {:?}", token);
        }
    }

    #[test]
    fn test_bool_never_absent() {
        for token in ["false", "", "0", "xyz", "yes", "11"] {
            assert_eq!(coerce::<bool>(token), Some(false), "token {:?}", token);
        }
    }

    #[test]
    fn test_text_is_always_present() {
        assert_eq!(coerce::<String>(""), Some(String::new()));
        assert_eq!(coerce::<String>("Sirius"), Some("Sirius".to_string()));
        assert_eq!(coerce::<String>(" 12 "), Some(" 12 ".to_string()));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(<u64 as Coerce>::KIND, FieldKind::UnsignedInt);
        assert_eq!(<i32 as Coerce>::KIND, FieldKind::SignedInt);
        assert_eq!(<f64 as Coerce>::KIND, FieldKind::Float);
        assert_eq!(<char as Coerce>::KIND, FieldKind::Char);
        assert_eq!(<bool as Coerce>::KIND, FieldKind::Bool);
        assert_eq!(<String as Coerce>::KIND, FieldKind::Text);
    }

    #[test]
    fn test_can_be_absent() {
        assert!(FieldKind::Float.can_be_absent());
        assert!(FieldKind::Char.can_be_absent());
        assert!(!FieldKind::Bool.can_be_absent());
        assert!(!FieldKind::Text.can_be_absent());
    }
}
