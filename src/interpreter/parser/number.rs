use std::str::FromStr;

use rust_decimal::Decimal;

use crate::interpreter::value::Value;

/// Characters whose presence turns a literal into a real number.
const REAL_MARKERS: [char; 9] = ['.', 'e', 'E', 'f', 'F', 'd', 'D', 'm', 'M'];

/// Interprets the raw lexeme of a number token.
///
/// Three forms are recognised, tried in this order:
///
/// - **Hexadecimal**: `0x`/`0X` prefix, optional `l`/`L` suffix for `Int64`,
///   otherwise `Int32`. The digits give the bit pattern, so `0xFFFFFFFF` is
///   `-1`.
/// - **Real**: the lexeme contains `.`, `e`, `E` or a type suffix. A trailing
///   `d`/`D` selects `Double`, `f`/`F` `Single`, `m`/`M` `Decimal`; no suffix
///   means `Double`.
/// - **Integral**: optional `l`/`L` suffix for `Int64`, otherwise `Int32`.
///
/// # Returns
/// The literal value, or `None` if the lexeme is malformed (`123abc`, `1e`,
/// `3000000000` without `L`) or out of range for its type (`1e400`,
/// `1e40f`).
///
/// # Example
/// ```
/// use exprbind::interpreter::{parser::number::parse_number, value::Value};
///
/// assert_eq!(parse_number("42"), Some(Value::Int32(42)));
/// assert_eq!(parse_number("42L"), Some(Value::Int64(42)));
/// assert_eq!(parse_number("0x1F"), Some(Value::Int32(31)));
/// assert_eq!(parse_number("4.34e3f"), Some(Value::Single(4340.0)));
/// assert_eq!(parse_number("3d"), Some(Value::Double(3.0)));
/// assert_eq!(parse_number("123abc"), None);
/// assert_eq!(parse_number("1e400"), None);
/// ```
#[must_use]
pub fn parse_number(lexeme: &str) -> Option<Value> {
    if let Some(digits) = lexeme.strip_prefix("0x").or_else(|| lexeme.strip_prefix("0X")) {
        return parse_hex(digits);
    }
    if lexeme.contains(REAL_MARKERS) {
        return parse_real(lexeme);
    }
    parse_integral(lexeme)
}

fn strip_long_suffix(lexeme: &str) -> (&str, bool) {
    lexeme.strip_suffix(['l', 'L'])
          .map_or((lexeme, false), |digits| (digits, true))
}

#[allow(clippy::cast_possible_wrap)]
fn parse_hex(digits: &str) -> Option<Value> {
    let (digits, long) = strip_long_suffix(digits);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    if long {
        u64::from_str_radix(digits, 16).ok()
                                       .map(|bits| Value::Int64(bits as i64))
    } else {
        u32::from_str_radix(digits, 16).ok()
                                       .map(|bits| Value::Int32(bits as i32))
    }
}

fn parse_real(lexeme: &str) -> Option<Value> {
    let (digits, suffix) = match lexeme.chars().last() {
        // The suffixes are ASCII, so dropping one byte removes exactly one char.
        Some(c @ ('d' | 'D' | 'f' | 'F' | 'm' | 'M')) => (&lexeme[..lexeme.len() - 1], Some(c)),
        _ => (lexeme, None),
    };

    // `str::parse` saturates to infinity instead of failing, so out-of-range
    // literals are rejected here.
    match suffix {
        Some('f' | 'F') => digits.parse::<f32>()
                                 .ok()
                                 .filter(|v| v.is_finite())
                                 .map(Value::Single),
        Some('m' | 'M') => parse_decimal(digits).map(Value::Decimal),
        _ => digits.parse::<f64>()
                   .ok()
                   .filter(|v| v.is_finite())
                   .map(Value::Double),
    }
}

fn parse_decimal(digits: &str) -> Option<Decimal> {
    if digits.contains(['e', 'E']) {
        Decimal::from_scientific(digits).ok()
    } else {
        Decimal::from_str(digits).ok()
    }
}

fn parse_integral(lexeme: &str) -> Option<Value> {
    let (digits, long) = strip_long_suffix(lexeme);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if long {
        digits.parse().ok().map(Value::Int64)
    } else {
        digits.parse().ok().map(Value::Int32)
    }
}
