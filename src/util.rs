/// Numeric conversion helpers.
///
/// This module provides checked conversions between `Decimal` and the
/// primitive numeric types. Every function returns a `Result` that is `Ok`
/// when the value fits the target type and the supplied error otherwise.
pub mod num;
