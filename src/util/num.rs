use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};

/// Converts a decimal to an integral type, truncating toward zero.
///
/// ## Errors
/// Returns `Err(error)` if the truncated value does not fit in `T`.
///
/// ## Parameters
/// - `value`: The decimal to convert.
/// - `error`: The error to return if the value is out of range.
///
/// ## Example
/// ```
/// use exprbind::util::num::decimal_to_integral_checked;
/// use rust_decimal::Decimal;
///
/// let d = Decimal::new(-2999, 1); // -299.9
/// assert_eq!(decimal_to_integral_checked::<i16, _>(d, "too big!"), Ok(-299));
/// assert!(decimal_to_integral_checked::<u8, _>(d, "too big!").is_err());
/// ```
pub fn decimal_to_integral_checked<T, E>(value: Decimal, error: E) -> Result<T, E>
    where T: TryFrom<i64>
{
    value.trunc()
         .to_i64()
         .and_then(|v| T::try_from(v).ok())
         .ok_or(error)
}

/// Converts a decimal to the nearest `f64`.
///
/// ## Errors
/// Returns `Err(error)` if no conversion is available.
pub fn decimal_to_f64_checked<E>(value: Decimal, error: E) -> Result<f64, E> {
    value.to_f64().ok_or(error)
}

/// Converts a decimal to the nearest `f32`.
///
/// ## Errors
/// Returns `Err(error)` if no conversion is available.
pub fn decimal_to_f32_checked<E>(value: Decimal, error: E) -> Result<f32, E> {
    value.to_f32().ok_or(error)
}

/// Converts an `f64` to a decimal.
///
/// ## Errors
/// Returns `Err(error)` for `NaN`, infinities and values beyond the decimal
/// range (about `±7.9e28`).
///
/// ## Example
/// ```
/// use exprbind::util::num::f64_to_decimal_checked;
///
/// assert!(f64_to_decimal_checked(2.5, ()).is_ok());
/// assert!(f64_to_decimal_checked(f64::NAN, ()).is_err());
/// assert!(f64_to_decimal_checked(1e30, ()).is_err());
/// ```
pub fn f64_to_decimal_checked<E>(value: f64, error: E) -> Result<Decimal, E> {
    Decimal::from_f64(value).ok_or(error)
}

/// Converts an `f32` to a decimal.
///
/// ## Errors
/// Returns `Err(error)` for `NaN`, infinities and values beyond the decimal
/// range.
pub fn f32_to_decimal_checked<E>(value: f32, error: E) -> Result<Decimal, E> {
    Decimal::from_f32(value).ok_or(error)
}
