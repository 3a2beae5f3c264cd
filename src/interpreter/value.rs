/// Type tags.
///
/// Defines `ValueType`, the tag of every runtime value, together with the
/// numeric ranks used for promotion and the type names accepted by casts.
pub mod value_type;
/// Numeric promotion.
///
/// Widens a pair of numeric operands to their common type before a binary
/// operator is applied, and implements the arithmetic, comparison and bitwise
/// primitives for every promoted width.
pub mod promotion;

pub mod core;

pub use self::core::Value;

pub use promotion::Promoted;
pub use value_type::ValueType;
