/// The tag of a runtime [`Value`](super::Value).
///
/// Every non-null tag is also a valid cast target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean,
    /// UTF-8 text.
    String,
    /// 8-bit unsigned integer.
    Byte,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit IEEE float.
    Single,
    /// 64-bit IEEE float.
    Double,
    /// 96-bit scaled decimal.
    Decimal,
}

/// Cast target names, short form first.
const CAST_NAMES: [(&str, ValueType); 18] = [("bool", ValueType::Boolean),
                                             ("Boolean", ValueType::Boolean),
                                             ("string", ValueType::String),
                                             ("String", ValueType::String),
                                             ("byte", ValueType::Byte),
                                             ("Byte", ValueType::Byte),
                                             ("short", ValueType::Int16),
                                             ("Int16", ValueType::Int16),
                                             ("int", ValueType::Int32),
                                             ("Int32", ValueType::Int32),
                                             ("long", ValueType::Int64),
                                             ("Int64", ValueType::Int64),
                                             ("float", ValueType::Single),
                                             ("Single", ValueType::Single),
                                             ("double", ValueType::Double),
                                             ("Double", ValueType::Double),
                                             ("decimal", ValueType::Decimal),
                                             ("Decimal", ValueType::Decimal)];

impl ValueType {
    /// Resolves the word used inside a cast, e.g. `(int)` or `(Int32)`.
    ///
    /// Matching is exact; `Int` or `INT` are not accepted.
    ///
    /// # Example
    /// ```
    /// use exprbind::interpreter::value::ValueType;
    ///
    /// assert_eq!(ValueType::from_cast_name("short"), Some(ValueType::Int16));
    /// assert_eq!(ValueType::from_cast_name("Decimal"), Some(ValueType::Decimal));
    /// assert_eq!(ValueType::from_cast_name("fubar"), None);
    /// ```
    #[must_use]
    pub fn from_cast_name(name: &str) -> Option<Self> {
        CAST_NAMES.iter()
                  .find(|(candidate, _)| *candidate == name)
                  .map(|(_, ty)| *ty)
    }

    /// The short keyword used to spell this type in a cast.
    #[must_use]
    pub const fn cast_name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "bool",
            Self::String => "string",
            Self::Byte => "byte",
            Self::Int16 => "short",
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::Single => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
        }
    }

    /// Position in the promotion order, or `None` for non-numeric types.
    ///
    /// Decimal sits above the integral ranks but is handled as its own family:
    /// it does not combine with `Single` or `Double`.
    #[must_use]
    pub const fn numeric_rank(self) -> Option<u8> {
        match self {
            Self::Byte => Some(0),
            Self::Int16 => Some(1),
            Self::Int32 => Some(2),
            Self::Int64 => Some(3),
            Self::Single => Some(4),
            Self::Double => Some(5),
            Self::Decimal => Some(6),
            Self::Null | Self::Boolean | Self::String => None,
        }
    }

    /// `true` for `Single` and `Double`.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Single | Self::Double)
    }

    /// Common type two numeric operands are widened to, if any.
    ///
    /// # Example
    /// ```
    /// use exprbind::interpreter::value::ValueType;
    ///
    /// assert_eq!(ValueType::Byte.promote_with(ValueType::Int64), Some(ValueType::Int64));
    /// assert_eq!(ValueType::Int32.promote_with(ValueType::Decimal), Some(ValueType::Decimal));
    /// assert_eq!(ValueType::Double.promote_with(ValueType::Decimal), None);
    /// ```
    #[must_use]
    pub fn promote_with(self, other: Self) -> Option<Self> {
        let left = self.numeric_rank()?;
        let right = other.numeric_rank()?;
        if (self == Self::Decimal && other.is_floating())
           || (other == Self::Decimal && self.is_floating())
        {
            return None;
        }
        Some(if left >= right { self } else { other })
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::String => "String",
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
        };
        f.write_str(name)
    }
}
