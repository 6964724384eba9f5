use std::fmt;

/// The type a configuration value is coerced into when it is read.
///
/// Carried by [`crate::errors::ConfigError::TypeCoercion`] so callers can tell
/// which conversion failed without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Non-empty filesystem path. Existence is not checked.
    Path,
    /// Non-negative integer.
    Integer,
    /// Non-negative, finite floating-point number.
    Float,
    /// `1/yes/true/on` or `0/no/false/off`, case-insensitive.
    Boolean,
    /// Any string, after interpolation.
    String,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Path => "path",
            ValueType::Integer => "integer",
            ValueType::Float => "float",
            ValueType::Boolean => "boolean",
            ValueType::String => "string",
        };
        f.write_str(name)
    }
}
