use std::fmt;

use crate::{interpreter::value::callable::Callable, util::num::format_number};

/// Represents a runtime value in the interpreter.
///
/// This closed union covers everything an expression can produce. Every
/// operator pattern-matches on it explicitly; there are no implicit
/// conversions apart from the number-to-text coercion of `+` and string
/// interpolation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Text(String),
    /// A boolean value (`true` or `false`).
    /// Produced by literals, comparison operators and `!`.
    Boolean(bool),
    /// The absence of a value. Unresolved identifiers evaluate to `Nil`.
    #[default]
    Nil,
    /// A native function, possibly bound to a receiver.
    Callable(Callable),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Self::Callable(v)
    }
}

impl TryFrom<Value> for f64 {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(other),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(other),
        }
    }
}

impl Value {
    /// Returns the number, or `None` if the value is not numeric.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text, or `None` if the value is not a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean, or `None` if the value is not a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Truthiness as used by `!`.
    ///
    /// `Nil` is falsy, booleans are themselves, and every other value is
    /// truthy.
    ///
    /// # Example
    /// ```
    /// use glint::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::Text(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Boolean(b) => *b,
            _ => true,
        }
    }

    /// Short type name used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Boolean(_) => "bool",
            Self::Nil => "nil",
            Self::Callable(_) => "function",
        }
    }
}

/// Numbers use the canonical formatter, so `4.0` prints as `4`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Text(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
            Self::Callable(c) => write!(f, "<fn {}>", c.selector()),
        }
    }
}
