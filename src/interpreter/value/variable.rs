use crate::interpreter::value::core::Value;

/// A named value supplied by the host.
///
/// Variables are read-only for the duration of an evaluation. Hosts normally
/// bind numbers, strings or booleans.
///
/// # Example
/// ```
/// use glint::{Value, Variable};
///
/// let price = Variable::new("price", 4.5);
/// assert_eq!(price.identifier, "price");
/// assert_eq!(price.value, Value::Number(4.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The name expressions use to refer to the value.
    pub identifier: String,
    /// The bound value.
    pub value:      Value,
}

impl Variable {
    #[must_use]
    pub fn new(identifier: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { identifier: identifier.into(),
               value:      value.into(), }
    }
}
