use std::{fmt, sync::Arc};

use crate::interpreter::value::core::Value;

/// Signature of a native function.
///
/// The first parameter is the bound caller (the receiver of a method call),
/// if any; the second is the evaluated argument list. A returned `Err` message
/// surfaces as a runtime error naming the function.
pub type NativeFn = dyn Fn(Option<&Value>, &[Value]) -> Result<Value, String> + Send + Sync;

/// A function value invocable from expressions.
///
/// Callables come from the host's function table or from the built-in
/// standard library. Method access (`receiver.method`) produces a copy of the
/// callable with the receiver bound as its caller; a later call passes that
/// caller to the native function.
///
/// # Example
/// ```
/// use glint::{Callable, Value};
///
/// let increment = Callable::new("increment", |caller, args| {
///     match (caller, args) {
///         (Some(Value::Number(n)), [Value::Number(by)]) => Ok(Value::Number(n + by)),
///         _ => Err("expected a number receiver and one number".to_string()),
///     }
/// });
///
/// let bound = increment.bind(Value::Number(2.0));
/// assert_eq!(bound.call(&[Value::Number(1.0)]), Ok(Value::Number(3.0)));
/// ```
#[derive(Clone)]
pub struct Callable {
    selector: String,
    caller:   Option<Box<Value>>,
    function: Arc<NativeFn>,
}

impl Callable {
    /// Creates an unbound callable.
    pub fn new<F>(selector: impl Into<String>, function: F) -> Self
        where F: Fn(Option<&Value>, &[Value]) -> Result<Value, String> + Send + Sync + 'static
    {
        Self { selector: selector.into(),
               caller:   None,
               function: Arc::new(function), }
    }

    /// The name the callable is looked up by.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The bound receiver, if this callable came from method access.
    #[must_use]
    pub fn caller(&self) -> Option<&Value> {
        self.caller.as_deref()
    }

    /// Returns a copy of this callable with `caller` bound as its receiver.
    #[must_use]
    pub fn bind(&self, caller: Value) -> Self {
        Self { selector: self.selector.clone(),
               caller:   Some(Box::new(caller)),
               function: Arc::clone(&self.function), }
    }

    /// Invokes the native function with the bound caller and `arguments`.
    pub fn call(&self, arguments: &[Value]) -> Result<Value, String> {
        (self.function)(self.caller(), arguments)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
         .field("selector", &self.selector)
         .field("caller", &self.caller)
         .finish_non_exhaustive()
    }
}

/// Callables are equal when they share a selector and a bound caller.
impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.selector == other.selector && self.caller == other.caller
    }
}
