use tracing::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{callable::Callable, core::Value},
    },
};

impl Interpreter {
    /// Resolves an identifier.
    ///
    /// Variables are searched first, then the function table; a function
    /// resolves to an unbound callable. Names that resolve to nothing
    /// evaluate to `Nil`, which is not an error.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Value {
        if let Some(variable) = self.variables().iter().find(|v| v.identifier == name) {
            return variable.value.clone();
        }
        if let Some(function) = self.lookup_function(name) {
            return Value::Callable(function.clone());
        }

        trace!(name, "unresolved identifier evaluates to nil");
        Value::Nil
    }

    /// Finds a function by selector. Later entries shadow earlier ones.
    #[must_use]
    pub fn lookup_function(&self, selector: &str) -> Option<&Callable> {
        self.functions().iter().rev().find(|f| f.selector() == selector)
    }

    /// Evaluates a call.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    /// A callable is invoked with its bound caller, if any.
    ///
    /// # Errors
    /// - `UnknownFunction` when the callee is a name that resolved to nothing.
    /// - `NotCallable` when the callee is any other non-function value.
    /// - `CallFailed` when the native function reports an error.
    pub(crate) fn eval_call(&self,
                            callee: &Expr,
                            arguments: &[Expr],
                            offset: usize)
                            -> EvalResult<Value> {
        let target = self.eval(callee)?;
        let arg_vals = arguments.iter()
                                .map(|argument| self.eval(argument))
                                .collect::<EvalResult<Vec<_>>>()?;

        match target {
            Value::Callable(callable) => callable.call(&arg_vals).map_err(|message| {
                let selector = callable.selector().to_string();
                RuntimeError::CallFailed { selector,
                                           message,
                                           offset }
            }),
            Value::Nil => match callee {
                Expr::Identifier { name, .. } => {
                    Err(RuntimeError::UnknownFunction { name: name.clone(),
                                                        offset })
                },
                _ => Err(RuntimeError::NotCallable { found: Value::Nil.type_name().to_string(),
                                                     offset }),
            },
            other => Err(RuntimeError::NotCallable { found: other.type_name().to_string(),
                                                     offset }),
        }
    }

    /// Evaluates method access by binding `receiver` to the function named
    /// `method`.
    ///
    /// Only the function table is searched. The result is a callable that a
    /// following call suffix invokes; without one it is returned as a value.
    ///
    /// # Errors
    /// Returns `UnknownMethod` if no function has the selector `method`.
    pub(crate) fn bind_method(&self,
                              method: &str,
                              receiver: Value,
                              offset: usize)
                              -> EvalResult<Value> {
        self.lookup_function(method)
            .map(|function| Value::Callable(function.bind(receiver)))
            .ok_or_else(|| RuntimeError::UnknownMethod { name: method.to_string(),
                                                         offset })
    }
}
