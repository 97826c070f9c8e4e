use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation; any other operand is an error.
    /// - `Not`: logical negation of the operand's truthiness. `Nil` is falsy,
    ///   booleans negate directly and every other value is truthy.
    ///
    /// # Example
    /// ```
    /// use glint::{Interpreter, Value, ast::UnaryOperator};
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 0).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::Nil, 0).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// assert!(Interpreter::eval_unary(UnaryOperator::Negate, &Value::Boolean(true), 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, offset: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(RuntimeError::OperandMustBeNumber { operator: op.to_string(),
                                                             offset }),
            },
            UnaryOperator::Not => Ok(Value::Boolean(!value.is_truthy())),
        }
    }
}
