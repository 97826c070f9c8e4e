use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// For `Equal` and `NotEqual`, values are compared structurally and the
    /// comparison never fails: values of different kinds are simply unequal,
    /// and `Nil` equals only `Nil`. Relational operators require two numbers.
    ///
    /// # Example
    /// ```
    /// use glint::{Interpreter, Value, ast::BinaryOperator};
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Less,
    ///                                           &Value::Number(3.0),
    ///                                           &Value::Number(5.0),
    ///                                           0);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Equal,
    ///                                           &Value::Number(1.0),
    ///                                           &Value::Text("1".to_string()),
    ///                                           0);
    /// assert_eq!(result.unwrap(), Value::Boolean(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           offset: usize)
                           -> EvalResult<Value> {
        if let BinaryOperator::Equal | BinaryOperator::NotEqual = op {
            let equal = left == right;
            return Ok(Value::Boolean(if op == BinaryOperator::Equal { equal } else { !equal }));
        }

        let (Value::Number(l), Value::Number(r)) = (left, right) else {
            return Err(RuntimeError::OperandsMustBeNumbers { operator: op.to_string(),
                                                             offset });
        };

        Ok(Value::Boolean(match op {
                              BinaryOperator::Greater => l > r,
                              BinaryOperator::GreaterEqual => l >= r,
                              BinaryOperator::Less => l < r,
                              BinaryOperator::LessEqual => l <= r,
                              _ => {
                                  return Err(RuntimeError::OperandsMustBeNumbers {
                                      operator: op.to_string(),
                                      offset,
                                  });
                              },
                          }))
    }
}
