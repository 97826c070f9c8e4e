use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::format_number,
};

impl Interpreter {
    /// Evaluates `-`, `*` and `/` on two numbers.
    ///
    /// Both operands must be numbers. Dividing by zero is reported as its own
    /// error instead of producing an infinity.
    ///
    /// # Example
    /// ```
    /// use glint::{Interpreter, Value, ast::BinaryOperator};
    ///
    /// let r = Interpreter::eval_arithmetic(BinaryOperator::Div,
    ///                                      &Value::Number(25.0),
    ///                                      &Value::Number(4.0),
    ///                                      0);
    /// assert_eq!(r.unwrap(), Value::Number(6.25));
    ///
    /// let r = Interpreter::eval_arithmetic(BinaryOperator::Div,
    ///                                      &Value::Number(1.0),
    ///                                      &Value::Number(0.0),
    ///                                      0);
    /// assert!(r.is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           offset: usize)
                           -> EvalResult<Value> {
        let (Value::Number(l), Value::Number(r)) = (left, right) else {
            return Err(RuntimeError::OperandsMustBeNumbers { operator: op.to_string(),
                                                             offset });
        };

        match op {
            BinaryOperator::Sub => Ok(Value::Number(l - r)),
            BinaryOperator::Mul => Ok(Value::Number(l * r)),
            BinaryOperator::Div if *r == 0.0 => Err(RuntimeError::DivisionByZero { offset }),
            BinaryOperator::Div => Ok(Value::Number(l / r)),
            _ => Err(RuntimeError::OperandsMustBeNumbers { operator: op.to_string(),
                                                           offset }),
        }
    }

    /// Evaluates the overloaded `+`.
    ///
    /// - number + number adds.
    /// - string + string concatenates.
    /// - number + string and string + number format the number with the
    ///   canonical formatter and concatenate.
    ///
    /// Every other combination is an error.
    pub fn eval_addition(left: Value, right: Value, offset: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::Text(l), Value::Text(r)) => Ok(Value::Text(l + &r)),
            (Value::Number(l), Value::Text(r)) => Ok(Value::Text(format_number(l) + &r)),
            (Value::Text(l), Value::Number(r)) => Ok(Value::Text(l + &format_number(r))),
            (l, r) => Err(RuntimeError::InvalidAddition { left: l.type_name().to_string(),
                                                          right: r.type_name().to_string(),
                                                          offset }),
        }
    }
}
