use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operation to the specialized handler for its operator:
    /// `+` to `eval_addition`, the other arithmetic operators to
    /// `eval_arithmetic`, and relational and equality operators to
    /// `eval_comparison`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Byte offset of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use glint::{Interpreter, Value, ast::BinaryOperator};
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Add,
    ///                                       Value::Number(3.0),
    ///                                       Value::Text("a".to_string()),
    ///                                       0);
    /// assert_eq!(result.unwrap(), Value::Text("3a".to_string()));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       offset: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        match op {
            Add => Self::eval_addition(left, right, offset),
            Sub | Mul | Div => Self::eval_arithmetic(op, &left, &right, offset),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, &left, &right, offset)
            },
        }
    }
}
