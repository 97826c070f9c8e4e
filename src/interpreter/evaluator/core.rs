use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::function::builtin::standard_library,
        lexer::scanner::scan,
        parser::core::parse,
        value::{callable::Callable, core::Value, variable::Variable},
    },
    util::num::format_number,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates expressions against a host-supplied environment.
///
/// An interpreter holds the variable table and the function table (the
/// built-in standard library followed by the host's functions). Both are
/// fixed at construction and only ever read, so evaluation takes `&self` and
/// one interpreter can serve any number of evaluations, from any number of
/// threads.
///
/// ## Usage
///
/// ```
/// use glint::{Callable, Interpreter, Value, Variable};
///
/// let increment = Callable::new("increment", |caller, args| {
///     match (caller, args) {
///         (Some(Value::Number(n)), [Value::Number(by)]) => Ok(Value::Number(n + by)),
///         _ => Err("increment needs a number".to_string()),
///     }
/// });
/// let interpreter = Interpreter::new(vec![Variable::new("a", 2.0)], vec![increment]);
///
/// assert_eq!(interpreter.interpret("a.increment(1)").unwrap(), Value::Number(3.0));
/// assert_eq!(interpreter.interpret("\"$\" + (100 / 25)").unwrap(), Value::from("$4"));
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter {
    variables: Vec<Variable>,
    functions: Vec<Callable>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl Interpreter {
    /// Creates an interpreter over the given tables.
    ///
    /// The function table starts with the built-in standard library, followed
    /// by `functions`. When two functions share a selector the later one wins,
    /// so host functions can replace built-ins.
    #[must_use]
    pub fn new(variables: Vec<Variable>, functions: Vec<Callable>) -> Self {
        let mut table = standard_library();
        table.extend(functions);

        Self { variables,
               functions: table }
    }

    #[must_use]
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// The merged function table, built-ins first.
    #[must_use]
    pub fn functions(&self) -> &[Callable] {
        &self.functions
    }

    /// Scans, parses and evaluates `source`.
    ///
    /// Returns `Value::Nil` when the source holds no expression, or when the
    /// expression itself evaluates to nothing.
    ///
    /// # Errors
    /// Returns `Error::Parse` for malformed source and `Error::Runtime` when
    /// evaluation fails.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn interpret(&self, source: &str) -> Result<Value, Error> {
        let tokens = scan(source);
        let statements = parse(&tokens)?;
        Ok(self.execute(&statements)?)
    }

    /// Interprets `source` and converts the result to the type of `default`.
    ///
    /// This is the host's path for values that may be unresolved: any error
    /// or type mismatch yields `default` instead.
    ///
    /// # Example
    /// ```
    /// use glint::Interpreter;
    ///
    /// let interpreter = Interpreter::default();
    ///
    /// assert_eq!(interpreter.evaluate_or("2 * 21", 0.0), 42.0);
    /// assert_eq!(interpreter.evaluate_or("1 / 0", 0.0), 0.0);
    /// assert_eq!(interpreter.evaluate_or("\"text\"", 0.0), 0.0);
    /// ```
    pub fn evaluate_or<T>(&self, source: &str, default: T) -> T
        where T: TryFrom<Value, Error = Value>
    {
        match self.interpret(source) {
            Ok(value) => T::try_from(value).unwrap_or_else(|value| {
                                               debug!(source,
                                                      found = value.type_name(),
                                                      "result has an unexpected type, using default");
                                               default
                                           }),
            Err(e) => {
                debug!(source, error = %e, "expression is unresolved, using default");
                default
            },
        }
    }

    /// Executes statements in order.
    ///
    /// Intermediate results are discarded. The value of the only statement is
    /// returned when there is exactly one; otherwise the result is `Nil`.
    ///
    /// # Errors
    /// Stops at, and returns, the first runtime error.
    pub fn execute(&self, statements: &[Statement]) -> EvalResult<Value> {
        let mut last = Value::Nil;
        for statement in statements {
            last = self.eval_statement(statement)?;
        }

        Ok(if statements.len() == 1 { last } else { Value::Nil })
    }

    /// Evaluates a single statement.
    pub fn eval_statement(&self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Expression(expr) => self.eval(expr),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Children are
    /// evaluated before their parent, left to right.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::LiteralNumber(n) => Ok(Value::Number(*n)),
            Expr::LiteralString(s) => Ok(Value::Text(s.clone())),
            Expr::LiteralBool(b) => Ok(Value::Boolean(*b)),
            Expr::LiteralNil => Ok(Value::Nil),
            Expr::Identifier { name, .. } => Ok(self.resolve(name)),
            Expr::Unary { op, operand, offset } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*op, &value, *offset)
            },
            Expr::Binary { left,
                           op,
                           right,
                           offset, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *offset)
            },
            Expr::Grouping(inner) => self.eval(inner),
            Expr::Call { callee,
                         arguments,
                         offset, } => self.eval_call(callee, arguments, *offset),
            Expr::CallMethod { receiver,
                               method,
                               offset, } => {
                let receiver = self.eval(receiver)?;
                self.bind_method(method, receiver, *offset)
            },
            Expr::StringInterpolation { expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::interpolate(value))
            },
        }
    }

    /// Renders an interpolated value as text.
    ///
    /// Strings pass through, numbers use the canonical formatter and other
    /// values their `Display` form. `Nil` stays `Nil`, so `"\(nil)"` is
    /// `Nil` rather than the text `"nil"`.
    #[must_use]
    pub fn interpolate(value: Value) -> Value {
        match value {
            Value::Nil => Value::Nil,
            Value::Text(s) => Value::Text(s),
            Value::Number(n) => Value::Text(format_number(n)),
            other => Value::Text(other.to_string()),
        }
    }
}
