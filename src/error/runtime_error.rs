#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A unary operator was applied to a value of the wrong type.
    #[error("Error at offset {offset}: Operand of '{operator}' must be a number.")]
    OperandMustBeNumber {
        /// The operator symbol.
        operator: String,
        /// Byte offset of the operator.
        offset:   usize,
    },
    /// A binary arithmetic or comparison operator got a non-number.
    #[error("Error at offset {offset}: Operands of '{operator}' must be numbers.")]
    OperandsMustBeNumbers {
        /// The operator symbol.
        operator: String,
        /// Byte offset of the operator.
        offset:   usize,
    },
    /// `+` was applied to a pair that is neither numeric nor textual.
    #[error("Error at offset {offset}: Cannot add {left} and {right}; operands must be numbers or strings.")]
    InvalidAddition {
        /// Type name of the left operand.
        left:   String,
        /// Type name of the right operand.
        right:  String,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// Attempted division by zero.
    #[error("Error at offset {offset}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the operator.
        offset: usize,
    },
    /// Called a name that resolves to nothing.
    #[error("Error at offset {offset}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:   String,
        /// Byte offset of the call.
        offset: usize,
    },
    /// Accessed a method that is not in the function table.
    #[error("Error at offset {offset}: Unknown method '{name}'.")]
    UnknownMethod {
        /// The method selector.
        name:   String,
        /// Byte offset of the method name.
        offset: usize,
    },
    /// Tried to call a value that is not a function.
    #[error("Error at offset {offset}: Can only call functions and methods, found {found}.")]
    NotCallable {
        /// Type name of the value that was called.
        found:  String,
        /// Byte offset of the call.
        offset: usize,
    },
    /// A native function reported a failure.
    #[error("Error at offset {offset}: Call to '{selector}' failed: {message}.")]
    CallFailed {
        /// The selector of the failing function.
        selector: String,
        /// The message the function returned.
        message:  String,
        /// Byte offset of the call.
        offset:   usize,
    },
}

impl RuntimeError {
    /// Byte offset in the source of the operator or call that failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::OperandMustBeNumber { offset, .. }
            | Self::OperandsMustBeNumbers { offset, .. }
            | Self::InvalidAddition { offset, .. }
            | Self::DivisionByZero { offset }
            | Self::UnknownFunction { offset, .. }
            | Self::UnknownMethod { offset, .. }
            | Self::NotCallable { offset, .. }
            | Self::CallFailed { offset, .. } => *offset,
        }
    }
}
