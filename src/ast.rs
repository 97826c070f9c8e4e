use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree is built once by the parser and never mutated afterward. Each
/// node owns its children. Nodes whose evaluation can fail carry the byte
/// offset of the token that introduced them, for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal such as `6.25`.
    LiteralNumber(f64),
    /// A string literal, or one plaintext chunk of an interpolated literal.
    LiteralString(String),
    /// `true` or `false`.
    LiteralBool(bool),
    /// `nil`
    LiteralNil,
    /// Reference to a variable or function by name.
    Identifier {
        /// The identifier as written.
        name:   String,
        /// Byte offset in the source code.
        offset: usize,
    },
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Byte offset of the operator.
        offset:  usize,
    },
    /// A binary operation (addition, comparison, etc.).
    Binary {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// A parenthesized expression.
    Grouping(Box<Self>),
    /// A call such as `increment(1)` or `a.increment(1)`.
    Call {
        /// The expression producing the callable.
        callee:    Box<Self>,
        /// Arguments to the call.
        arguments: Vec<Self>,
        /// Byte offset of the opening parenthesis.
        offset:    usize,
    },
    /// Method access `receiver.method`, producing a callable bound to the
    /// receiver.
    CallMethod {
        /// The value the method is dispatched against.
        receiver: Box<Self>,
        /// The method selector.
        method:   String,
        /// Byte offset of the method name.
        offset:   usize,
    },
    /// An expression embedded in a string literal with `\( ... )`.
    StringInterpolation {
        /// The embedded expression.
        expr:   Box<Self>,
        /// Byte offset of the `\(`.
        offset: usize,
    },
}

/// A top-level statement.
///
/// The grammar only produces expression statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression evaluated for its value.
    Expression(Expr),
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`
    Negate,
    /// `!`
    Not,
}

/// Infix operators, all left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`, also string concatenation.
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::LessEqual => "<=",
        };
        write!(f, "{symbol}")
    }
}

impl Expr {
    /// Builds `left <op> right`.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, offset: usize) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right),
                       offset }
    }

    /// The byte offset used when reporting errors about this node.
    ///
    /// Literals carry no location of their own and report `0`; a grouping
    /// reports its inner expression.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::LiteralNumber(_) | Self::LiteralString(_) | Self::LiteralBool(_) | Self::LiteralNil => 0,
            Self::Identifier { offset, .. }
            | Self::Unary { offset, .. }
            | Self::Binary { offset, .. }
            | Self::Call { offset, .. }
            | Self::CallMethod { offset, .. }
            | Self::StringInterpolation { offset, .. } => *offset,
            Self::Grouping(inner) => inner.offset(),
        }
    }
}
