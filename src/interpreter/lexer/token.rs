use std::{fmt, mem};

/// One piece of a string literal.
///
/// A literal such as `"a\(x)b"` is emitted as
/// `Start, Plaintext("a"), InterpolationStart, <tokens of x>,
/// InterpolationEnd, Plaintext("b"), End`, which lets interpolated expressions
/// nest to any depth inside a single literal.
#[derive(Debug, Clone, PartialEq)]
pub enum StringSegment {
    /// The opening `"`.
    Start,
    /// A run of literal text with escapes already decoded.
    Plaintext(String),
    /// The `\(` that opens an embedded expression.
    InterpolationStart,
    /// The `)` that closes an embedded expression.
    InterpolationEnd,
    /// The closing `"`.
    End,
}

/// Literal payloads carried by [`TokenKind::Literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Numeric literal tokens, such as `3` or `6.25`.
    Number(f64),
    /// A segment of a string literal.
    String(StringSegment),
    /// `true` or `false`.
    Bool(bool),
    /// `nil`
    Nil,
}

/// Every kind of lexical unit the scanner produces.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `&`
    Ampersand,
    /// `&&`
    AmpersandAmpersand,
    /// `|`
    Pipe,
    /// `||`
    PipePipe,
    /// `and`
    And,
    /// `or`
    Or,
    /// Variable or function names such as `price` or `formatted`.
    Identifier(String),
    /// Numbers, string segments, booleans and `nil`.
    Literal(Literal),
    /// A lone `\` outside of a string literal.
    Backslash,
    /// Spaces, tabs and feeds.
    Whitespace,
    /// `\n`
    Newline,
    /// Anything the scanner could not make sense of. Carries no meaning.
    Trivia,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns `true` for tokens the parser has to look at.
    ///
    /// Whitespace, newlines, stray backslashes and trivia carry no
    /// grammatical meaning and are skipped before every match.
    #[must_use]
    pub const fn is_significant(&self) -> bool {
        !matches!(self, Self::Trivia | Self::Whitespace | Self::Newline | Self::Backslash)
    }

    /// Compares two kinds by category, ignoring payloads.
    ///
    /// Numbers match numbers, plaintext segments match plaintext segments and
    /// identifiers match identifiers regardless of the value they carry.
    /// Every other kind must be equal.
    ///
    /// # Example
    /// ```
    /// use glint::interpreter::lexer::token::{Literal, TokenKind};
    ///
    /// let a = TokenKind::Literal(Literal::Number(1.0));
    /// let b = TokenKind::Literal(Literal::Number(2.5));
    /// assert!(a.same_category(&b));
    /// assert!(!a.same_category(&TokenKind::Literal(Literal::Bool(true))));
    /// ```
    #[must_use]
    pub fn same_category(&self, other: &Self) -> bool {
        use StringSegment::Plaintext;

        match (self, other) {
            (Self::Identifier(_), Self::Identifier(_))
            | (Self::Literal(Literal::Number(_)), Self::Literal(Literal::Number(_)))
            | (Self::Literal(Literal::String(Plaintext(_))),
               Self::Literal(Literal::String(Plaintext(_)))) => true,
            (Self::Literal(a), Self::Literal(b)) => a == b,
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}

/// A lexical unit: the exact source text it covers plus its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The source text covered by this token, byte for byte.
    pub lexeme: String,
    /// What the lexeme means.
    pub kind:   TokenKind,
    /// Byte offset of the lexeme in the scanned source.
    pub offset: usize,
}

impl Token {
    #[must_use]
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, offset: usize) -> Self {
        Self { lexeme: lexeme.into(),
               kind,
               offset }
    }

    /// The `Eof` token placed after the last character of `source`.
    #[must_use]
    pub fn eof(offset: usize) -> Self {
        Self::new("", TokenKind::Eof, offset)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}

/// Reclassifies an identifier that is actually a keyword.
///
/// # Example
/// ```
/// use glint::interpreter::lexer::token::{Literal, TokenKind, keyword};
///
/// assert_eq!(keyword("nil"), Some(TokenKind::Literal(Literal::Nil)));
/// assert_eq!(keyword("nothing"), None);
/// ```
#[must_use]
pub fn keyword(name: &str) -> Option<TokenKind> {
    match name {
        "true" => Some(TokenKind::Literal(Literal::Bool(true))),
        "false" => Some(TokenKind::Literal(Literal::Bool(false))),
        "nil" => Some(TokenKind::Literal(Literal::Nil)),
        "and" => Some(TokenKind::And),
        "or" => Some(TokenKind::Or),
        _ => None,
    }
}
