use logos::Logos;

use crate::interpreter::lexer::token::TokenKind;

/// The context-free part of the lexical grammar.
///
/// The scanner runs this table against the remaining input one token at a
/// time. String literals, the fractional part of numbers and keywords are
/// handled by the scanner itself, since they need lookahead or recursion that
/// a flat table cannot express.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    /// A run of ASCII digits, the integral part of a number.
    #[regex(r"[0-9]+")]
    Digits,
    /// Identifier tokens; variable or function names such as `x` or
    /// `formatted`.
    #[regex(r"[\p{L}_·][\p{L}\p{N}_·]*")]
    Identifier,
    /// `"`
    #[token("\"")]
    Quote,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `&&`
    #[token("&&")]
    AmpersandAmpersand,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `|`
    #[token("|")]
    Pipe,
    /// `\`
    #[token("\\")]
    Backslash,
    /// `\n`
    #[token("\n")]
    Newline,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+")]
    Whitespace,
}

impl RawToken {
    /// Maps a payload-free raw token onto the token model.
    ///
    /// Returns `None` for the raw tokens the scanner has to finish by hand:
    /// digits, identifiers and quotes.
    #[must_use]
    pub fn simple_kind(self) -> Option<TokenKind> {
        Some(match self {
            Self::Digits | Self::Identifier | Self::Quote => return None,
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::LeftBracket => TokenKind::LeftBracket,
            Self::RightBracket => TokenKind::RightBracket,
            Self::LeftBrace => TokenKind::LeftBrace,
            Self::RightBrace => TokenKind::RightBrace,
            Self::Comma => TokenKind::Comma,
            Self::Dot => TokenKind::Dot,
            Self::Colon => TokenKind::Colon,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::BangEqual => TokenKind::BangEqual,
            Self::Bang => TokenKind::Bang,
            Self::EqualEqual => TokenKind::EqualEqual,
            Self::Equal => TokenKind::Equal,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::Greater => TokenKind::Greater,
            Self::LessEqual => TokenKind::LessEqual,
            Self::Less => TokenKind::Less,
            Self::AmpersandAmpersand => TokenKind::AmpersandAmpersand,
            Self::Ampersand => TokenKind::Ampersand,
            Self::PipePipe => TokenKind::PipePipe,
            Self::Pipe => TokenKind::Pipe,
            Self::Backslash => TokenKind::Backslash,
            Self::Newline => TokenKind::Newline,
            Self::Whitespace => TokenKind::Whitespace,
        })
    }
}
