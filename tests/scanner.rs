use glint::interpreter::lexer::{
    scanner::scan,
    token::{Literal, StringSegment, Token, TokenKind},
};

fn kinds(src: &str) -> Vec<TokenKind> {
    scan(src).into_iter().map(|t| t.kind).collect()
}

fn significant(src: &str) -> Vec<TokenKind> {
    scan(src).into_iter()
             .map(|t| t.kind)
             .filter(TokenKind::is_significant)
             .collect()
}

fn lexemes(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.lexeme.as_str()).collect()
}

fn number(n: f64) -> TokenKind {
    TokenKind::Literal(Literal::Number(n))
}

fn segment(s: StringSegment) -> TokenKind {
    TokenKind::Literal(Literal::String(s))
}

fn plain(s: &str) -> TokenKind {
    segment(StringSegment::Plaintext(s.to_string()))
}

#[test]
fn empty_source_is_just_eof() {
    let tokens = scan("");
    assert_eq!(tokens, vec![Token::eof(0)]);
}

#[test]
fn operators_prefer_the_longest_match() {
    assert_eq!(significant("== != >= <= && || = ! > < & |"),
               vec![TokenKind::EqualEqual,
                    TokenKind::BangEqual,
                    TokenKind::GreaterEqual,
                    TokenKind::LessEqual,
                    TokenKind::AmpersandAmpersand,
                    TokenKind::PipePipe,
                    TokenKind::Equal,
                    TokenKind::Bang,
                    TokenKind::Greater,
                    TokenKind::Less,
                    TokenKind::Ampersand,
                    TokenKind::Pipe,
                    TokenKind::Eof]);
}

#[test]
fn punctuation() {
    assert_eq!(significant("()[]{},.:;+-*/"),
               vec![TokenKind::LeftParen,
                    TokenKind::RightParen,
                    TokenKind::LeftBracket,
                    TokenKind::RightBracket,
                    TokenKind::LeftBrace,
                    TokenKind::RightBrace,
                    TokenKind::Comma,
                    TokenKind::Dot,
                    TokenKind::Colon,
                    TokenKind::Semicolon,
                    TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Star,
                    TokenKind::Slash,
                    TokenKind::Eof]);
}

#[test]
fn numbers_need_a_digit_after_the_dot() {
    assert_eq!(significant("3.14"), vec![number(3.14), TokenKind::Eof]);
    assert_eq!(significant("3.formatted"),
               vec![number(3.0),
                    TokenKind::Dot,
                    TokenKind::Identifier("formatted".to_string()),
                    TokenKind::Eof]);
    assert_eq!(significant("1.5.rounded"),
               vec![number(1.5),
                    TokenKind::Dot,
                    TokenKind::Identifier("rounded".to_string()),
                    TokenKind::Eof]);
    assert_eq!(significant("7."), vec![number(7.0), TokenKind::Dot, TokenKind::Eof]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(significant("true false nil and or truthy _x"),
               vec![TokenKind::Literal(Literal::Bool(true)),
                    TokenKind::Literal(Literal::Bool(false)),
                    TokenKind::Literal(Literal::Nil),
                    TokenKind::And,
                    TokenKind::Or,
                    TokenKind::Identifier("truthy".to_string()),
                    TokenKind::Identifier("_x".to_string()),
                    TokenKind::Eof]);
}

#[test]
fn unicode_identifiers() {
    assert_eq!(significant("größe"),
               vec![TokenKind::Identifier("größe".to_string()), TokenKind::Eof]);
}

#[test]
fn whitespace_newlines_and_backslashes_are_kept() {
    assert_eq!(kinds("1 \n\\"),
               vec![number(1.0),
                    TokenKind::Whitespace,
                    TokenKind::Newline,
                    TokenKind::Backslash,
                    TokenKind::Eof]);
}

#[test]
fn unknown_characters_become_trivia() {
    let tokens = scan("1 # 2");
    assert_eq!(tokens[2].kind, TokenKind::Trivia);
    assert_eq!(tokens[2].lexeme, "#");
    assert_eq!(tokens[2].offset, 2);
}

#[test]
fn offsets_are_byte_positions() {
    let tokens = scan("é + 10");
    let offsets = tokens.iter().map(|t| t.offset).collect::<Vec<_>>();
    assert_eq!(offsets, vec![0, 2, 3, 4, 5, 7]);
}

#[test]
fn plain_string_segments() {
    assert_eq!(kinds("\"hi\""),
               vec![segment(StringSegment::Start),
                    plain("hi"),
                    segment(StringSegment::End),
                    TokenKind::Eof]);
    assert_eq!(kinds("\"\""),
               vec![segment(StringSegment::Start),
                    segment(StringSegment::End),
                    TokenKind::Eof]);
}

#[test]
fn escapes_are_decoded_but_lexemes_are_raw() {
    let tokens = scan(r#""a\"b\\c\n""#);
    assert_eq!(tokens[1].kind, plain("a\"b\\c\n"));
    assert_eq!(tokens[1].lexeme, r#"a\"b\\c\n"#);
}

#[test]
fn interpolation_segments() {
    assert_eq!(kinds(r#""a\(x)b""#),
               vec![segment(StringSegment::Start),
                    plain("a"),
                    segment(StringSegment::InterpolationStart),
                    TokenKind::Identifier("x".to_string()),
                    segment(StringSegment::InterpolationEnd),
                    plain("b"),
                    segment(StringSegment::End),
                    TokenKind::Eof]);
}

#[test]
fn interpolation_tracks_nested_parens() {
    assert_eq!(significant(r#""\((1))""#),
               vec![segment(StringSegment::Start),
                    segment(StringSegment::InterpolationStart),
                    TokenKind::LeftParen,
                    number(1.0),
                    TokenKind::RightParen,
                    segment(StringSegment::InterpolationEnd),
                    segment(StringSegment::End),
                    TokenKind::Eof]);
}

#[test]
fn strings_nest_inside_interpolation() {
    assert_eq!(significant(r#""\("in")""#),
               vec![segment(StringSegment::Start),
                    segment(StringSegment::InterpolationStart),
                    segment(StringSegment::Start),
                    plain("in"),
                    segment(StringSegment::End),
                    segment(StringSegment::InterpolationEnd),
                    segment(StringSegment::End),
                    TokenKind::Eof]);
}

#[test]
fn unterminated_string_collapses_to_one_trivia_token() {
    let src = "1 + \"abc \\(2";
    let tokens = scan(src);

    assert_eq!(tokens.iter().map(|t| t.kind.clone()).collect::<Vec<_>>(),
               vec![number(1.0),
                    TokenKind::Whitespace,
                    TokenKind::Plus,
                    TokenKind::Whitespace,
                    TokenKind::Trivia,
                    TokenKind::Eof]);
    assert_eq!(tokens[4].lexeme, "\"abc \\(2");
    assert_eq!(tokens[4].offset, 4);
    assert_eq!(lexemes(&tokens), src);
}

#[test]
fn unterminated_inner_string_abandons_the_outer_one() {
    let src = r#""a \("b"#;
    let tokens = scan(src);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Trivia);
    assert_eq!(lexemes(&tokens), src);
}

#[test]
fn lexemes_reassemble_the_source() {
    for src in ["(3 + 3) + (2 * 4)",
                "\"$\\(25/4)\"",
                "a.increment(1)\n",
                "\"leading\\(\"1\" + 2)trailing\"",
                "  ## ?? \t",
                "\"\\q\\",
                "größe.uppercased()"]
    {
        assert_eq!(lexemes(&scan(src)), src, "round trip failed for {src:?}");
    }
}
