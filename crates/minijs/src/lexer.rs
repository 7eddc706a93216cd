use serde::Serialize;

use crate::diagnostics::{line_excerpt, Position};
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::syntax;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    RoundBracketLeft,
    RoundBracketRight,
    SquareBracketLeft,
    SquareBracketRight,
    CurlyBracketLeft,
    CurlyBracketRight,
    StatementDelimiter,
    ListDelimiter,
    Colon,
    Assign,
    Equals,
    StrictEquals,
    Less,
    More,
    LessEquals,
    MoreEquals,
    PlusAssign,
    MinusAssign,
    MulAssign,
    DivAssign,
    Increment,
    Decrement,
    Arrow,
    Identifier,
    StringLiteral,
    NumberLiteral,
    FieldAccess,
}

impl TokenKind {
    pub fn is_closing_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::RoundBracketRight
                | TokenKind::SquareBracketRight
                | TokenKind::CurlyBracketRight
        )
    }
}

/// A scanned lexeme. For fixed-text tokens `text` is the exact spelling; for identifiers and
/// field accesses it is the name, for string literals the raw inner text and for numbers the
/// normalized literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub pos: Position,
}

/// Scans the token starting exactly at `offset`. Whitespace is not skipped here; callers move
/// the cursor with [`skip_whitespace`] after committing past a token. `Ok(None)` marks the end
/// of input.
pub fn next_token(chars: &[char], offset: usize) -> ParseResult<Option<Token>> {
    let Some(&ch) = chars.get(offset) else {
        return Ok(None);
    };

    if let Some(kind) = syntax::punctuation_kind(ch) {
        return Ok(Some(Token {
            kind,
            text: ch.to_string(),
            pos: Position::new(offset, 1),
        }));
    }

    if syntax::is_operator_char(ch) {
        let end = run_end(chars, offset, syntax::is_operator_char);
        let text: String = chars[offset..end].iter().collect();
        let Some(kind) = syntax::operator_kind(&text) else {
            return Err(lexical_error(
                chars,
                offset,
                format!("unknown operator `{text}`"),
            ));
        };
        return Ok(Some(Token {
            kind,
            text,
            pos: Position::new(offset, end - offset),
        }));
    }

    if let Some(token) = scan_identifier(chars, offset) {
        return Ok(Some(token));
    }

    if ch == '\'' || ch == '"' {
        return scan_string(chars, offset, ch).map(Some);
    }

    if ch.is_ascii_digit() {
        return Ok(Some(scan_number(chars, offset)));
    }

    if ch == '.' {
        return scan_dot(chars, offset).map(Some);
    }

    Err(lexical_error(
        chars,
        offset,
        format!("unexpected character '{ch}'"),
    ))
}

/// Returns the first offset at or after `offset` that is not whitespace.
pub fn skip_whitespace(chars: &[char], offset: usize) -> usize {
    run_end(chars, offset, char::is_whitespace)
}

/// Scans the whole buffer into a list of tokens. The parser never uses this; it exists for
/// inspecting how a source file lexes.
pub fn tokenize(text: &str) -> ParseResult<Vec<Token>> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut offset = skip_whitespace(&chars, 0);
    while let Some(token) = next_token(&chars, offset)? {
        offset = skip_whitespace(&chars, token.pos.end());
        tokens.push(token);
    }
    Ok(tokens)
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}

fn run_end(chars: &[char], offset: usize, accept: impl Fn(char) -> bool) -> usize {
    let mut index = offset;
    while index < chars.len() && accept(chars[index]) {
        index += 1;
    }
    index
}

fn scan_identifier(chars: &[char], offset: usize) -> Option<Token> {
    if !chars.get(offset).is_some_and(|ch| is_ident_start(*ch)) {
        return None;
    }
    let end = run_end(chars, offset + 1, is_ident_continue);
    Some(Token {
        kind: TokenKind::Identifier,
        text: chars[offset..end].iter().collect(),
        pos: Position::new(offset, end - offset),
    })
}

// The literal value keeps backslash sequences as written; a backslash only stops the quote that
// directly follows it from closing the literal.
fn scan_string(chars: &[char], offset: usize, quote: char) -> ParseResult<Token> {
    let mut index = offset + 1;
    while index < chars.len() {
        let ch = chars[index];
        if ch == '\n' {
            break;
        }
        if ch == quote && chars[index - 1] != '\\' {
            return Ok(Token {
                kind: TokenKind::StringLiteral,
                text: chars[offset + 1..index].iter().collect(),
                pos: Position::new(offset, index + 1 - offset),
            });
        }
        index += 1;
    }
    Err(lexical_error(
        chars,
        offset,
        "unterminated string literal",
    ))
}

fn scan_number(chars: &[char], offset: usize) -> Token {
    let mut end = run_end(chars, offset, |ch| ch.is_ascii_digit());
    if end + 1 < chars.len() && chars[end] == '.' && chars[end + 1].is_ascii_digit() {
        end = run_end(chars, end + 1, |ch| ch.is_ascii_digit());
    }
    Token {
        kind: TokenKind::NumberLiteral,
        text: chars[offset..end].iter().collect(),
        pos: Position::new(offset, end - offset),
    }
}

fn scan_dot(chars: &[char], offset: usize) -> ParseResult<Token> {
    if chars.get(offset + 1).is_some_and(|ch| ch.is_ascii_digit()) {
        let end = run_end(chars, offset + 1, |ch| ch.is_ascii_digit());
        let digits: String = chars[offset + 1..end].iter().collect();
        return Ok(Token {
            kind: TokenKind::NumberLiteral,
            text: format!("0.{digits}"),
            pos: Position::new(offset, end - offset),
        });
    }

    let name_start = skip_whitespace(chars, offset + 1);
    let Some(name) = scan_identifier(chars, name_start) else {
        return Err(lexical_error(
            chars,
            offset,
            "expected a field name after '.'",
        ));
    };
    Ok(Token {
        kind: TokenKind::FieldAccess,
        pos: Position::between(offset, name.pos.end()),
        text: name.text,
    })
}

fn lexical_error(chars: &[char], offset: usize, message: impl Into<String>) -> ParseError {
    ParseError::new(
        ParseErrorKind::LexicalError,
        message,
        offset,
        line_excerpt(chars, offset),
    )
}
